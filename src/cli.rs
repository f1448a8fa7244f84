use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::{parse_define, ConfigSource, Defines};
use crate::engine::{self, PathOrdering, ResolveOptions, RewriteOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    Js,
    Ts,
    Tsx,
}

#[derive(Parser, Debug)]
#[command(name = "define-rewrite")]
#[command(about = "Replace configured globals in JavaScript / TypeScript with literals and fold the result", long_about = None)]
pub struct Args {
    /// File or directory to rewrite
    #[arg(long, value_name = "PATH")]
    pub path: PathBuf,

    /// Defines file (JSON or YAML), relative to the current directory
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extra define, e.g. -D process.env.NODE_ENV=production. Takes
    /// precedence over the config file. Can be specified multiple times.
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    pub defines: Vec<String>,

    /// Output file for single-file input (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output directory; required for directory input
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Language (auto-detected from the extension if not specified)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Do not fold binary expressions around substitutions
    #[arg(long)]
    pub no_fold: bool,

    /// Substitute false, 0, "" and null instead of skipping them
    #[arg(long)]
    pub allow_falsy: bool,

    /// Try config paths in plain enumeration order
    #[arg(long)]
    pub legacy_order: bool,

    /// Print a JSON summary of every edit to stderr
    #[arg(long)]
    pub summary: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_path(&self.path)?;
        if self.config.is_none() && self.defines.is_empty() {
            anyhow::bail!("Nothing to define: pass --config and/or --define");
        }
        if self.path.is_dir() {
            if self.out_dir.is_none() {
                anyhow::bail!("--out-dir is required when --path is a directory");
            }
            if self.output_file.is_some() {
                anyhow::bail!("-O/--output-file only applies to a single input file");
            }
        }
        Ok(())
    }

    pub fn config_source(&self) -> Option<ConfigSource> {
        self.config.clone().map(ConfigSource::File)
    }

    /// `--define` pairs, in command-line order.
    pub fn parsed_defines(&self) -> Result<Vec<(String, serde_json::Value)>> {
        self.defines
            .iter()
            .map(|define| parse_define(define).map_err(anyhow::Error::from))
            .collect()
    }

    /// Loads the config file (if any) against `base_dir` and layers the
    /// `--define` pairs on top.
    pub fn load_defines(&self, base_dir: &Path) -> Result<Defines> {
        let defines = match self.config_source() {
            Some(source) => crate::config::load(&source, base_dir)
                .with_context(|| format!("Failed to load defines from {}", source_label(&source)))?,
            None => Defines::new(),
        };
        Ok(defines.with_overrides(self.parsed_defines()?))
    }

    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            fold: !self.no_fold,
            resolve: ResolveOptions {
                ordering: if self.legacy_order {
                    PathOrdering::Enumeration
                } else {
                    PathOrdering::LongestFirst
                },
                allow_falsy: self.allow_falsy,
            },
        }
    }

    /// Explicit `--language`, else detection from the file extension.
    pub fn language_for(&self, file: &Path) -> Option<engine::Language> {
        self.language
            .map(engine::Language::from)
            .or_else(|| engine::Language::from_path(file))
    }
}

fn source_label(source: &ConfigSource) -> String {
    match source {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Inline(_) => "inline value".to_string(),
    }
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    } else if path.is_dir() {
        std::fs::metadata(path)
            .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    } else {
        anyhow::bail!("Path is neither a file nor a directory: {}", path.display());
    }

    Ok(())
}

impl From<Language> for engine::Language {
    fn from(language: Language) -> Self {
        match language {
            Language::Js => engine::Language::JavaScript,
            Language::Ts => engine::Language::TypeScript,
            Language::Tsx => engine::Language::Tsx,
        }
    }
}
