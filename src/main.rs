use std::path::{Path, PathBuf};

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use define_rewriter::cli;
use define_rewriter::engine::{RewriteOutput, Rewriter};
use define_rewriter::files::{self, collect_source_files, mirror_path, write_output};
use define_rewriter::logging::{self, Verbosity};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Serialize)]
struct FileSummary<'a> {
    path: &'a Path,
    substitutions: usize,
    folds: usize,
    edits: &'a [define_rewriter::engine::Edit],
}

impl<'a> FileSummary<'a> {
    fn new(path: &'a Path, output: &'a RewriteOutput) -> Self {
        Self {
            path,
            substitutions: output.substitution_count(),
            folds: output.fold_count(),
            edits: &output.edits,
        }
    }
}

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let base_dir = std::env::current_dir().context("Cannot determine current directory")?;
    let defines = args.load_defines(&base_dir)?;
    info!(count = defines.len(), "loaded defines");

    let rewriter = Rewriter::builder(defines)
        .with_options(args.rewrite_options())
        .build();

    if args.path.is_dir() {
        let out_dir = args
            .out_dir
            .as_deref()
            .context("--out-dir is required when --path is a directory")?;
        rewrite_directory(&args, &rewriter, out_dir)
    } else {
        rewrite_single_file(&args, &rewriter)
    }
}

fn rewrite_single_file(args: &cli::Args, rewriter: &Rewriter) -> Result<()> {
    let output = rewrite_file(args, rewriter, &args.path)?;

    match &args.output_file {
        Some(out) => {
            write_output(out, &output.code)?;
            info!(path = %out.display(), "wrote output");
        }
        None => print!("{}", output.code),
    }

    if args.summary {
        print_summary(&[FileSummary::new(&args.path, &output)])?;
    }
    Ok(())
}

fn rewrite_directory(args: &cli::Args, rewriter: &Rewriter, out_dir: &Path) -> Result<()> {
    let files = collect_source_files(&args.path)?;
    info!(count = files.len(), root = %args.path.display(), "rewriting directory");

    let mut results: Vec<(PathBuf, RewriteOutput)> = Vec::new();
    let mut failures = 0usize;
    for file in &files {
        match rewrite_file(args, rewriter, file) {
            Ok(output) => {
                let target = mirror_path(&args.path, file, out_dir);
                write_output(&target, &output.code)?;
                results.push((file.clone(), output));
            }
            Err(e) => {
                warn!(path = %file.display(), error = %format!("{e:#}"), "skipped file");
                failures += 1;
            }
        }
    }

    if args.summary {
        let summaries: Vec<FileSummary> = results
            .iter()
            .map(|(path, output)| FileSummary::new(path, output))
            .collect();
        print_summary(&summaries)?;
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} files could not be rewritten", files.len());
    }
    Ok(())
}

fn rewrite_file(args: &cli::Args, rewriter: &Rewriter, file: &Path) -> Result<RewriteOutput> {
    let language = args.language_for(file).with_context(|| {
        format!(
            "Could not detect language of {}. Please specify --language",
            file.display()
        )
    })?;
    let output = files::rewrite_file(rewriter, file, language)?;
    info!(
        path = %file.display(),
        substitutions = output.substitution_count(),
        folds = output.fold_count(),
        "rewrote file"
    );
    Ok(output)
}

fn print_summary(summaries: &[FileSummary]) -> Result<()> {
    let json = serde_json::to_string_pretty(summaries).context("Failed to serialize summary")?;
    eprintln!("{json}");
    Ok(())
}
