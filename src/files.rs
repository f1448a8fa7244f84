use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::engine::{Language, RewriteOutput, Rewriter};
use crate::error::{self, IoError};

pub const EXCLUDED_DIRS: &[&str] = &["node_modules"];

/// Collects every JavaScript / TypeScript source below `root`, sorted.
///
/// Hidden files and directories and `node_modules` are skipped.
pub fn collect_source_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| {
        if e.depth() == 0 {
            return true;
        }
        let name = e.file_name().to_string_lossy();
        if name.starts_with('.') {
            return false;
        }
        !(e.file_type().is_dir() && EXCLUDED_DIRS.contains(&name.as_ref()))
    }) {
        let entry = entry.map_err(|e| IoError::directory_scan_error(root, e))?;

        if entry.file_type().is_file() && Language::from_path(entry.path()).is_some() {
            trace!(path = %entry.path().display(), "found source file");
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.is_file() {
        return Err(IoError::file_not_found(path));
    }
    fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))
}

/// Reads and rewrites one file.
pub fn rewrite_file(
    rewriter: &Rewriter,
    path: &Path,
    language: Language,
) -> error::Result<RewriteOutput> {
    let source = read_source(path)?;
    Ok(rewriter.rewrite(&source, path, language)?)
}

/// Writes `contents`, creating missing parent directories.
pub fn write_output(path: &Path, contents: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| IoError::write_error(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| IoError::write_error(path, e))
}

/// Where `file` (found below `root`) goes below `out_dir`.
pub fn mirror_path(root: &Path, file: &Path, out_dir: &Path) -> PathBuf {
    match file.strip_prefix(root) {
        Ok(relative) => out_dir.join(relative),
        Err(_) => out_dir.join(file.file_name().unwrap_or(file.as_os_str())),
    }
}
