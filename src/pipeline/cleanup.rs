//! File sweeps over the working directory
//!
//! Artifacts are matched purely by filename convention: the base name the
//! render was started with, plus the extension. Nothing here recurses;
//! only files directly inside the directory are considered.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::PipelineError;

/// List the files directly inside `dir`, sorted by name
fn files_in(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let entries = fs::read_dir(dir)
        .map_err(|e| PipelineError::io(format!("failed to read {}", dir.display()), e))?;

    let mut files = vec![];
    for entry in entries {
        let entry = entry
            .map_err(|e| PipelineError::io(format!("failed to read {}", dir.display()), e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Delete files whose name starts with `base` and whose extension is listed
///
/// Deletion is irreversible; there is no dry-run. Files with other
/// extensions or other base names are untouched. An empty extension list
/// deletes nothing. Returns the deleted paths.
pub fn sweep_extensions(
    dir: &Path,
    base: &str,
    extensions: &[String],
) -> Result<Vec<PathBuf>, PipelineError> {
    if extensions.is_empty() {
        return Ok(vec![]);
    }

    let mut removed = vec![];
    for path in files_in(dir)? {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext,
            None => continue,
        };
        if name.starts_with(base) && extensions.iter().any(|e| e == ext) {
            fs::remove_file(&path)
                .map_err(|e| PipelineError::io(format!("failed to remove {}", path.display()), e))?;
            removed.push(path);
        }
    }

    debug!("swept {} intermediate files for base {}", removed.len(), base);
    Ok(removed)
}

/// Delete files whose stem equals `base`, whatever their extension
///
/// Catches every intermediate sharing the exact base name (`base.tex`,
/// `base.png`, ...) while sparing suffixed outputs like `base_32.ico`.
pub fn sweep_stem(dir: &Path, base: &str) -> Result<Vec<PathBuf>, PipelineError> {
    let mut removed = vec![];
    for path in files_in(dir)? {
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem,
            None => continue,
        };
        if stem == base && path.extension().is_some() {
            fs::remove_file(&path)
                .map_err(|e| PipelineError::io(format!("failed to remove {}", path.display()), e))?;
            removed.push(path);
        }
    }

    debug!("swept {} files with stem {}", removed.len(), base);
    Ok(removed)
}

/// Move files whose name starts with `base` into `dest`, preserving names
///
/// The destination directory is created if missing. Files outside the
/// prefix stay put. Returns the new paths of the moved files.
pub fn relocate(dir: &Path, base: &str, dest: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    fs::create_dir_all(dest)
        .map_err(|e| PipelineError::io(format!("failed to create {}", dest.display()), e))?;

    let mut moved = vec![];
    for path in files_in(dir)? {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        if name.starts_with(base) {
            let target = dest.join(name);
            fs::rename(&path, &target).map_err(|e| {
                PipelineError::io(
                    format!("failed to move {} to {}", path.display(), target.display()),
                    e,
                )
            })?;
            moved.push(target);
        }
    }

    debug!("relocated {} files to {}", moved.len(), dest.display());
    Ok(moved)
}

/// Sorted listing of files whose name starts with `base`
pub fn collect_prefixed(dir: &Path, base: &str) -> Result<Vec<PathBuf>, PipelineError> {
    let files = files_in(dir)?
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| name.starts_with(base))
        })
        .collect();
    Ok(files)
}
