//! Source directory scanning.
//!
//! A batch run takes one flat directory of images. The scanner lists the
//! directory (non-recursively), keeps files whose extension is a supported
//! image format, and returns them sorted by file name so batch output and
//! collage member order are stable across runs.

use crate::imaging::SUPPORTED_EXTENSIONS;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to read directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("no supported images found in {0}")]
    NoImages(PathBuf),
}

/// List the supported image files directly inside `dir`, sorted by name.
///
/// Subdirectories are not descended into; hidden files and unsupported
/// extensions are skipped silently.
pub fn scan_images(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if is_supported(entry.path()) {
            images.push(entry.into_path());
        }
    }

    if images.is_empty() {
        return Err(ScanError::NoImages(dir.to_path_buf()));
    }
    Ok(images)
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
        .unwrap_or(false)
}
