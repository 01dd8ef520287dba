use std::path::Path;
use walkdir::WalkDir;

use super::data::{FileList, ImageEntry};
use crate::error::{AppError, Result};

/// Scan a folder for images the browser can show.
///
/// Only the folder's immediate children are considered; sub-folders are
/// skipped. A file qualifies when its name, lower-cased, ends with one of
/// `extensions`. Directory-listing order is kept as-is.
///
/// Returns `AppError::EmptyFolder` when nothing qualifies.
pub fn scan<S: AsRef<str>>(folder: &Path, extensions: &[S]) -> Result<FileList> {
    log::info!("🔍 Scanning folder: {}", folder.display());

    // Surface a missing/unreadable folder as an I/O error rather than "empty"
    std::fs::read_dir(folder)?;

    let suffixes: Vec<String> = extensions
        .iter()
        .map(|ext| ext.as_ref().to_lowercase())
        .collect();

    let mut entries = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("⚠️  Skipping unreadable entry: {}", e);
                continue;
            }
        };

        // Only regular files (not directories)
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !has_supported_suffix(&name, &suffixes) {
            skipped_count += 1;
            continue;
        }

        entries.push(ImageEntry {
            name,
            path: entry.into_path(),
        });
    }

    log::info!(
        "📊 Scan summary: {} images, {} other files skipped",
        entries.len(),
        skipped_count
    );

    FileList::new(folder.to_path_buf(), entries)
}

/// Case-insensitive suffix match; `suffixes` must already be lower-case
fn has_supported_suffix(name: &str, suffixes: &[String]) -> bool {
    let name = name.to_lowercase();
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}
