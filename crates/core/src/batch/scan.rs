//! Input enumeration.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::config::InputSelection;
use super::error::BatchError;
use crate::tags::AudioFile;

/// An enumerated input: either a file to convert or one to report as skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEntry {
    Convert(AudioFile),
    Skip { path: PathBuf, reason: String },
}

impl ScanEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::Convert(file) => file.path(),
            Self::Skip { path, .. } => path,
        }
    }
}

/// Enumerates the files a selection refers to, in processing order.
pub fn enumerate(selection: &InputSelection) -> Result<Vec<ScanEntry>, BatchError> {
    match selection {
        InputSelection::Directory(dir) => Ok(scan_directory(dir)?
            .into_iter()
            .map(ScanEntry::Convert)
            .collect()),
        InputSelection::Files(files) => Ok(files.iter().map(|p| classify_file(p)).collect()),
    }
}

/// Recursively collects `.flac`/`.mp3` files below `dir`, sorted by path.
pub fn scan_directory(dir: &Path) -> Result<Vec<AudioFile>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::InputNotFound {
            path: dir.to_path_buf(),
        });
    }

    let walker = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_resource_fork(e));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(BatchError::Scan {
                    path: dir.to_path_buf(),
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                warn!("Error accessing entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(file) = AudioFile::from_path(entry.path()) {
            files.push(file);
        }
    }

    debug!(dir = ?dir, count = files.len(), "Directory scan complete");
    Ok(files)
}

fn classify_file(path: &Path) -> ScanEntry {
    let skip = |reason: &str| ScanEntry::Skip {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    if !path.exists() {
        return skip("File not found");
    }
    if !path.is_file() {
        return skip("Not a regular file");
    }
    match AudioFile::from_path(path) {
        Some(file) => ScanEntry::Convert(file),
        None => skip("Unsupported file type (expected .flac or .mp3)"),
    }
}

/// macOS `._name` metadata companions carry the audio extension but no audio.
fn is_resource_fork(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with("._")
}
