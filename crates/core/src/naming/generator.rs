//! Output name generation from tags with an original-filename fallback.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::tags::{TagKey, TagSet};

use super::collision::resolve_collision_with;
use super::output_file_name;
use super::sanitize::sanitize;

/// Where a converted file will be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputSpec {
    /// Directory the file is written into.
    pub output_dir: PathBuf,
    /// Final file name including the `.aiff` extension.
    pub file_name: String,
    /// `output_dir` joined with `file_name`.
    pub path: PathBuf,
}

/// Picks the unsanitized base name for a file.
///
/// `"{artist} - {title}"` when both are tagged, the single value when only one
/// is, otherwise the original file stem.
pub fn build_name(file_path: &Path, tags: &TagSet) -> String {
    let artist = tags.get(TagKey::Artist).map(str::trim).filter(|v| !v.is_empty());
    let title = tags.get(TagKey::Title).map(str::trim).filter(|v| !v.is_empty());

    match (artist, title) {
        (Some(artist), Some(title)) => format!("{} - {}", artist, title),
        (Some(single), None) | (None, Some(single)) => single.to_string(),
        (None, None) => file_stem(file_path),
    }
}

/// Sanitizes `name` and resolves it against files already in `output_dir`.
pub fn generate_output_path(name: &str, output_dir: &Path) -> OutputSpec {
    generate_output_path_with(name, output_dir, |path| path.exists())
}

/// Same as [`generate_output_path`], with `is_taken` deciding which paths are in use.
pub fn generate_output_path_with<F>(name: &str, output_dir: &Path, is_taken: F) -> OutputSpec
where
    F: Fn(&Path) -> bool,
{
    let base = sanitize(name);
    let path = resolve_collision_with(output_dir, &base, is_taken);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output_file_name(&base));

    OutputSpec {
        output_dir: output_dir.to_path_buf(),
        file_name,
        path,
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
