//! Request values for a batch run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Suffix appended to the input folder name for the default output folder.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_AIFF";

/// Where the input files come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum InputSelection {
    /// Explicitly selected files, processed in the given order.
    Files(Vec<PathBuf>),
    /// Every `.flac`/`.mp3` file below a directory.
    Directory(PathBuf),
}

impl InputSelection {
    /// The folder the selection is rooted in.
    ///
    /// For explicit files this is the first file's parent.
    pub fn input_dir(&self) -> Option<PathBuf> {
        match self {
            Self::Directory(dir) => Some(dir.clone()),
            Self::Files(files) => files.first().map(|f| match f.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            }),
        }
    }
}

/// One batch run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub source: InputSelection,
    /// Target folder. Derived from the input folder when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl BatchRequest {
    /// Request converting everything below `dir`.
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: InputSelection::Directory(dir.into()),
            output_dir: None,
        }
    }

    /// Request converting an explicit list of files.
    pub fn files(files: Vec<PathBuf>) -> Self {
        Self {
            source: InputSelection::Files(files),
            output_dir: None,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }

    /// The explicit output folder, or the default beside the input folder.
    pub fn resolved_output_dir(&self) -> Option<PathBuf> {
        self.output_dir
            .clone()
            .or_else(|| self.source.input_dir().map(|dir| default_output_dir(&dir)))
    }
}

/// `<parent>/<name>_AIFF` for an input folder.
pub fn default_output_dir(input_dir: &Path) -> PathBuf {
    let input_dir = input_dir
        .canonicalize()
        .or_else(|_| std::path::absolute(input_dir))
        .unwrap_or_else(|_| input_dir.to_path_buf());

    let name = input_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let parent = input_dir.parent().unwrap_or(&input_dir);

    parent.join(format!("{}{}", name, DEFAULT_OUTPUT_SUFFIX))
}
