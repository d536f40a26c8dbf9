//! Error types for the tags module.

use std::path::PathBuf;
use thiserror::Error;

use lofty::error::LoftyError;

/// Errors raised while reading tags.
///
/// These never leave [`TagReader::extract`](super::TagReader::extract); callers see an
/// empty tag set instead.
#[derive(Debug, Error)]
pub enum TagError {
    /// The file's extension is not a supported container.
    #[error("Unsupported tag container: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// The tag library could not read the file.
    #[error(transparent)]
    Lofty(#[from] LoftyError),
}
