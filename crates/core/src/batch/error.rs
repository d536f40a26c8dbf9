//! Error types for the batch module.

use std::path::PathBuf;
use thiserror::Error;

use crate::transcoder::TranscoderError;

/// Batch-level failures. Each one aborts the run before any file is processed.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The transcoder probe failed.
    #[error("Transcoder unavailable: {0}")]
    TranscoderUnavailable(#[source] TranscoderError),

    /// Output directory could not be created.
    #[error("Cannot create output directory {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input directory does not exist.
    #[error("Input not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Input directory could not be read.
    #[error("Cannot scan {path}: {reason}")]
    Scan { path: PathBuf, reason: String },
}
