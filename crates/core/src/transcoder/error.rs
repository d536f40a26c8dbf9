//! Error types for the transcoder module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while probing or running the transcoder.
#[derive(Debug, Error)]
pub enum TranscoderError {
    /// FFmpeg binary not found.
    #[error("FFmpeg not found at path: {path}")]
    FfmpegNotFound { path: PathBuf },

    /// `-version` probe ran but did not succeed.
    #[error("FFmpeg probe failed: {reason}")]
    ProbeFailed { reason: String },

    /// `-version` probe did not answer in time.
    #[error("FFmpeg probe timed out after {timeout_secs} seconds")]
    ProbeTimeout { timeout_secs: u64 },

    /// Conversion process exited unsuccessfully.
    #[error("Conversion failed: {reason}")]
    ConversionFailed {
        reason: String,
        stderr: Option<String>,
    },

    /// Conversion timed out and the process was killed.
    #[error("Conversion timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// I/O error while running the process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscoderError {
    /// Creates a new conversion failed error with stderr output.
    pub fn conversion_failed(reason: impl Into<String>, stderr: Option<String>) -> Self {
        Self::ConversionFailed {
            reason: reason.into(),
            stderr,
        }
    }

    /// Creates a new probe failed error.
    pub fn probe_failed(reason: impl Into<String>) -> Self {
        Self::ProbeFailed {
            reason: reason.into(),
        }
    }

    /// Whether this error means the transcoder cannot be used at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::FfmpegNotFound { .. } | Self::ProbeFailed { .. } | Self::ProbeTimeout { .. }
        )
    }

    /// Text to record as the reason a file failed.
    ///
    /// Prefers the captured diagnostic stream over the summary message.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::ConversionFailed {
                stderr: Some(stderr),
                ..
            } if !stderr.trim().is_empty() => stderr.clone(),
            other => other.to_string(),
        }
    }
}
