//! Trait definitions for the transcoder module.

use async_trait::async_trait;
use std::path::Path;

use super::error::TranscoderError;
use super::types::ConversionResult;

/// Converts one source file into an AIFF file.
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Returns the name of this transcoder implementation.
    fn name(&self) -> &str;

    /// Checks that the transcoder can run, returning its version line.
    async fn validate(&self) -> Result<String, TranscoderError>;

    /// Converts `input` to `output`.
    ///
    /// Failures are reported in the returned result, never as an error.
    async fn convert(&self, input: &Path, output: &Path) -> ConversionResult;
}
