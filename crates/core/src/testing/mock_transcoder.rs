//! Mock transcoder for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::transcoder::{ConversionResult, Transcoder, TranscoderError};

/// Bytes written to every "converted" output.
pub const MOCK_AIFF_BYTES: &[u8] = b"FORM\0\0\0\x04AIFF";

/// A recorded conversion for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedConversion {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Mock implementation of the Transcoder trait.
///
/// Provides controllable behavior for testing:
/// - Track conversions for assertions
/// - Fail or panic on specific inputs
/// - Simulate a missing ffmpeg
///
/// Successful conversions write [`MOCK_AIFF_BYTES`] to the output path, so
/// collision handling sees them like real files. Clones share state.
///
/// # Example
///
/// ```rust,ignore
/// use aiffme_core::testing::MockTranscoder;
///
/// let transcoder = MockTranscoder::new();
/// transcoder.fail_on("/music/broken.flac", "Invalid data found").await;
///
/// let runner = BatchRunner::new(transcoder.clone(), MockTagReader::new());
/// runner.run(request, None).await?;
///
/// assert_eq!(transcoder.conversion_count().await, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTranscoder {
    conversions: Arc<RwLock<Vec<RecordedConversion>>>,
    failures: Arc<RwLock<HashMap<PathBuf, String>>>,
    panics: Arc<RwLock<HashSet<PathBuf>>>,
    unavailable: Arc<RwLock<bool>>,
}

impl MockTranscoder {
    /// Create a new mock transcoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose probe reports ffmpeg as missing.
    pub fn unavailable() -> Self {
        Self {
            unavailable: Arc::new(RwLock::new(true)),
            ..Self::default()
        }
    }

    /// Get all recorded conversions.
    pub async fn recorded_conversions(&self) -> Vec<RecordedConversion> {
        self.conversions.read().await.clone()
    }

    /// Get the number of conversions attempted.
    pub async fn conversion_count(&self) -> usize {
        self.conversions.read().await.len()
    }

    /// Make conversions of `input` fail with `message`.
    pub async fn fail_on(&self, input: impl AsRef<Path>, message: impl Into<String>) {
        self.failures
            .write()
            .await
            .insert(input.as_ref().to_path_buf(), message.into());
    }

    /// Make conversions of `input` panic.
    pub async fn panic_on(&self, input: impl AsRef<Path>) {
        self.panics
            .write()
            .await
            .insert(input.as_ref().to_path_buf());
    }

    /// Toggle whether the probe reports ffmpeg as missing.
    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().await = unavailable;
    }
}

#[async_trait]
impl Transcoder for MockTranscoder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn validate(&self) -> Result<String, TranscoderError> {
        if *self.unavailable.read().await {
            return Err(TranscoderError::FfmpegNotFound {
                path: PathBuf::from("ffmpeg"),
            });
        }
        Ok("mock version 1.0".to_string())
    }

    async fn convert(&self, input: &Path, output: &Path) -> ConversionResult {
        self.conversions.write().await.push(RecordedConversion {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        });

        if self.panics.read().await.contains(input) {
            panic!("mock transcoder panic for {}", input.display());
        }

        if let Some(message) = self.failures.read().await.get(input) {
            return ConversionResult::failed(
                input.to_path_buf(),
                Some(output.to_path_buf()),
                message.clone(),
            );
        }

        match tokio::fs::write(output, MOCK_AIFF_BYTES).await {
            Ok(()) => ConversionResult::converted(input.to_path_buf(), output.to_path_buf()),
            Err(e) => ConversionResult::failed(
                input.to_path_buf(),
                Some(output.to_path_buf()),
                e.to_string(),
            ),
        }
    }
}
