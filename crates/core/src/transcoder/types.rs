//! Types for the transcoder module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome category for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionStatus {
    /// AIFF written and non-empty.
    Converted,
    /// Conversion was attempted and did not produce a usable file.
    Failed,
    /// File was not attempted.
    Skipped,
}

/// Result of processing a single input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Input file path.
    pub input_path: PathBuf,
    /// Output file path (planned path when not converted).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    /// Outcome.
    pub status: ConversionStatus,
    /// Diagnostic text for failures and skips.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ConversionResult {
    pub fn converted(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path: Some(output_path),
            status: ConversionStatus::Converted,
            message: None,
        }
    }

    pub fn failed(
        input_path: PathBuf,
        output_path: Option<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            input_path,
            output_path,
            status: ConversionStatus::Failed,
            message: Some(message.into()),
        }
    }

    pub fn skipped(input_path: PathBuf, message: impl Into<String>) -> Self {
        Self {
            input_path,
            output_path: None,
            status: ConversionStatus::Skipped,
            message: Some(message.into()),
        }
    }

    pub fn is_converted(&self) -> bool {
        self.status == ConversionStatus::Converted
    }
}

/// Fixed AIFF output parameters.
///
/// 16-bit big-endian PCM at 44.1 kHz stereo plays on every CDJ generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiffProfile {
    pub sample_rate_hz: u32,
    pub channels: u8,
    pub codec: &'static str,
    pub container: &'static str,
}

/// The only profile conversions use.
pub const CDJ_PROFILE: AiffProfile = AiffProfile {
    sample_rate_hz: 44_100,
    channels: 2,
    codec: "pcm_s16be",
    container: "aiff",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_constructors() {
        let ok = ConversionResult::converted(PathBuf::from("/in.flac"), PathBuf::from("/out.aiff"));
        assert!(ok.is_converted());
        assert_eq!(ok.message, None);

        let failed = ConversionResult::failed(PathBuf::from("/in.flac"), None, "boom");
        assert_eq!(failed.status, ConversionStatus::Failed);
        assert_eq!(failed.message.as_deref(), Some("boom"));

        let skipped = ConversionResult::skipped(PathBuf::from("/in.wav"), "unsupported");
        assert_eq!(skipped.status, ConversionStatus::Skipped);
        assert!(skipped.output_path.is_none());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ConversionStatus::Converted).unwrap();
        assert_eq!(json, "\"converted\"");
    }
}
