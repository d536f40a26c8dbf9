//! Configuration for the transcoder module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::locate::locate_ffmpeg;

/// Configuration for the FFmpeg-based transcoder.
///
/// Only process handling is configurable; the codec parameters are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscoderConfig {
    /// Path to ffmpeg binary. Discovered when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ffmpeg_path: Option<PathBuf>,

    /// Timeout for a single conversion in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Timeout for the `-version` availability probe in seconds.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,

    /// How many trailing characters of ffmpeg's stderr to keep on failure.
    #[serde(default = "default_diagnostic_tail")]
    pub diagnostic_tail_chars: usize,
}

fn default_timeout() -> u64 {
    300
}

fn default_probe_timeout() -> u64 {
    5
}

fn default_diagnostic_tail() -> usize {
    200
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: None,
            timeout_secs: default_timeout(),
            probe_timeout_secs: default_probe_timeout(),
            diagnostic_tail_chars: default_diagnostic_tail(),
        }
    }
}

impl TranscoderConfig {
    /// Creates a config with an explicit ffmpeg path.
    pub fn with_ffmpeg_path(ffmpeg_path: PathBuf) -> Self {
        Self {
            ffmpeg_path: Some(ffmpeg_path),
            ..Default::default()
        }
    }

    /// Sets the conversion timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Sets the probe timeout in seconds.
    pub fn with_probe_timeout(mut self, probe_timeout_secs: u64) -> Self {
        self.probe_timeout_secs = probe_timeout_secs;
        self
    }

    /// The configured ffmpeg path, or the discovered one.
    pub fn resolved_ffmpeg_path(&self) -> PathBuf {
        self.ffmpeg_path.clone().unwrap_or_else(locate_ffmpeg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TranscoderConfig::default();
        assert_eq!(config.ffmpeg_path, None);
        assert_eq!(config.timeout_secs, 300);
        assert_eq!(config.probe_timeout_secs, 5);
        assert_eq!(config.diagnostic_tail_chars, 200);
    }

    #[test]
    fn test_config_builder() {
        let config = TranscoderConfig::with_ffmpeg_path(PathBuf::from("/opt/ffmpeg"))
            .with_timeout(60)
            .with_probe_timeout(2);

        assert_eq!(config.resolved_ffmpeg_path(), PathBuf::from("/opt/ffmpeg"));
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.probe_timeout_secs, 2);
    }

    #[test]
    fn test_config_partial_toml_uses_defaults() {
        let config: TranscoderConfig = toml::from_str("timeout_secs = 120").unwrap();
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.probe_timeout_secs, 5);
        assert!(config.ffmpeg_path.is_none());
    }
}
