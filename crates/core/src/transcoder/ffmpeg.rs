//! FFmpeg-based transcoder implementation.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::debug;

use super::config::TranscoderConfig;
use super::error::TranscoderError;
use super::traits::Transcoder;
use super::types::{ConversionResult, CDJ_PROFILE};

/// FFmpeg-based transcoder implementation.
pub struct FfmpegTranscoder {
    config: TranscoderConfig,
    ffmpeg_path: PathBuf,
}

impl FfmpegTranscoder {
    /// Creates a new FFmpeg transcoder, resolving the binary path once.
    pub fn new(config: TranscoderConfig) -> Self {
        let ffmpeg_path = config.resolved_ffmpeg_path();
        Self {
            config,
            ffmpeg_path,
        }
    }

    /// Creates a transcoder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(TranscoderConfig::default())
    }

    /// The binary this transcoder invokes.
    pub fn ffmpeg_path(&self) -> &Path {
        &self.ffmpeg_path
    }

    /// Builds ffmpeg arguments for an AIFF conversion.
    pub fn build_args(input_path: &Path, output_path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-i".into(), input_path.into()];
        args.extend(
            [
                "-ar".to_string(),
                CDJ_PROFILE.sample_rate_hz.to_string(),
                "-ac".to_string(),
                CDJ_PROFILE.channels.to_string(),
                "-c:a".to_string(),
                CDJ_PROFILE.codec.to_string(),
                // Copy source metadata, take every audio stream
                "-map_metadata".to_string(),
                "0".to_string(),
                "-map".to_string(),
                "0:a".to_string(),
                "-f".to_string(),
                CDJ_PROFILE.container.to_string(),
                "-y".to_string(),
            ]
            .map(OsString::from),
        );
        args.push(output_path.into());
        args
    }

    /// Runs the conversion, returning the output size on success.
    async fn run_conversion(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<u64, TranscoderError> {
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut child = Command::new(&self.ffmpeg_path)
            .args(Self::build_args(input_path, output_path))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| std::io::Error::other("ffmpeg stderr was not captured"))?;

        let timeout_secs = self.config.timeout_secs;
        let outcome = timeout(Duration::from_secs(timeout_secs), async {
            let mut buf = Vec::new();
            stderr.read_to_end(&mut buf).await?;
            let status = child.wait().await?;
            Ok::<_, std::io::Error>((status, buf))
        })
        .await;

        let (status, stderr_bytes) = match outcome {
            Ok(Ok(done)) => done,
            Ok(Err(e)) => return Err(TranscoderError::Io(e)),
            Err(_) => {
                // Kill the process on timeout
                let _ = child.kill().await;
                return Err(TranscoderError::Timeout { timeout_secs });
            }
        };

        let stderr_text = String::from_utf8_lossy(&stderr_bytes);
        let tail = tail_chars(&stderr_text, self.config.diagnostic_tail_chars);
        let tail = (!tail.is_empty()).then_some(tail);

        if !status.success() {
            return Err(TranscoderError::conversion_failed(
                format!("FFmpeg exited with code: {:?}", status.code()),
                tail,
            ));
        }

        let size = match tokio::fs::metadata(output_path).await {
            Ok(meta) => meta.len(),
            Err(_) => {
                return Err(TranscoderError::conversion_failed(
                    "Output file was not created",
                    tail,
                ))
            }
        };

        if size == 0 {
            return Err(TranscoderError::conversion_failed("Output file is empty", tail));
        }

        Ok(size)
    }

    fn spawn_error(&self, e: std::io::Error) -> TranscoderError {
        if e.kind() == std::io::ErrorKind::NotFound {
            TranscoderError::FfmpegNotFound {
                path: self.ffmpeg_path.clone(),
            }
        } else {
            TranscoderError::Io(e)
        }
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    async fn validate(&self) -> Result<String, TranscoderError> {
        let timeout_secs = self.config.probe_timeout_secs;
        let probe = Command::new(&self.ffmpeg_path)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = match timeout(Duration::from_secs(timeout_secs), probe).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TranscoderError::FfmpegNotFound {
                    path: self.ffmpeg_path.clone(),
                });
            }
            Ok(Err(e)) => return Err(TranscoderError::probe_failed(e.to_string())),
            Err(_) => return Err(TranscoderError::ProbeTimeout { timeout_secs }),
        };

        if !output.status.success() {
            return Err(TranscoderError::probe_failed(format!(
                "ffmpeg -version exited with code: {:?}",
                output.status.code()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let version = stdout.lines().next().unwrap_or_default().trim().to_string();
        debug!(path = ?self.ffmpeg_path, version = %version, "FFmpeg probe succeeded");
        Ok(version)
    }

    async fn convert(&self, input: &Path, output: &Path) -> ConversionResult {
        match self.run_conversion(input, output).await {
            Ok(_) => ConversionResult::converted(input.to_path_buf(), output.to_path_buf()),
            Err(e) => ConversionResult::failed(
                input.to_path_buf(),
                Some(output.to_path_buf()),
                e.diagnostic(),
            ),
        }
    }
}

/// Last `max_chars` characters of `text`, trimmed.
fn tail_chars(text: &str, max_chars: usize) -> String {
    let text = text.trim_end();
    let count = text.chars().count();
    let tail: String = text.chars().skip(count.saturating_sub(max_chars)).collect();
    tail.trim_start().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcoder::ConversionStatus;

    fn args_as_strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_build_args_fixed_profile() {
        let args = FfmpegTranscoder::build_args(
            Path::new("/music/in.flac"),
            Path::new("/out/Foo - Bar.aiff"),
        );
        let args = args_as_strings(&args);

        assert_eq!(
            args,
            vec![
                "-i",
                "/music/in.flac",
                "-ar",
                "44100",
                "-ac",
                "2",
                "-c:a",
                "pcm_s16be",
                "-map_metadata",
                "0",
                "-map",
                "0:a",
                "-f",
                "aiff",
                "-y",
                "/out/Foo - Bar.aiff",
            ]
        );
    }

    #[test]
    fn test_tail_chars() {
        assert_eq!(tail_chars("short", 200), "short");
        assert_eq!(tail_chars("abcdef", 3), "def");
        assert_eq!(tail_chars("line one\nline two\n", 9), "line two");
        assert_eq!(tail_chars("abc\n\n\n", 3), "abc");
        assert_eq!(tail_chars("ééé", 2), "éé");
        assert_eq!(tail_chars("", 10), "");
    }

    #[tokio::test]
    async fn test_validate_missing_binary() {
        let transcoder = FfmpegTranscoder::new(TranscoderConfig::with_ffmpeg_path(
            PathBuf::from("/nonexistent/ffmpeg-binary"),
        ));
        let err = transcoder.validate().await.unwrap_err();
        assert!(matches!(err, TranscoderError::FfmpegNotFound { .. }));
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn test_convert_missing_binary_is_failed_result() {
        let dir = tempfile::TempDir::new().unwrap();
        let transcoder = FfmpegTranscoder::new(TranscoderConfig::with_ffmpeg_path(
            PathBuf::from("/nonexistent/ffmpeg-binary"),
        ));
        let output = dir.path().join("out.aiff");
        let result = transcoder.convert(Path::new("/in.flac"), &output).await;

        assert_eq!(result.status, ConversionStatus::Failed);
        assert_eq!(result.output_path, Some(output));
        assert!(result.message.unwrap().contains("FFmpeg not found"));
    }
}
