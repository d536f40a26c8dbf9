//! Transcoder module for FLAC/MP3 to AIFF conversion.
//!
//! Conversion is delegated to an external ffmpeg process invoked with a fixed
//! parameter set (44.1 kHz, stereo, 16-bit big-endian PCM, AIFF container,
//! source metadata copied).
//!
//! # Example
//!
//! ```ignore
//! use aiffme_core::transcoder::{FfmpegTranscoder, Transcoder, TranscoderConfig};
//!
//! let transcoder = FfmpegTranscoder::new(TranscoderConfig::default());
//!
//! // Fails fast when ffmpeg is missing
//! let version = transcoder.validate().await?;
//!
//! let result = transcoder
//!     .convert(Path::new("/music/in.flac"), Path::new("/out/Foo - Bar.aiff"))
//!     .await;
//! println!("{:?}", result.status);
//! ```

mod config;
mod error;
mod ffmpeg;
mod locate;
mod traits;
mod types;

pub use config::TranscoderConfig;
pub use error::TranscoderError;
pub use ffmpeg::FfmpegTranscoder;
pub use locate::{locate_ffmpeg, FFMPEG_BINARY};
pub use traits::Transcoder;
pub use types::{AiffProfile, ConversionResult, ConversionStatus, CDJ_PROFILE};
