pub mod batch;
pub mod config;
pub mod naming;
pub mod tags;
pub mod testing;
pub mod transcoder;

pub use batch::{
    BatchError, BatchEvent, BatchRequest, BatchRunner, BatchSummary, BatchTracker, InputSelection,
    PlannedFile,
};
pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, Config,
    ConfigError, LoggingConfig,
};
pub use naming::{build_name, generate_output_path, resolve_collision, sanitize, OutputSpec};
pub use tags::{AudioFile, AudioFormat, LoftyTagReader, TagKey, TagReader, TagSet};
pub use transcoder::{
    ConversionResult, ConversionStatus, FfmpegTranscoder, Transcoder, TranscoderConfig,
    TranscoderError,
};
