//! Batch orchestration.
//!
//! A run validates the transcoder, enumerates the input selection, creates the
//! output directory and then converts files strictly one at a time. Progress is
//! streamed as [`BatchEvent`]s over a channel; the consumer rebuilds whatever
//! view it needs (see [`BatchTracker`]).

mod config;
mod error;
mod runner;
mod scan;
mod tracker;
mod types;

pub use config::{default_output_dir, BatchRequest, InputSelection, DEFAULT_OUTPUT_SUFFIX};
pub use error::BatchError;
pub use runner::{BatchRunner, EVENT_CHANNEL_CAPACITY};
pub use scan::{enumerate, scan_directory, ScanEntry};
pub use tracker::{BatchTracker, StatusEntry};
pub use types::{BatchEvent, BatchState, BatchSummary, FileState, PlannedFile};
