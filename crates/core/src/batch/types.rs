//! Types for the batch module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::transcoder::{ConversionResult, ConversionStatus};

/// Per-file lifecycle: `Pending → Converting → {Done, Failed}`, or `Pending → Skipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileState {
    Pending,
    Converting,
    Done,
    Failed,
    Skipped,
}

impl FileState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Converting => "Converting",
            Self::Done => "Done",
            Self::Failed => "Failed",
            Self::Skipped => "Skipped",
        }
    }
}

impl From<ConversionStatus> for FileState {
    fn from(status: ConversionStatus) -> Self {
        match status {
            ConversionStatus::Converted => Self::Done,
            ConversionStatus::Failed => Self::Failed,
            ConversionStatus::Skipped => Self::Skipped,
        }
    }
}

/// Batch lifecycle: `Idle → Running → Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchState {
    #[default]
    Idle,
    Running,
    Complete,
}

/// Aggregate counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total: usize,
}

impl BatchSummary {
    /// Folds one file's outcome into the counts.
    pub fn record(&mut self, result: &ConversionResult) {
        match result.status {
            ConversionStatus::Converted => self.converted += 1,
            ConversionStatus::Failed => self.failed += 1,
            ConversionStatus::Skipped => self.skipped += 1,
        }
        self.total += 1;
    }

    /// True when files were given but none converted.
    pub fn nothing_converted(&self) -> bool {
        self.total > 0 && self.converted == 0
    }

    /// True when files were given but every one was skipped.
    pub fn all_skipped(&self) -> bool {
        self.total > 0 && self.skipped == self.total
    }
}

/// Typed progress events, emitted in order by a running batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BatchEvent {
    /// Enumeration finished; `files` is in processing order.
    Started { total: usize, files: Vec<PathBuf> },
    /// A file's output name is resolved and conversion begins.
    FileStarted {
        index: usize,
        total: usize,
        input: PathBuf,
        output: PathBuf,
    },
    /// A file reached a final state.
    FileFinished {
        index: usize,
        total: usize,
        result: ConversionResult,
    },
    /// Every file has been processed.
    Completed { summary: BatchSummary },
}

/// Preview of one file's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedFile {
    pub input_path: PathBuf,
    /// Output path a real run would use. `None` when the file would be skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,
}
