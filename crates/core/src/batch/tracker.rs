//! Status list rebuilt from batch events.

use serde::Serialize;
use std::path::PathBuf;

use super::types::{BatchEvent, BatchState, BatchSummary, FileState};

/// One row of the status list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub state: FileState,
    pub message: Option<String>,
}

/// Per-file status list, owned by the consumer of the event stream.
///
/// Only [`BatchTracker::apply`] mutates it, so it never needs sharing with the
/// task running the batch.
#[derive(Debug, Clone, Default)]
pub struct BatchTracker {
    state: BatchState,
    entries: Vec<StatusEntry>,
    summary: Option<BatchSummary>,
}

impl BatchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: &BatchEvent) {
        match event {
            BatchEvent::Started { files, .. } => {
                self.state = BatchState::Running;
                self.summary = None;
                self.entries = files
                    .iter()
                    .map(|path| StatusEntry {
                        input_path: path.clone(),
                        output_path: None,
                        state: FileState::Pending,
                        message: None,
                    })
                    .collect();
            }
            BatchEvent::FileStarted { index, output, .. } => {
                if let Some(entry) = self.entries.get_mut(*index) {
                    entry.state = FileState::Converting;
                    entry.output_path = Some(output.clone());
                }
            }
            BatchEvent::FileFinished { index, result, .. } => {
                if let Some(entry) = self.entries.get_mut(*index) {
                    entry.state = result.status.into();
                    entry.output_path = result.output_path.clone();
                    entry.message = result.message.clone();
                }
            }
            BatchEvent::Completed { summary } => {
                self.state = BatchState::Complete;
                self.summary = Some(*summary);
            }
        }
    }

    pub fn state(&self) -> BatchState {
        self.state
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn summary(&self) -> Option<&BatchSummary> {
        self.summary.as_ref()
    }
}
