//! Batch runner: enumerates inputs and converts them one at a time.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::naming::{build_name, generate_output_path, generate_output_path_with};
use crate::tags::{AudioFile, TagReader, TagSet};
use crate::transcoder::{ConversionResult, Transcoder};

use super::config::{default_output_dir, BatchRequest};
use super::error::BatchError;
use super::scan::{enumerate, ScanEntry};
use super::types::{BatchEvent, BatchSummary, PlannedFile};

/// Capacity of the event channel created by [`BatchRunner::spawn`].
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Runs conversion batches.
///
/// Holds only its collaborators; every run is described entirely by the
/// [`BatchRequest`] passed in.
pub struct BatchRunner<T: Transcoder, R: TagReader> {
    transcoder: Arc<T>,
    tag_reader: Arc<R>,
}

impl<T: Transcoder + 'static, R: TagReader + 'static> BatchRunner<T, R> {
    pub fn new(transcoder: T, tag_reader: R) -> Self {
        Self {
            transcoder: Arc::new(transcoder),
            tag_reader: Arc::new(tag_reader),
        }
    }

    /// Runs `request` on a background task.
    ///
    /// Events arrive on the returned receiver in processing order; the task's
    /// result is the same as [`BatchRunner::run`].
    pub fn spawn(
        self: Arc<Self>,
        request: BatchRequest,
    ) -> (
        JoinHandle<Result<BatchSummary, BatchError>>,
        mpsc::Receiver<BatchEvent>,
    ) {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let handle = tokio::spawn(async move { self.run(request, Some(tx)).await });
        (handle, rx)
    }

    /// Runs `request` to completion.
    ///
    /// Precondition failures (transcoder unavailable, unreadable input,
    /// uncreatable output directory) abort before any file is touched. After
    /// that, per-file failures are recorded and the batch continues.
    pub async fn run(
        &self,
        request: BatchRequest,
        events: Option<mpsc::Sender<BatchEvent>>,
    ) -> Result<BatchSummary, BatchError> {
        let version = self
            .transcoder
            .validate()
            .await
            .map_err(BatchError::TranscoderUnavailable)?;
        debug!(transcoder = self.transcoder.name(), version = %version, "Transcoder available");

        let entries = enumerate(&request.source)?;
        if entries.is_empty() {
            info!("No input files found");
            emit(&events, BatchEvent::Started { total: 0, files: Vec::new() }).await;
            let summary = BatchSummary::default();
            emit(&events, BatchEvent::Completed { summary }).await;
            return Ok(summary);
        }

        // Only a batch with something to convert gets an output directory
        let output_dir = resolve_output_dir(&request);
        if entries.iter().any(|e| matches!(e, ScanEntry::Convert(_))) {
            tokio::fs::create_dir_all(&output_dir)
                .await
                .map_err(|source| BatchError::OutputDirectory {
                    path: output_dir.clone(),
                    source,
                })?;
        }

        let total = entries.len();
        info!(total, output_dir = ?output_dir, "Batch started");
        emit(
            &events,
            BatchEvent::Started {
                total,
                files: entries.iter().map(|e| e.path().to_path_buf()).collect(),
            },
        )
        .await;

        let mut summary = BatchSummary::default();
        for (index, entry) in entries.iter().enumerate() {
            let result = match entry {
                ScanEntry::Convert(file) => {
                    self.convert_file(index, total, file, &output_dir, &events)
                        .await
                }
                ScanEntry::Skip { path, reason } => {
                    debug!(input = ?path, reason = %reason, "Skipping file");
                    ConversionResult::skipped(path.clone(), reason.clone())
                }
            };

            summary.record(&result);
            emit(
                &events,
                BatchEvent::FileFinished {
                    index,
                    total,
                    result,
                },
            )
            .await;
        }

        info!(
            converted = summary.converted,
            skipped = summary.skipped,
            failed = summary.failed,
            total = summary.total,
            "Batch complete"
        );
        emit(&events, BatchEvent::Completed { summary }).await;

        Ok(summary)
    }

    /// Computes each file's output path without converting anything.
    ///
    /// Names chosen earlier in the preview count as taken, so the preview
    /// matches what a run into the same directory would produce. Neither the
    /// transcoder nor the output directory is touched.
    pub async fn plan(&self, request: &BatchRequest) -> Result<Vec<PlannedFile>, BatchError> {
        let entries = enumerate(&request.source)?;
        let output_dir = resolve_output_dir(request);

        let mut reserved: HashSet<PathBuf> = HashSet::new();
        let mut planned = Vec::with_capacity(entries.len());

        for entry in entries {
            match entry {
                ScanEntry::Convert(file) => {
                    let tags = self.read_tags(&file).await.unwrap_or_default();
                    let name = build_name(file.path(), &tags);
                    let spec = generate_output_path_with(&name, &output_dir, |path| {
                        reserved.contains(path) || path.exists()
                    });
                    reserved.insert(spec.path.clone());
                    planned.push(PlannedFile {
                        input_path: file.path().to_path_buf(),
                        output_path: Some(spec.path),
                        skip_reason: None,
                    });
                }
                ScanEntry::Skip { path, reason } => planned.push(PlannedFile {
                    input_path: path,
                    output_path: None,
                    skip_reason: Some(reason),
                }),
            }
        }

        Ok(planned)
    }

    async fn convert_file(
        &self,
        index: usize,
        total: usize,
        file: &AudioFile,
        output_dir: &Path,
        events: &Option<mpsc::Sender<BatchEvent>>,
    ) -> ConversionResult {
        let input = file.path().to_path_buf();

        let tags = match self.read_tags(file).await {
            Ok(tags) => tags,
            Err(reason) => {
                warn!(input = ?input, reason = %reason, "Tag reading failed");
                return ConversionResult::failed(input, None, reason);
            }
        };

        let name = build_name(&input, &tags);
        let spec = generate_output_path(&name, output_dir);

        emit(
            events,
            BatchEvent::FileStarted {
                index,
                total,
                input: input.clone(),
                output: spec.path.clone(),
            },
        )
        .await;

        // A panicking transcoder only fails this file.
        let transcoder = Arc::clone(&self.transcoder);
        let output = spec.path.clone();
        let job_input = input.clone();
        let result = match tokio::spawn(async move {
            transcoder.convert(&job_input, &output).await
        })
        .await
        {
            Ok(result) => result,
            Err(e) => ConversionResult::failed(
                input.clone(),
                Some(spec.path.clone()),
                format!("Conversion task failed: {}", e),
            ),
        };

        if result.is_converted() {
            info!(input = ?input, output = ?spec.path, "Converted");
        } else {
            warn!(
                input = ?input,
                output = ?spec.path,
                error = result.message.as_deref().unwrap_or("unknown"),
                "Conversion failed"
            );
        }

        result
    }

    /// Reads tags on the blocking pool. `Err` only when the reader panicked.
    async fn read_tags(&self, file: &AudioFile) -> Result<TagSet, String> {
        let reader = Arc::clone(&self.tag_reader);
        let path = file.path().to_path_buf();
        tokio::task::spawn_blocking(move || reader.extract(&path))
            .await
            .map_err(|e| format!("Tag reading failed: {}", e))
    }
}

/// Only an empty file selection has no input folder to derive from.
fn resolve_output_dir(request: &BatchRequest) -> PathBuf {
    request
        .resolved_output_dir()
        .unwrap_or_else(|| default_output_dir(Path::new(".")))
}

async fn emit(events: &Option<mpsc::Sender<BatchEvent>>, event: BatchEvent) {
    if let Some(tx) = events {
        // A dropped receiver only means nobody is watching.
        let _ = tx.send(event).await;
    }
}
