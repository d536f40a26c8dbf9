//! Interface event loop: renders batch events as a progress bar.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;

use aiffme_core::{BatchEvent, BatchTracker, ConversionStatus};

/// Consumes events until the batch task drops its sender.
pub async fn drive(mut rx: mpsc::Receiver<BatchEvent>, show_progress: bool) -> BatchTracker {
    let progress = if show_progress {
        let bar = ProgressBar::new(0);
        bar.set_draw_target(ProgressDrawTarget::stderr());
        bar
    } else {
        ProgressBar::hidden()
    };
    let bar_style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(bar_style);

    let mut tracker = BatchTracker::new();
    while let Some(event) = rx.recv().await {
        tracker.apply(&event);

        match &event {
            BatchEvent::Started { total, .. } => {
                progress.set_length(*total as u64);
                progress.enable_steady_tick(Duration::from_millis(100));
            }
            BatchEvent::FileStarted {
                index,
                total,
                input,
                ..
            } => {
                progress.set_message(format!(
                    "Converting {} of {}: {}",
                    index + 1,
                    total,
                    display_name(input)
                ));
            }
            BatchEvent::FileFinished { result, .. } => {
                progress.inc(1);
                if result.status == ConversionStatus::Failed {
                    let reason = result.message.as_deref().unwrap_or("Unknown error");
                    progress.suspend(|| {
                        eprintln!("Failed: {} ({})", display_name(&result.input_path), reason)
                    });
                }
            }
            BatchEvent::Completed { .. } => {
                progress.set_message(String::from("Completed"));
            }
        }
    }

    progress.finish_and_clear();
    tracker
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
