//! Terminal output for plans, summaries and the status list.

use anyhow::Result;
use std::path::Path;

use aiffme_core::{BatchSummary, BatchTracker, PlannedFile, TranscoderError};

pub fn print_plan(planned: &[PlannedFile], output_dir: Option<&Path>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(planned)?);
        return Ok(());
    }

    if planned.is_empty() {
        println!("Dry run: no .flac or .mp3 files found.");
        return Ok(());
    }

    if let Some(dir) = output_dir {
        println!("Dry run: would write into {}", dir.display());
    }
    for file in planned {
        match (&file.output_path, &file.skip_reason) {
            (Some(output), _) => println!(
                "  {} -> {}",
                file.input_path.display(),
                output
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            ),
            (None, reason) => println!(
                "  {} (skipped: {})",
                file.input_path.display(),
                reason.as_deref().unwrap_or("unsupported")
            ),
        }
    }
    Ok(())
}

pub fn print_summary(
    summary: &BatchSummary,
    tracker: &BatchTracker,
    output_dir: Option<&Path>,
    list: bool,
    json: bool,
) -> Result<()> {
    if json {
        let report = serde_json::json!({
            "summary": summary,
            "output_dir": output_dir,
            "files": tracker.entries(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if summary.total == 0 {
        println!("No .flac or .mp3 files found.");
        return Ok(());
    }

    if list {
        for entry in tracker.entries() {
            let name = entry
                .output_path
                .as_deref()
                .and_then(Path::file_name)
                .or_else(|| entry.input_path.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match &entry.message {
                Some(message) => println!("{:<10} {} ({})", entry.state.as_str(), name, message),
                None => println!("{:<10} {}", entry.state.as_str(), name),
            }
        }
        println!();
    }

    println!("Converted: {}", summary.converted);
    println!("Skipped:   {}", summary.skipped);
    println!("Failed:    {}", summary.failed);
    println!("Total:     {}", summary.total);
    if let Some(dir) = output_dir {
        if summary.converted > 0 {
            println!("Output:    {}", dir.display());
        }
    }
    Ok(())
}

/// Install guidance shown when the ffmpeg probe fails.
pub fn remediation(err: &TranscoderError, ffmpeg_path: &Path) -> String {
    match err {
        TranscoderError::FfmpegNotFound { .. } => "FFmpeg is required but was not found.\n\n\
             Please install ffmpeg:\n  \
             brew install ffmpeg          (macOS)\n  \
             sudo apt install ffmpeg      (Debian/Ubuntu)\n\n\
             Or point aiffme at a binary with --ffmpeg <path>."
            .to_string(),
        other => format!(
            "FFmpeg found but not working.\n\n\
             Path: {}\n\
             Error: {}\n\n\
             Please check your ffmpeg installation.",
            ffmpeg_path.display(),
            other
        ),
    }
}
