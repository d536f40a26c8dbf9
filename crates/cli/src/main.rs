mod cli;
mod progress;
mod report;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aiffme_core::{
    load_config_or_default, validate_config, BatchError, BatchRunner, FfmpegTranscoder,
    LoftyTagReader,
};

use cli::CliArgs;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Logging is configured before the config is validated so load errors are reported
    let config = load_config_or_default(args.config.as_deref());
    let configured_level = config
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    init_logging(args.verbosity_filter().unwrap_or(configured_level.as_str()));

    let mut config = config.context("Failed to load configuration")?;
    if let Some(ffmpeg) = &args.ffmpeg {
        config.transcoder.ffmpeg_path = Some(ffmpeg.clone());
    }
    validate_config(&config).context("Configuration validation failed")?;

    let transcoder = FfmpegTranscoder::new(config.transcoder.clone());
    let ffmpeg_path = transcoder.ffmpeg_path().to_path_buf();
    info!("Using ffmpeg at {:?}", ffmpeg_path);

    let runner = Arc::new(BatchRunner::new(transcoder, LoftyTagReader::new()));
    let request = args.request();
    let output_dir = request.resolved_output_dir();

    if args.dry_run {
        let planned = runner
            .plan(&request)
            .await
            .context("Failed to plan conversion")?;
        return report::print_plan(&planned, output_dir.as_deref(), args.json);
    }

    let (handle, events) = Arc::clone(&runner).spawn(request);
    let tracker = progress::drive(events, !args.json).await;

    let summary = match handle.await.context("Batch task failed")? {
        Ok(summary) => summary,
        Err(BatchError::TranscoderUnavailable(err)) => {
            eprintln!("{}", report::remediation(&err, &ffmpeg_path));
            bail!("Transcoder unavailable: {}", err);
        }
        Err(err) => return Err(err).context("Batch aborted"),
    };

    report::print_summary(
        &summary,
        &tracker,
        output_dir.as_deref(),
        args.list,
        args.json,
    )?;

    if summary.all_skipped() {
        bail!(
            "No convertible files in the selection ({} skipped)",
            summary.skipped
        );
    }
    if summary.nothing_converted() {
        bail!("Failed to convert files. Check that ffmpeg is installed.");
    }

    Ok(())
}

/// `RUST_LOG` wins over `default_directive`.
fn init_logging(default_directive: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
