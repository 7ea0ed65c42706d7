use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::{error, info, warn, Level};

use clip_splicer::{
    config::Config,
    error::SplicerError,
    plan::{ClipExecutor, DEFAULT_MANIFEST},
    transcoder::{DryRunTranscoder, FfmpegTranscoder, Transcoder, DEFAULT_ENCODER},
};

#[derive(Parser)]
#[command(
    name = "clip-splicer",
    version,
    about = "Cut time spans out of videos and splice them into one file",
    long_about = "Clip-Splicer reads a YAML or TOML document listing source videos and the time spans to keep from each, cuts every span into a temporary clip with ffmpeg, and joins the clips into the configured output."
)]
struct Cli {
    /// Splice configuration (YAML, or TOML with a .toml extension)
    config: Option<PathBuf>,

    /// Validate and plan, logging the ffmpeg calls without running them
    #[arg(long)]
    dry_run: bool,

    /// ffmpeg binary to run
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg: PathBuf,

    /// Video encoder used when cutting spans
    #[arg(long, default_value = DEFAULT_ENCODER)]
    encoder: String,

    /// Scratch file listing the clips to join
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(config_path) = cli.config else {
        eprintln!("please specify the config file");
        eprintln!("{}", Cli::command().render_usage());
        return Ok(());
    };

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting Clip-Splicer v{}", env!("CARGO_PKG_VERSION"));
    info!("Loading configuration from {:?}", config_path);
    let config = Config::from_file(&config_path).inspect_err(report_failure)?;

    let transcoder: Box<dyn Transcoder> = if cli.dry_run {
        info!("Resolved configuration:\n{}", serde_yaml::to_string(&config)?);
        Box::new(DryRunTranscoder)
    } else {
        let ffmpeg = FfmpegTranscoder::new(cli.ffmpeg, cli.encoder);
        ffmpeg.ensure_available().inspect_err(report_failure)?;
        info!("Using {:?} with encoder {}", ffmpeg.program(), ffmpeg.encoder());
        Box::new(ffmpeg)
    };

    let executor = ClipExecutor::new(transcoder).with_manifest_path(cli.manifest);
    let summary = executor.run(&config).inspect_err(report_failure)?;

    if summary.skipped == summary.videos {
        warn!("No spans to cut, {:?} was not written", config.output);
    } else {
        info!(
            "Splice complete! {} clips written to {:?}",
            summary.clips, config.output
        );
    }
    Ok(())
}

fn report_failure(err: &SplicerError) {
    if err.is_config_error() {
        error!("Configuration rejected, nothing was cut");
    } else if err.is_tool_failure() {
        error!("ffmpeg failed, clips already cut are left on disk");
    }
}
