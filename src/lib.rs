//! # Clip-Splicer
//!
//! Cut time spans out of source videos and splice them into a single output.
//!
//! A splice job is described by a YAML (or TOML) document naming an output
//! file and, for each source video, the spans to keep. Each span is cut into
//! a temporary clip next to its source, then the clips are joined in order.
//! The actual cutting and joining is done by `ffmpeg`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clip_splicer::{
//!     config::Config,
//!     plan::ClipExecutor,
//!     transcoder::FfmpegTranscoder,
//! };
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::from_file("splice.yaml")?;
//!
//! let ffmpeg = FfmpegTranscoder::default();
//! ffmpeg.ensure_available()?;
//!
//! let executor = ClipExecutor::new(Box::new(ffmpeg));
//! executor.run(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - Document loading and validation
//! - [`timecode`] - `H:MM:SS` timecodes and spans
//! - [`plan`] - Temporary clip layout, manifest, and the sequential executor
//! - [`transcoder`] - The external tool behind a trait
//!
//! ## Concurrency
//!
//! Everything runs sequentially. The join manifest is a single file in the
//! working directory (`filelist.txt` by default) rewritten for every video,
//! so two runs must not share a working directory.

pub mod config;
pub mod error;
pub mod plan;
pub mod timecode;
pub mod transcoder;

pub use crate::{
    config::{Config, VideoConfig},
    error::{ConfigError, Result, SplicerError, ToolError},
    plan::{ClipExecutor, RunSummary},
    timecode::{parse_timecode, Span},
    transcoder::{DryRunTranscoder, FfmpegTranscoder, Transcoder},
};
