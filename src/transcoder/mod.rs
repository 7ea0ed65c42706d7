//! # Transcoder Backends
//!
//! The splicer never decodes video itself. Cutting a span and joining the
//! cut clips are delegated to an external tool behind the [`Transcoder`]
//! trait.
//!
//! ## Backends
//!
//! - **ffmpeg**: runs the `ffmpeg` binary once per span and once per join
//! - **dry-run**: logs what would be run and touches nothing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clip_splicer::transcoder::{FfmpegTranscoder, Transcoder};
//!
//! let ffmpeg = FfmpegTranscoder::default();
//! ffmpeg.ensure_available()?;
//! println!("using {}", ffmpeg.name());
//! # Ok::<(), clip_splicer::SplicerError>(())
//! ```

pub mod dry_run;
pub mod ffmpeg;
pub mod traits;

pub use dry_run::DryRunTranscoder;
pub use ffmpeg::{FfmpegTranscoder, DEFAULT_ENCODER};
pub use traits::{ExtractRequest, Transcoder};
