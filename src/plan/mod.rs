//! # Clip Planning and Execution
//!
//! Turns each configured video into a [`VideoPlan`]: one temporary clip per
//! span, named so the clips sort in span order, followed by a join into the
//! output. [`ClipExecutor`] carries the plans out through a
//! [`Transcoder`](crate::transcoder::Transcoder).

pub mod executor;
pub mod manifest;
pub mod types;

pub use executor::{ClipExecutor, RunSummary};
pub use manifest::DEFAULT_MANIFEST;
pub use types::{index_width, temp_clip_path, ClipJob, VideoPlan};
