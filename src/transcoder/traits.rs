use std::path::Path;

use crate::error::Result;

/// One span to cut out of a source video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractRequest<'a> {
    pub source: &'a Path,
    /// Offset into the source, in seconds
    pub start: u64,
    /// Length of the cut, in seconds
    pub duration: u64,
    pub destination: &'a Path,
}

/// Core trait for anything that can cut and join clips
///
/// Every call blocks until the work is done. Any failure is fatal to the run;
/// implementations must not retry.
pub trait Transcoder {
    /// Returns a short name for log output
    fn name(&self) -> &str;

    /// Cut `request.duration` seconds starting at `request.start` out of
    /// `request.source` into `request.destination`
    fn extract(&self, request: &ExtractRequest<'_>) -> Result<()>;

    /// Join the clips listed in `manifest`, in order, into `output` without
    /// re-encoding
    fn concat(&self, manifest: &Path, output: &Path) -> Result<()>;

    /// Whether the executor should prepare files on disk for this backend
    ///
    /// When false, stale clips are left alone and no manifest is written.
    fn writes_files(&self) -> bool {
        true
    }
}
