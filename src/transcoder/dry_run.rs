use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::timecode::format_timecode;
use crate::transcoder::traits::{ExtractRequest, Transcoder};

/// Logs every invocation instead of running it
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunTranscoder;

impl Transcoder for DryRunTranscoder {
    fn name(&self) -> &str {
        "dry-run"
    }

    fn extract(&self, request: &ExtractRequest<'_>) -> Result<()> {
        info!(
            "[dry-run] extract {} from {} for {}s -> {}",
            request.source.display(),
            format_timecode(request.start),
            request.duration,
            request.destination.display()
        );
        Ok(())
    }

    fn concat(&self, manifest: &Path, output: &Path) -> Result<()> {
        info!("[dry-run] concat {} -> {}", manifest.display(), output.display());
        Ok(())
    }

    fn writes_files(&self) -> bool {
        false
    }
}
