use std::path::{Path, PathBuf};

use crate::config::VideoConfig;
use crate::error::Result;
use crate::timecode::Span;

/// A single span cut out of a source video into a temporary clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipJob {
    /// Position of the span within its video
    pub index: usize,
    pub span: Span,
    pub temp_path: PathBuf,
}

impl ClipJob {
    pub fn start(&self) -> u64 {
        self.span.start
    }

    /// Seconds to extract, rejecting spans that end before they start
    pub fn duration(&self) -> Result<u64> {
        self.span.duration(self.index)
    }
}

/// Everything needed to turn one source video into its spliced output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoPlan {
    pub source: PathBuf,
    pub output: PathBuf,
    pub jobs: Vec<ClipJob>,
}

impl VideoPlan {
    /// Lay out the temporary clips for `video`
    pub fn build(video: &VideoConfig, output: &Path) -> Self {
        let width = index_width(video.spans.len());
        let jobs = video
            .spans
            .iter()
            .enumerate()
            .map(|(index, &span)| ClipJob {
                index,
                span,
                temp_path: temp_clip_path(&video.path, index, width),
            })
            .collect();

        Self {
            source: video.path.clone(),
            output: output.to_path_buf(),
            jobs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn temp_paths(&self) -> impl Iterator<Item = &Path> {
        self.jobs.iter().map(|job| job.temp_path.as_path())
    }
}

/// Number of decimal digits in `span_count`
///
/// Padding every index to this width keeps the clips in numeric order when
/// sorted by name.
pub fn index_width(span_count: usize) -> usize {
    span_count.to_string().len()
}

/// `dir/stem.ext` becomes `dir/stem_<index>.ext`, index zero-padded to `width`
pub fn temp_clip_path(source: &Path, index: usize, width: usize) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match source.extension() {
        Some(ext) => format!("{}_{:0width$}.{}", stem, index, ext.to_string_lossy(), width = width),
        None => format!("{}_{:0width$}", stem, index, width = width),
    };

    source.with_file_name(file_name)
}
