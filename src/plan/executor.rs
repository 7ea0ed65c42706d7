use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::Result,
    plan::{manifest, VideoPlan},
    transcoder::{ExtractRequest, Transcoder},
};

/// Walks a validated configuration and drives the transcoder
///
/// Videos run one after another and spans within a video run in order. The
/// first failure stops the run; clips already cut are left on disk.
///
/// Per video:
/// 1. Cut every span into its temporary clip
/// 2. Write the manifest listing those clips
/// 3. Join the clips into the configured output
pub struct ClipExecutor {
    transcoder: Box<dyn Transcoder>,
    manifest_path: PathBuf,
}

/// What a finished run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub videos: usize,
    pub clips: usize,
    /// Videos with no spans; nothing was joined for these
    pub skipped: usize,
}

impl ClipExecutor {
    /// Create an executor writing its manifest to the default location
    pub fn new(transcoder: Box<dyn Transcoder>) -> Self {
        Self {
            transcoder,
            manifest_path: PathBuf::from(manifest::DEFAULT_MANIFEST),
        }
    }

    pub fn with_manifest_path<P: Into<PathBuf>>(mut self, manifest_path: P) -> Self {
        self.manifest_path = manifest_path.into();
        self
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Process every video in `config`
    pub fn run(&self, config: &Config) -> Result<RunSummary> {
        if config.videos.is_empty() {
            warn!("No videos configured, nothing to do");
        }

        info!(
            "Splicing {} spans from {} videos with {}",
            config.span_count(),
            config.videos.len(),
            self.transcoder.name()
        );

        let mut summary = RunSummary::default();
        for video in &config.videos {
            let plan = VideoPlan::build(video, &config.output);
            summary.clips += self.run_plan(&plan)?;
            summary.videos += 1;
            if plan.is_empty() {
                summary.skipped += 1;
            }
        }

        info!(
            "Done: {} clips from {} videos into {:?}",
            summary.clips, summary.videos, config.output
        );
        if summary.skipped > 0 {
            warn!(
                "{} of {} videos had no spans and produced no output",
                summary.skipped, summary.videos
            );
        }
        Ok(summary)
    }

    /// Cut and join one video, returning the number of clips produced
    pub fn run_plan(&self, plan: &VideoPlan) -> Result<usize> {
        info!("Processing {:?} ({} spans)", plan.source, plan.jobs.len());

        if plan.is_empty() {
            warn!("{:?} has no spans, skipping", plan.source);
            return Ok(0);
        }

        for job in &plan.jobs {
            let duration = job.duration()?;

            debug!(
                "Span {} ({}, {}s) -> {:?}",
                job.index, job.span, duration, job.temp_path
            );

            if self.transcoder.writes_files() && job.temp_path.exists() {
                warn!("Removing stale clip {:?}", job.temp_path);
                std::fs::remove_file(&job.temp_path)?;
            }

            self.transcoder.extract(&ExtractRequest {
                source: &plan.source,
                start: job.start(),
                duration,
                destination: &job.temp_path,
            })?;
        }

        if self.transcoder.writes_files() {
            manifest::write_manifest(&self.manifest_path, plan.temp_paths())?;
        }

        info!("Joining {} clips into {:?}", plan.jobs.len(), plan.output);
        self.transcoder.concat(&self.manifest_path, &plan.output)?;

        Ok(plan.jobs.len())
    }
}
