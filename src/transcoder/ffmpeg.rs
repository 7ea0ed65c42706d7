use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Result, ToolError, ToolStage};
use crate::transcoder::traits::{ExtractRequest, Transcoder};

/// Hardware encoder used when re-encoding extracted spans
pub const DEFAULT_ENCODER: &str = "h264_nvenc";

/// Transcoder backed by the external `ffmpeg` binary
///
/// The child inherits stdout and stderr so ffmpeg's own progress output
/// reaches the operator.
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    program: PathBuf,
    encoder: String,
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new("ffmpeg", DEFAULT_ENCODER)
    }
}

impl FfmpegTranscoder {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(program: P, encoder: S) -> Self {
        Self {
            program: program.into(),
            encoder: encoder.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn encoder(&self) -> &str {
        &self.encoder
    }

    pub fn check_available(&self) -> bool {
        Command::new(&self.program)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    pub fn ensure_available(&self) -> Result<()> {
        if self.check_available() {
            Ok(())
        } else {
            Err(ToolError::NotFound { program: self.program_name() }.into())
        }
    }

    /// Arguments for cutting one span, re-encoding the video stream
    pub fn extract_args(&self, request: &ExtractRequest<'_>) -> Vec<OsString> {
        vec![
            "-ss".into(),
            request.start.to_string().into(),
            "-i".into(),
            request.source.into(),
            "-t".into(),
            request.duration.to_string().into(),
            "-c:v".into(),
            self.encoder.as_str().into(),
            request.destination.into(),
        ]
    }

    /// Arguments for joining manifest-listed clips with stream copy
    pub fn concat_args(&self, manifest: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-f".into(),
            "concat".into(),
            "-safe".into(),
            "0".into(),
            "-i".into(),
            manifest.into(),
            "-c".into(),
            "copy".into(),
            output.into(),
        ]
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    fn run(&self, stage: ToolStage, args: Vec<OsString>) -> Result<()> {
        debug!("Running {} {:?}", self.program.display(), args);

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|source| ToolError::Spawn {
                program: self.program_name(),
                source,
            })?;

        if !status.success() {
            return Err(ToolError::Failed {
                program: self.program_name(),
                stage,
                status,
            }
            .into());
        }

        Ok(())
    }
}

impl Transcoder for FfmpegTranscoder {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    fn extract(&self, request: &ExtractRequest<'_>) -> Result<()> {
        self.run(ToolStage::Extract, self.extract_args(request))
    }

    fn concat(&self, manifest: &Path, output: &Path) -> Result<()> {
        self.run(ToolStage::Concat, self.concat_args(manifest, output))
    }
}
