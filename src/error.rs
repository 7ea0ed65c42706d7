use std::num::ParseIntError;
use std::process::ExitStatus;

use thiserror::Error;

/// Main error type for the clip-splicer library
#[derive(Error, Debug)]
pub enum SplicerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid span #{index}: end {end}s is before start {start}s")]
    InvalidSpan { index: usize, start: u64, end: u64 },

    #[error("External tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
///
/// The structural variants keep the messages operators see stable; they are
/// reported in the order the document is checked.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    ParseFailed { path: String, reason: String },

    #[error("root must be a mapping, containing output path and video configs")]
    NotAMapping,

    #[error("missing or non-string `output`")]
    MissingOutput,

    #[error("missing or non-sequence `videos`")]
    MissingVideos,

    #[error("video entry must be a mapping")]
    VideoNotMapping,

    #[error("video entry missing string `path`")]
    MissingPath,

    #[error("video entry missing sequence `spans`")]
    MissingSpans,

    #[error("span must be a two-element sequence")]
    SpanShape,

    #[error("time component must be a string")]
    TimeNotString,

    #[error("invalid timecode part {part:?}: {source}")]
    InvalidTimePart {
        part: String,
        #[source]
        source: ParseIntError,
    },

    #[error("timecode {timecode:?} is too large")]
    TimecodeOverflow { timecode: String },
}

/// Failures of the external transcoding tool
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{program} not found. Please install FFmpeg or pass --ffmpeg")]
    NotFound { program: String },

    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} {stage} failed: {status}")]
    Failed {
        program: String,
        stage: ToolStage,
        status: ExitStatus,
    },
}

/// Which of the two tool invocations failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStage {
    Extract,
    Concat,
}

impl std::fmt::Display for ToolStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extract => f.write_str("extraction"),
            Self::Concat => f.write_str("concatenation"),
        }
    }
}

/// Convenience type alias for Results using SplicerError
pub type Result<T> = std::result::Result<T, SplicerError>;

impl SplicerError {
    /// True when the run was rejected before any external tool was invoked
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// True when the external tool could not be started or exited non-zero
    pub fn is_tool_failure(&self) -> bool {
        matches!(self, Self::Tool(_))
    }
}
