use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::{
    error::{ConfigError, Result},
    timecode::{parse_timecode, Span},
};

/// Root of a splice job: where the result goes and what to cut from where
///
/// ```yaml
/// output: out.mp4
/// videos:
///   - path: clip.mp4
///     spans:
///       - ["0:00", "0:12"]
///       - ["1:23", "1:25"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// File the concatenated clips are written to
    pub output: PathBuf,

    /// Source videos, processed in order
    pub videos: Vec<VideoConfig>,
}

/// One source video and the spans to cut out of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoConfig {
    pub path: PathBuf,
    pub spans: Vec<Span>,
}

impl Config {
    /// Load configuration from a YAML or TOML file
    ///
    /// Files ending in `.toml` are read as TOML, everything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadFailed {
                path: path.display().to_string(),
                source,
            },
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let document = if is_toml {
            toml::from_str::<toml::Value>(&content)
                .map_err(|e| e.to_string())
                .and_then(|value| serde_yaml::to_value(value).map_err(|e| e.to_string()))
        } else {
            serde_yaml::from_str::<Value>(&content).map_err(|e| e.to_string())
        }
        .map_err(|reason| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason,
        })?;

        Self::from_value(&document)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseFailed {
            path: "<string>".to_string(),
            reason: e.to_string(),
        })?;
        Self::from_value(&document)
    }

    /// Build a typed configuration from an untyped document tree
    ///
    /// Checks run shape-first and stop at the first problem, so the error
    /// always names the innermost thing that is wrong.
    pub fn from_value(document: &Value) -> Result<Self> {
        let root = document.as_mapping().ok_or(ConfigError::NotAMapping)?;

        let output = root
            .get("output")
            .and_then(Value::as_str)
            .ok_or(ConfigError::MissingOutput)?;

        let videos = root
            .get("videos")
            .and_then(Value::as_sequence)
            .ok_or(ConfigError::MissingVideos)?;

        let videos = videos
            .iter()
            .map(parse_video)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            output: PathBuf::from(output),
            videos,
        })
    }

    /// Total number of spans across all videos
    pub fn span_count(&self) -> usize {
        self.videos.iter().map(|video| video.spans.len()).sum()
    }
}

fn parse_video(entry: &Value) -> std::result::Result<VideoConfig, ConfigError> {
    let video: &Mapping = entry.as_mapping().ok_or(ConfigError::VideoNotMapping)?;

    let path = video
        .get("path")
        .and_then(Value::as_str)
        .ok_or(ConfigError::MissingPath)?;

    let spans = video
        .get("spans")
        .and_then(Value::as_sequence)
        .ok_or(ConfigError::MissingSpans)?;

    let spans = spans
        .iter()
        .map(parse_span)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(VideoConfig {
        path: PathBuf::from(path),
        spans,
    })
}

fn parse_span(entry: &Value) -> std::result::Result<Span, ConfigError> {
    match entry.as_sequence().map(Vec::as_slice) {
        Some([start, end]) => Ok(Span::new(parse_time(start)?, parse_time(end)?)),
        _ => Err(ConfigError::SpanShape),
    }
}

fn parse_time(value: &Value) -> std::result::Result<u64, ConfigError> {
    let timecode = value.as_str().ok_or(ConfigError::TimeNotString)?;
    parse_timecode(timecode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplicerError;
    use tempfile::tempdir;

    fn config_error(yaml: &str) -> ConfigError {
        match Config::from_yaml_str(yaml) {
            Err(SplicerError::Config(e)) => e,
            other => panic!("expected a config error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_yaml_str(
            r#"
output: out.mp4
videos:
  - path: clip.mp4
    spans:
      - ["0:00", "0:12"]
      - ["1:23", "1:25"]
      - ["1:23:22", "1:23:25"]
  - path: other.mkv
    spans: []
"#,
        )
        .unwrap();

        assert_eq!(config.output, PathBuf::from("out.mp4"));
        assert_eq!(config.videos.len(), 2);
        assert_eq!(config.videos[0].path, PathBuf::from("clip.mp4"));
        assert_eq!(
            config.videos[0].spans,
            vec![Span::new(0, 12), Span::new(83, 85), Span::new(5002, 5005)]
        );
        assert!(config.videos[1].spans.is_empty());
        assert_eq!(config.span_count(), 3);
    }

    #[test]
    fn test_root_must_be_mapping() {
        assert!(matches!(config_error("- a\n- b\n"), ConfigError::NotAMapping));
        assert!(matches!(config_error("just text"), ConfigError::NotAMapping));
    }

    #[test]
    fn test_missing_or_mistyped_output() {
        assert!(matches!(config_error("videos: []\n"), ConfigError::MissingOutput));
        assert!(matches!(
            config_error("output: [a]\nvideos: []\n"),
            ConfigError::MissingOutput
        ));
    }

    #[test]
    fn test_missing_or_mistyped_videos() {
        assert!(matches!(config_error("output: out.mp4\n"), ConfigError::MissingVideos));
        assert!(matches!(
            config_error("output: out.mp4\nvideos: clip.mp4\n"),
            ConfigError::MissingVideos
        ));
    }

    #[test]
    fn test_output_is_checked_before_videos() {
        assert!(matches!(config_error("{}"), ConfigError::MissingOutput));
    }

    #[test]
    fn test_video_entry_shape() {
        assert!(matches!(
            config_error("output: o.mp4\nvideos: [clip.mp4]\n"),
            ConfigError::VideoNotMapping
        ));
        assert!(matches!(
            config_error("output: o.mp4\nvideos:\n  - spans: []\n"),
            ConfigError::MissingPath
        ));
        assert!(matches!(
            config_error("output: o.mp4\nvideos:\n  - path: 12\n    spans: []\n"),
            ConfigError::MissingPath
        ));
        assert!(matches!(
            config_error("output: o.mp4\nvideos:\n  - path: a.mp4\n"),
            ConfigError::MissingSpans
        ));
        assert!(matches!(
            config_error("output: o.mp4\nvideos:\n  - path: a.mp4\n    spans: {}\n"),
            ConfigError::MissingSpans
        ));
    }

    #[test]
    fn test_bad_video_fails_whole_config() {
        let err = config_error(
            r#"
output: o.mp4
videos:
  - path: good.mp4
    spans: [["0:00", "0:05"]]
  - spans: [["0:00", "0:05"]]
"#,
        );
        assert!(matches!(err, ConfigError::MissingPath));
    }

    #[test]
    fn test_span_shape() {
        for spans in [r#"["0:00"]"#, r#"["0:00", "0:01", "0:02"]"#, r#""0:00""#] {
            let yaml = format!("output: o.mp4\nvideos:\n  - path: a.mp4\n    spans: [{}]\n", spans);
            assert!(
                matches!(config_error(&yaml), ConfigError::SpanShape),
                "spans {} should be rejected",
                spans
            );
        }
    }

    #[test]
    fn test_time_components() {
        assert!(matches!(
            config_error("output: o.mp4\nvideos:\n  - path: a.mp4\n    spans: [[0, 5]]\n"),
            ConfigError::TimeNotString
        ));
        assert!(matches!(
            config_error("output: o.mp4\nvideos:\n  - path: a.mp4\n    spans: [[\"0:00\", \"x:05\"]]\n"),
            ConfigError::InvalidTimePart { .. }
        ));
    }

    #[test]
    fn test_reversed_span_is_accepted_at_parse_time() {
        let config = Config::from_yaml_str(
            "output: o.mp4\nvideos:\n  - path: a.mp4\n    spans: [[\"0:10\", \"0:05\"]]\n",
        )
        .unwrap();
        assert_eq!(config.videos[0].spans, vec![Span::new(10, 5)]);
    }

    #[test]
    fn test_resolved_config_serializes() {
        let config = Config::from_yaml_str(
            "output: out.mp4\nvideos:\n  - path: clip.mp4\n    spans: [[\"1:00\", \"1:05\"]]\n",
        )
        .unwrap();

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("output: out.mp4"));
        assert!(yaml.contains("start: 60"));
        assert!(yaml.contains("end: 65"));
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("splice.yaml");
        std::fs::write(
            &file_path,
            "output: out.mp4\nvideos:\n  - path: clip.mp4\n    spans: [[\"0:00\", \"0:05\"]]\n",
        )
        .unwrap();

        let config = Config::from_file(&file_path).unwrap();
        assert_eq!(config.videos[0].spans, vec![Span::new(0, 5)]);
    }

    #[test]
    fn test_from_toml_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("splice.toml");
        std::fs::write(
            &file_path,
            r#"
output = "out.mp4"

[[videos]]
path = "clip.mp4"
spans = [["0:00", "0:05"], ["1:00", "1:30"]]
"#,
        )
        .unwrap();

        let config = Config::from_file(&file_path).unwrap();
        assert_eq!(config.output, PathBuf::from("out.mp4"));
        assert_eq!(config.videos[0].spans, vec![Span::new(0, 5), Span::new(60, 90)]);
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let dir = tempdir().unwrap();

        match Config::from_file(dir.path().join("absent.yaml")) {
            Err(SplicerError::Config(ConfigError::FileNotFound { .. })) => {}
            other => panic!("expected FileNotFound, got {:?}", other),
        }

        match Config::from_file(dir.path()) {
            Err(SplicerError::Config(ConfigError::ReadFailed { .. })) => {}
            other => panic!("expected ReadFailed for a directory, got {:?}", other),
        }

        let file_path = dir.path().join("not_utf8.yaml");
        std::fs::write(&file_path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        match Config::from_file(&file_path) {
            Err(SplicerError::Config(ConfigError::ReadFailed { .. })) => {}
            other => panic!("expected ReadFailed for invalid UTF-8, got {:?}", other),
        }

        let file_path = dir.path().join("broken.yaml");
        std::fs::write(&file_path, "output: [unclosed\n").unwrap();
        match Config::from_file(&file_path) {
            Err(SplicerError::Config(ConfigError::ParseFailed { .. })) => {}
            other => panic!("expected ParseFailed, got {:?}", other),
        }
    }
}
