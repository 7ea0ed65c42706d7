//! # Timecodes and Spans
//!
//! A timecode is one or more colon-separated whole numbers, most significant
//! first, each place worth 60 times the one to its right: `"SS"`, `"MM:SS"`,
//! `"H:MM:SS"`. Parts are not range-checked, so `"90"` and `"0:90"` are both
//! ninety seconds.

use serde::Serialize;

use crate::error::{ConfigError, SplicerError};

/// Parse a timecode into whole seconds
///
/// # Examples
///
/// ```
/// use clip_splicer::timecode::parse_timecode;
///
/// assert_eq!(parse_timecode("1:23:22").unwrap(), 5002);
/// assert_eq!(parse_timecode("90").unwrap(), 90);
/// ```
pub fn parse_timecode(timecode: &str) -> Result<u64, ConfigError> {
    let mut seconds: u64 = 0;

    for part in timecode.split(':') {
        let part = part.trim();
        let value: u64 = part.parse().map_err(|source| ConfigError::InvalidTimePart {
            part: part.to_string(),
            source,
        })?;

        seconds = seconds
            .checked_mul(60)
            .and_then(|s| s.checked_add(value))
            .ok_or_else(|| ConfigError::TimecodeOverflow {
                timecode: timecode.to_string(),
            })?;
    }

    Ok(seconds)
}

/// Render whole seconds as `H:MM:SS` for log output
pub fn format_timecode(seconds: u64) -> String {
    format!("{}:{:02}:{:02}", seconds / 3600, (seconds / 60) % 60, seconds % 60)
}

/// A requested extraction interval `[start, end]` in whole seconds
///
/// Spans are stored exactly as written; `end < start` is only rejected when
/// the span is about to be cut (see [`Span::duration`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: u64,
    pub end: u64,
}

impl Span {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Length of the span in seconds
    ///
    /// `index` is the span's position within its video and is only used to
    /// identify the span in the error.
    pub fn duration(&self, index: usize) -> Result<u64, SplicerError> {
        self.end
            .checked_sub(self.start)
            .ok_or(SplicerError::InvalidSpan {
                index,
                start: self.start,
                end: self.end,
            })
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", format_timecode(self.start), format_timecode(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timecode() {
        assert_eq!(parse_timecode("0:12").unwrap(), 12);
        assert_eq!(parse_timecode("1:23").unwrap(), 83);
        assert_eq!(parse_timecode("1:23:22").unwrap(), 5002);
        assert_eq!(parse_timecode("90").unwrap(), 90);
        assert_eq!(parse_timecode("0:00").unwrap(), 0);
    }

    #[test]
    fn test_parse_timecode_is_order_sensitive() {
        assert_eq!(parse_timecode("1:30").unwrap(), 90);
        assert_eq!(parse_timecode("30:1").unwrap(), 1801);
    }

    #[test]
    fn test_parse_timecode_unbounded_parts() {
        assert_eq!(parse_timecode("0:90").unwrap(), 90);
        assert_eq!(parse_timecode("1:0:0:0").unwrap(), 216_000);
        assert_eq!(parse_timecode("1: 30").unwrap(), 90);
    }

    #[test]
    fn test_parse_timecode_rejects_bad_parts() {
        for bad in ["", "1:", "a:10", "1:-5", "1.5"] {
            match parse_timecode(bad) {
                Err(ConfigError::InvalidTimePart { .. }) => {}
                other => panic!("{:?} should fail to parse, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_parse_timecode_overflow() {
        let huge = format!("{}:0", u64::MAX);
        assert!(matches!(
            parse_timecode(&huge),
            Err(ConfigError::TimecodeOverflow { .. })
        ));
    }

    #[test]
    fn test_span_duration() {
        assert_eq!(Span::new(10, 15).duration(0).unwrap(), 5);
        assert_eq!(Span::new(7, 7).duration(0).unwrap(), 0);

        match Span::new(20, 5).duration(3) {
            Err(SplicerError::InvalidSpan { index, start, end }) => {
                assert_eq!((index, start, end), (3, 20, 5));
            }
            other => panic!("expected InvalidSpan, got {:?}", other),
        }
    }

    #[test]
    fn test_format_timecode() {
        assert_eq!(format_timecode(0), "0:00:00");
        assert_eq!(format_timecode(83), "0:01:23");
        assert_eq!(format_timecode(5002), "1:23:22");
        assert_eq!(Span::new(10, 75).to_string(), "0:00:10-0:01:15");
    }
}
