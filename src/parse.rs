//! Free-text duration parsing for the countdown input.
//!
//! Accepted forms, tried in order: colon (`1:30`, `1:02:03`), unit suffixes
//! (`90s`, `1h 20m`, case-insensitive, whitespace-tolerant), and bare digits
//! interpreted as whole seconds. Everything else is an error. The result is
//! deliberately not clamped to [`crate::MAX_MS`]; the caller clamps when it
//! applies the value to the timer.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// Compiled once; the patterns are literals so construction cannot fail.
static COLON_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{1,2})(?::(\d{1,2}))?$").unwrap());
static UNIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(\d+)\s*h)?\s*(?:(\d+)\s*m)?\s*(?:(\d+)\s*s)?$").unwrap());
static BARE_SECONDS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    EmptyInput,
    /// Input matched none of the accepted forms, or a component overflowed.
    UnrecognizedFormat,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "duration cannot be empty"),
            ParseError::UnrecognizedFormat => {
                write!(f, "unrecognized duration (use 1:30, 90s, 1h 20m, or 45)")
            }
        }
    }
}

impl std::error::Error for ParseError {}

fn hms_to_ms(h: u64, m: u64, s: u64) -> Result<u64, ParseError> {
    h.checked_mul(3600)
        .and_then(|hs| m.checked_mul(60).and_then(|ms| hs.checked_add(ms)))
        .and_then(|total| total.checked_add(s))
        .and_then(|total| total.checked_mul(1000))
        .ok_or(ParseError::UnrecognizedFormat)
}

/// Parse a human-entered duration into milliseconds.
///
/// Unlike the looser patterns browsers tend to accumulate, the unit-suffix
/// form is anchored at both ends, so `"xyz1h"` is rejected rather than
/// silently read as one hour.
pub fn parse_human_time(input: &str) -> Result<u64, ParseError> {
    let s = input.trim().to_lowercase();
    if s.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if let Some(caps) = COLON_REGEX.captures(&s) {
        // Captures are 1-2 digit groups; the component parses cannot fail.
        let a: u64 = caps[1].parse().map_err(|_| ParseError::UnrecognizedFormat)?;
        let b: u64 = caps[2].parse().map_err(|_| ParseError::UnrecognizedFormat)?;
        return match caps.get(3) {
            Some(c) => {
                let c: u64 = c.as_str().parse().map_err(|_| ParseError::UnrecognizedFormat)?;
                hms_to_ms(a, b, c)
            }
            None => hms_to_ms(0, a, b),
        };
    }

    if let Some(caps) = UNIT_REGEX.captures(&s) {
        if caps.get(1).is_some() || caps.get(2).is_some() || caps.get(3).is_some() {
            let part = |i: usize| -> Result<u64, ParseError> {
                caps.get(i)
                    .map(|m| m.as_str().parse().map_err(|_| ParseError::UnrecognizedFormat))
                    .unwrap_or(Ok(0))
            };
            return hms_to_ms(part(1)?, part(2)?, part(3)?);
        }
    }

    if BARE_SECONDS_REGEX.is_match(&s) {
        let secs: u64 = s.parse().map_err(|_| ParseError::UnrecognizedFormat)?;
        return secs.checked_mul(1000).ok_or(ParseError::UnrecognizedFormat);
    }

    Err(ParseError::UnrecognizedFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colon_two_segments_is_minutes_seconds() {
        assert_eq!(parse_human_time("1:30"), Ok(90_000));
        assert_eq!(parse_human_time("10:00"), Ok(600_000));
        assert_eq!(parse_human_time("00:00"), Ok(0));
    }

    #[test]
    fn colon_three_segments_is_hours_minutes_seconds() {
        assert_eq!(parse_human_time("1:2:3"), Ok(3_723_000));
        assert_eq!(parse_human_time("99:59:59"), Ok(359_999_000));
    }

    #[test]
    fn colon_segments_are_positional_not_range_checked() {
        // "1:75" reads as 1 minute 75 seconds, matching the display contract.
        assert_eq!(parse_human_time("1:75"), Ok(135_000));
    }

    #[test]
    fn colon_rejects_wide_segments() {
        assert_eq!(parse_human_time("1:234"), Err(ParseError::UnrecognizedFormat));
        assert_eq!(parse_human_time("100:00:00"), Err(ParseError::UnrecognizedFormat));
    }

    #[test]
    fn unit_suffix_forms() {
        assert_eq!(parse_human_time("90s"), Ok(90_000));
        assert_eq!(parse_human_time("1h 20m"), Ok(4_800_000));
        assert_eq!(parse_human_time("1h20m30s"), Ok(4_830_000));
        assert_eq!(parse_human_time("2m"), Ok(120_000));
    }

    #[test]
    fn unit_suffix_is_case_insensitive_and_trims() {
        assert_eq!(parse_human_time("  90S  "), Ok(90_000));
        assert_eq!(parse_human_time("1H 20M"), Ok(4_800_000));
    }

    #[test]
    fn bare_digits_are_seconds() {
        assert_eq!(parse_human_time("45"), Ok(45_000));
        assert_eq!(parse_human_time("0"), Ok(0));
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert_eq!(parse_human_time(""), Err(ParseError::EmptyInput));
        assert_eq!(parse_human_time("   "), Err(ParseError::EmptyInput));
        assert_eq!(parse_human_time("abc"), Err(ParseError::UnrecognizedFormat));
        assert_eq!(parse_human_time("1:2:3:4"), Err(ParseError::UnrecognizedFormat));
        assert_eq!(parse_human_time("-45"), Err(ParseError::UnrecognizedFormat));
        assert_eq!(parse_human_time("1.5h"), Err(ParseError::UnrecognizedFormat));
    }

    #[test]
    fn rejects_leading_garbage_before_units() {
        assert_eq!(parse_human_time("xyz1h"), Err(ParseError::UnrecognizedFormat));
        assert_eq!(parse_human_time("5x 3s"), Err(ParseError::UnrecognizedFormat));
    }

    #[test]
    fn overflow_is_an_error_not_a_panic() {
        assert_eq!(
            parse_human_time("99999999999999999999s"),
            Err(ParseError::UnrecognizedFormat)
        );
        assert_eq!(
            parse_human_time("18446744073709551615"),
            Err(ParseError::UnrecognizedFormat)
        );
    }
}
