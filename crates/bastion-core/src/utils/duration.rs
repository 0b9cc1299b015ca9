//! Duration notation used across the configuration
//!
//! A duration is a positive integer optionally followed by a unit:
//! `s` seconds, `m` minutes, `h` hours, `d` days, `w` weeks, `M` months
//! (30 days) or `y` years (365 days). A bare integer counts seconds and
//! `0` is the only accepted zero.

use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;
use thiserror::Error;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

static DURATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([1-9][0-9]*)([smhdwMy])?$").expect("valid duration pattern"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("Could not convert the input string of {0} into a duration")]
    Invalid(String),

    #[error("Could not convert the input string of {0} into a duration: value is too large")]
    Overflow(String),
}

/// Parse duration notation such as `5m`, `1h` or `300`.
///
/// An empty input yields a zero duration.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    if input.is_empty() || input == "0" {
        return Ok(Duration::ZERO);
    }

    let captures = DURATION_PATTERN
        .captures(input)
        .ok_or_else(|| DurationError::Invalid(input.to_string()))?;

    let amount: u64 = captures[1]
        .parse()
        .map_err(|_| DurationError::Overflow(input.to_string()))?;

    let unit = match captures.get(2).map(|m| m.as_str()) {
        Some("m") => MINUTE,
        Some("h") => HOUR,
        Some("d") => DAY,
        Some("w") => WEEK,
        Some("M") => MONTH,
        Some("y") => YEAR,
        _ => 1,
    };

    amount
        .checked_mul(unit)
        .map(Duration::from_secs)
        .ok_or_else(|| DurationError::Overflow(input.to_string()))
}
