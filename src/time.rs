//! Time-of-day conversions.
//!
//! Pure arithmetic with no calendar involved. Nothing is range checked:
//! `25:00` is 1500 minutes.

use std::str::FromStr;

use crate::consts::{DATE_TIME_SEPARATOR, LAST_SECOND_OF_DAY, MINUTES_PER_HOUR, TIME_SEPARATOR};
use crate::types::ClockTime;
use crate::{ParseError, parse_number};

/// Minutes since midnight.
pub const fn hm_to_minutes(hours: i64, minutes: i64) -> i64 {
    ClockTime::new(hours, minutes, 0).to_minutes()
}

/// Seconds since midnight.
pub const fn hms_to_seconds(hours: i64, minutes: i64, seconds: i64) -> i64 {
    ClockTime::new(hours, minutes, seconds).to_seconds()
}

/// Percentage of the day elapsed after `seconds` seconds.
///
/// Divides by 86399, the index of the last second of the day, so the last
/// second maps to exactly 100.
pub fn seconds_to_percents(seconds: i64) -> f64 {
    seconds as f64 * 100.0 / LAST_SECOND_OF_DAY as f64
}

/// Formats minutes since midnight as `HH:MM`.
///
/// ```
/// use julian_calendar::minutes_to_iso_hm;
///
/// assert_eq!(minutes_to_iso_hm(425), "07:05");
/// ```
pub fn minutes_to_iso_hm(minutes: i64) -> String {
    format!(
        "{:02}:{:02}",
        minutes.div_euclid(MINUTES_PER_HOUR),
        minutes.rem_euclid(MINUTES_PER_HOUR)
    )
}

/// Minutes since midnight of an `HH:MM` string (any seconds are ignored).
///
/// # Errors
/// Returns `ParseError` if a component is not a number.
pub fn iso_hm_to_minutes(text: &str) -> Result<i64, ParseError> {
    Ok(text.parse::<ClockTime>()?.to_minutes())
}

/// Seconds since midnight of an `HH:MM:SS` string.
///
/// # Errors
/// Returns `ParseError` if a component is not a number.
pub fn iso_hms_to_seconds(text: &str) -> Result<i64, ParseError> {
    Ok(text.parse::<ClockTime>()?.to_seconds())
}

/// Percentage of the day elapsed at an `HH:MM:SS` string.
///
/// # Errors
/// Returns `ParseError` if a component is not a number.
pub fn iso_hms_to_percents(text: &str) -> Result<f64, ParseError> {
    Ok(text.parse::<ClockTime>()?.to_percent())
}

impl FromStr for ClockTime {
    type Err = ParseError;

    /// Parses `HH`, `HH:MM` or `HH:MM:SS`, optionally preceded by `T`.
    /// Missing minutes or seconds are zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix(DATE_TIME_SEPARATOR).unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(TIME_SEPARATOR).map(str::trim).collect();
        let component = |index: usize| {
            parts
                .get(index)
                .map_or(Ok(0), |token| parse_number(token, s))
        };
        match parts.len() {
            1..=3 => Ok(Self::new(component(0)?, component(1)?, component(2)?)),
            found => {
                tracing::debug!(input = s, found, "rejected time of day");
                Err(ParseError::TooManyComponents { expected: 3, found })
            },
        }
    }
}
