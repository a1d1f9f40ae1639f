//! Absolute ("AD") months: `year * 12 + (month - 1)`, month 0 being
//! January of year 0.

use crate::types::{AdMonth, YearMonth};
use crate::{IsoDate, ParseError};

/// Absolute month of an ISO date string.
///
/// Only the year and month of a calendar date matter; a bare `YYYY` counts
/// as January. Week dates carry no month and are rejected.
///
/// ```
/// use julian_calendar::iso_to_ad_month;
///
/// assert_eq!(iso_to_ad_month("2015-03").unwrap(), 2015 * 12 + 2);
/// assert_eq!(iso_to_ad_month("2015").unwrap(), 2015 * 12);
/// ```
///
/// # Errors
/// Returns `ParseError` if the string is not an ISO calendar date.
pub fn iso_to_ad_month(text: &str) -> Result<i64, ParseError> {
    let month = match text.parse::<IsoDate>()? {
        IsoDate::Day { year, month, .. } | IsoDate::Month { year, month } => {
            YearMonth::new(year, month).to_ad_month()
        },
        IsoDate::Year { year } => YearMonth::new(year, 0).to_ad_month(),
        IsoDate::Week { .. } | IsoDate::WeekDay { .. } => {
            tracing::debug!(input = text, "week date has no month");
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY-MM, found a week date: {text}"
            )));
        },
    };
    Ok(month.get())
}

/// Formats an absolute month as `YYYY-MM`.
pub fn ad_month_to_iso_ym(month: i64) -> String {
    AdMonth::new(month).year_month().to_string()
}

/// Julian Day of the first day of an absolute month.
pub const fn ad_month_to_jd(month: i64) -> i64 {
    AdMonth::new(month).to_jd()
}

/// Absolute month containing a Julian Day.
pub const fn jd_to_ad_month(jd: i64) -> i64 {
    AdMonth::from_jd(jd).get()
}

/// # Errors
/// Returns `ParseError` if the string is not an ISO date.
#[deprecated(note = "renamed to `iso_to_ad_month`")]
pub fn iso_ym_to_abs_month(text: &str) -> Result<i64, ParseError> {
    iso_to_ad_month(text)
}

#[deprecated(note = "renamed to `ad_month_to_iso_ym`")]
pub fn abs_month_to_iso_ym(month: i64) -> String {
    ad_month_to_iso_ym(month)
}

#[deprecated(note = "renamed to `ad_month_to_jd`")]
pub const fn abs_month_to_jd(month: i64) -> i64 {
    ad_month_to_jd(month)
}
