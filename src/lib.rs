//! Proleptic Gregorian calendar conversions.
//!
//! Converts between civil dates, ISO 8601 calendar and week date strings,
//! Julian Day numbers, absolute month counts and times of day. Every
//! conversion pivots through the Julian Day number: parse or read the
//! fields, turn them into a Julian Day, then render the target form.
//!
//! Numeric functions never fail or panic for years within ±2^50;
//! components are not range checked and a zero month, day or ISO weekday
//! counts as omitted. String
//! parsers return [`ParseError`] when a component is not a number.
//!
//! ```
//! use julian_calendar::{iso_to_jd, jd_to_iso_ymd, ymd_to_iso_ywd, ymd_to_jd};
//!
//! let jd = ymd_to_jd(2015, 1, 27);
//! assert_eq!(jd_to_iso_ymd(jd), "2015-01-27");
//! assert_eq!(ymd_to_iso_ywd(2015, 1, 27), "2015-W05-2");
//! assert_eq!(iso_to_jd("2015-W05-2").unwrap(), jd);
//! ```

mod consts;
mod convert;
mod date;
mod julian;
mod month;
mod prelude;
mod time;
mod types;
mod week;

pub use consts::*;
pub use convert::{iso_to_jd, iso_ymd_to_day_of_week, jd_to_iso_ym, jd_to_iso_ymd};
#[cfg(feature = "chrono")]
pub use date::DateOutOfRange;
pub use date::{
    CalendarDate, DateTime, date_to_ad_month, date_to_iso_hm, date_to_iso_hms, date_to_iso_ymd,
    date_to_jd, date_to_minutes, jd_into_date, jd_to_date,
};
pub use julian::{jd_to_day_of_week, jd_to_ymd, ymd_to_day_of_week, ymd_to_jd};
#[allow(deprecated)]
pub use month::{abs_month_to_iso_ym, abs_month_to_jd, iso_ym_to_abs_month};
pub use month::{ad_month_to_iso_ym, ad_month_to_jd, iso_to_ad_month, jd_to_ad_month};
pub use time::{
    hm_to_minutes, hms_to_seconds, iso_hm_to_minutes, iso_hms_to_percents, iso_hms_to_seconds,
    minutes_to_iso_hm, seconds_to_percents,
};
pub use types::{
    AdMonth, CivilDate, ClockTime, IsoWeek, IsoWeekDate, Year, YearMonth, days_in_month,
    is_leap_year,
};
pub use week::{
    first_week_jd, jd_to_iso_week, jd_to_iso_weekday, jd_to_iso_yw, jd_to_week_number,
    ymd_to_iso_week, ymd_to_iso_yw, ymd_to_iso_ywd, ymd_to_week_number, ywdow_to_jd,
};

use crate::prelude::*;
use std::str::FromStr;

/// Any date string accepted by [`iso_to_jd`], keeping the precision it was
/// written with.
///
/// Calendar forms are `YYYY`, `YYYY-MM` and `YYYY-MM-DD` (a `T...` time
/// suffix is ignored); week forms are `YYYY-Www` and `YYYY-Www-D`. A year
/// may carry a leading sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum IsoDate {
    /// Full calendar date
    #[display(fmt = "{}-{:02}-{:02}", "Year::new(*year)", "month", "day")]
    Day { year: i64, month: i64, day: i64 },
    /// Year and month only
    #[display(fmt = "{}-{:02}", "Year::new(*year)", "month")]
    Month { year: i64, month: i64 },
    /// Year only
    #[display(fmt = "{}", "Year::new(*year)")]
    Year { year: i64 },
    /// ISO week without a weekday
    #[display(fmt = "{}-W{:02}", "Year::new(*year)", "week")]
    Week { year: i64, week: i64 },
    /// Full ISO week date
    #[display(fmt = "{}-W{:02}-{}", "Year::new(*year)", "week", "weekday")]
    WeekDay { year: i64, week: i64, weekday: i64 },
}

/// Error returned when a date or time string does not follow the accepted
/// ISO 8601 subset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date or time string")]
    EmptyInput,

    #[error("Invalid number {token:?} in {input:?}")]
    InvalidNumber { token: String, input: String },

    #[error("Missing {component} in {input:?}")]
    MissingComponent {
        component: &'static str,
        input: String,
    },

    #[error("Too many components: expected at most {expected}, found {found}")]
    TooManyComponents { expected: usize, found: usize },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Parses one numeric component of `input`
pub(crate) fn parse_number(token: &str, input: &str) -> Result<i64, ParseError> {
    token.trim().parse::<i64>().map_err(|_| {
        tracing::debug!(token, input, "rejected numeric component");
        ParseError::InvalidNumber {
            token: token.to_owned(),
            input: input.to_owned(),
        }
    })
}

/// Splits a date on `-`, honoring a leading sign on the year.
/// Returns the year's sign and the unsigned components.
pub(crate) fn split_date(text: &str) -> (i64, Vec<&str>) {
    match text.strip_prefix(DATE_SEPARATOR) {
        Some(rest) => (-1, rest.split(DATE_SEPARATOR).collect()),
        None => (
            1,
            text.strip_prefix('+')
                .unwrap_or(text)
                .split(DATE_SEPARATOR)
                .collect(),
        ),
    }
}

impl IsoDate {
    /// Returns the year component (always present); the ISO week-numbering
    /// year for week forms
    pub const fn year(&self) -> i64 {
        match *self {
            Self::Day { year, .. }
            | Self::Month { year, .. }
            | Self::Year { year }
            | Self::Week { year, .. }
            | Self::WeekDay { year, .. } => year,
        }
    }

    /// Returns the month component if present
    pub const fn month(&self) -> Option<i64> {
        match *self {
            Self::Day { month, .. } | Self::Month { month, .. } => Some(month),
            Self::Year { .. } | Self::Week { .. } | Self::WeekDay { .. } => None,
        }
    }

    /// Returns the day-of-month component if present
    pub const fn day(&self) -> Option<i64> {
        match *self {
            Self::Day { day, .. } => Some(day),
            _ => None,
        }
    }

    /// Returns the ISO week component if present
    pub const fn week(&self) -> Option<i64> {
        match *self {
            Self::Week { week, .. } | Self::WeekDay { week, .. } => Some(week),
            _ => None,
        }
    }

    /// Returns the ISO weekday component (1 = Monday) if present
    pub const fn weekday(&self) -> Option<i64> {
        match *self {
            Self::WeekDay { weekday, .. } => Some(weekday),
            _ => None,
        }
    }

    /// Whether this is one of the week date forms
    pub const fn is_week_date(&self) -> bool {
        matches!(self, Self::Week { .. } | Self::WeekDay { .. })
    }

    /// Julian Day of the first day this value covers: missing month, day
    /// and weekday fall back to 1
    pub const fn to_jd(&self) -> i64 {
        match *self {
            Self::Day { year, month, day } => ymd_to_jd(year, month, day),
            Self::Month { year, month } => ymd_to_jd(year, month, MIN_DAY),
            Self::Year { year } => ymd_to_jd(year, JANUARY, MIN_DAY),
            Self::Week { year, week } => ywdow_to_jd(year, week, MONDAY),
            Self::WeekDay { year, week, weekday } => ywdow_to_jd(year, week, weekday),
        }
    }

    /// Civil date of [`IsoDate::to_jd`]
    pub const fn to_civil_date(&self) -> CivilDate {
        CivilDate::from_jd(self.to_jd())
    }
}

impl From<CivilDate> for IsoDate {
    fn from(date: CivilDate) -> Self {
        Self::Day {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

impl From<YearMonth> for IsoDate {
    fn from(value: YearMonth) -> Self {
        Self::Month {
            year: value.year,
            month: value.month,
        }
    }
}

impl From<IsoWeekDate> for IsoDate {
    fn from(value: IsoWeekDate) -> Self {
        Self::WeekDay {
            year: value.year,
            week: value.week,
            weekday: value.weekday,
        }
    }
}

impl FromStr for IsoDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if trimmed.contains(WEEK_MARKER) {
            tracing::trace!(input = s, "parsing ISO week date");
            Self::parse_week_date(trimmed, s)
        } else {
            tracing::trace!(input = s, "parsing ISO calendar date");
            // Time of day plays no part in the date
            let date = trimmed
                .split(DATE_TIME_SEPARATOR)
                .next()
                .unwrap_or(trimmed);
            Self::parse_calendar_date(date, s)
        }
    }
}

impl IsoDate {
    fn parse_calendar_date(date: &str, input: &str) -> Result<Self, ParseError> {
        let (sign, parts) = split_date(date);
        let year = sign * parse_number(parts[0], input)?;
        match parts.len() {
            1 => Ok(Self::Year { year }),
            2 => Ok(Self::Month {
                year,
                month: parse_number(parts[1], input)?,
            }),
            3 => Ok(Self::Day {
                year,
                month: parse_number(parts[1], input)?,
                day: parse_number(parts[2], input)?,
            }),
            found => {
                tracing::debug!(input, found, "rejected calendar date");
                Err(ParseError::TooManyComponents { expected: 3, found })
            },
        }
    }

    fn parse_week_date(date: &str, input: &str) -> Result<Self, ParseError> {
        let (sign, parts) = split_date(date);
        let year = sign * parse_number(parts[0], input)?;

        let week_token = parts.get(1).ok_or_else(|| {
            tracing::debug!(input, "week date without a week");
            ParseError::MissingComponent {
                component: "week",
                input: input.to_owned(),
            }
        })?;
        let week = week_token.trim().strip_prefix(WEEK_MARKER).ok_or_else(|| {
            tracing::debug!(input, "week token without its W prefix");
            ParseError::InvalidFormat(format!(
                "expected {WEEK_MARKER}ww after the year: {input}"
            ))
        })?;
        let week = parse_number(week, input)?;

        match parts.len() {
            2 => Ok(Self::Week { year, week }),
            3 => Ok(Self::WeekDay {
                year,
                week,
                weekday: parse_number(parts[2], input)?,
            }),
            found => {
                tracing::debug!(input, found, "rejected week date");
                Err(ParseError::TooManyComponents { expected: 3, found })
            },
        }
    }
}

impl serde::Serialize for IsoDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for IsoDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
