//! Adapters for wall-clock date/time values.
//!
//! Anything exposing calendar fields through [`CalendarDate`] can be fed to
//! the conversions of this crate. [`DateTime`] is the crate's own
//! implementation; with the `chrono` feature, `chrono::NaiveDateTime`
//! implements it too.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::julian::ymd_to_jd;
use crate::prelude::*;
use crate::time::hm_to_minutes;
use crate::types::{CivilDate, ClockTime, YearMonth};

#[cfg(feature = "chrono")]
pub use chrono_impl::DateOutOfRange;

/// A wall-clock date and time read through accessors and updated through
/// [`CalendarDate::set_ymd`].
pub trait CalendarDate: Sized {
    /// Raised when a date cannot be represented by the implementing type.
    type Error;

    fn year(&self) -> i64;
    /// `1` = January
    fn month(&self) -> i64;
    fn day(&self) -> i64;
    fn hour(&self) -> i64;
    fn minute(&self) -> i64;
    fn second(&self) -> i64;

    /// Creates a value at midnight of the given date.
    ///
    /// # Errors
    /// Returns `Self::Error` if the date cannot be represented.
    fn from_ymd(year: i64, month: i64, day: i64) -> Result<Self, Self::Error>;

    /// Replaces the date, leaving the time of day untouched.
    ///
    /// # Errors
    /// Returns `Self::Error` if the date cannot be represented.
    fn set_ymd(&mut self, year: i64, month: i64, day: i64) -> Result<(), Self::Error>;
}

/// Plain wall-clock date and time, displayed as `YYYY-MM-DDTHH:MM:SS`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
#[display(
    fmt = "{}T{}",
    "CivilDate::new(*year, *month, *day)",
    "ClockTime::new(*hour, *minute, *second)"
)]
pub struct DateTime {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl DateTime {
    pub const fn new(date: CivilDate, time: ClockTime) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour: time.hour,
            minute: time.minute,
            second: time.second,
        }
    }

    /// Midnight of the given Julian Day
    pub const fn from_jd(jd: i64) -> Self {
        Self::new(CivilDate::from_jd(jd), ClockTime::new(0, 0, 0))
    }

    /// Moves to the given Julian Day, keeping the time of day
    pub const fn set_jd(&mut self, jd: i64) {
        let date = CivilDate::from_jd(jd);
        self.year = date.year;
        self.month = date.month;
        self.day = date.day;
    }

    pub const fn date(&self) -> CivilDate {
        CivilDate::new(self.year, self.month, self.day)
    }

    pub const fn time(&self) -> ClockTime {
        ClockTime::new(self.hour, self.minute, self.second)
    }
}

impl From<CivilDate> for DateTime {
    fn from(date: CivilDate) -> Self {
        Self::new(date, ClockTime::default())
    }
}

impl CalendarDate for DateTime {
    type Error = Infallible;

    fn year(&self) -> i64 {
        self.year
    }

    fn month(&self) -> i64 {
        self.month
    }

    fn day(&self) -> i64 {
        self.day
    }

    fn hour(&self) -> i64 {
        self.hour
    }

    fn minute(&self) -> i64 {
        self.minute
    }

    fn second(&self) -> i64 {
        self.second
    }

    fn from_ymd(year: i64, month: i64, day: i64) -> Result<Self, Self::Error> {
        Ok(CivilDate::new(year, month, day).into())
    }

    fn set_ymd(&mut self, year: i64, month: i64, day: i64) -> Result<(), Self::Error> {
        self.year = year;
        self.month = month;
        self.day = day;
        Ok(())
    }
}

fn civil_date<D: CalendarDate>(date: &D) -> CivilDate {
    CivilDate::new(date.year(), date.month(), date.day())
}

/// Julian Day of the date part.
pub fn date_to_jd<D: CalendarDate>(date: &D) -> i64 {
    ymd_to_jd(date.year(), date.month(), date.day())
}

/// Absolute month of the date part.
pub fn date_to_ad_month<D: CalendarDate>(date: &D) -> i64 {
    YearMonth::new(date.year(), date.month()).to_ad_month().get()
}

/// Formats the date part as `YYYY-MM-DD`.
pub fn date_to_iso_ymd<D: CalendarDate>(date: &D) -> String {
    civil_date(date).to_string()
}

/// Formats the time of day as `HH:MM`.
pub fn date_to_iso_hm<D: CalendarDate>(date: &D) -> String {
    format!("{:02}:{:02}", date.hour(), date.minute())
}

/// Formats the time of day as `HH:MM:SS`.
pub fn date_to_iso_hms<D: CalendarDate>(date: &D) -> String {
    ClockTime::new(date.hour(), date.minute(), date.second()).to_string()
}

/// Minutes since midnight of the time of day.
pub fn date_to_minutes<D: CalendarDate>(date: &D) -> i64 {
    hm_to_minutes(date.hour(), date.minute())
}

/// Writes the calendar date of `jd` into `date` in place, keeping its time
/// of day.
///
/// ```
/// use julian_calendar::{CivilDate, ClockTime, DateTime, jd_into_date};
///
/// let mut date = DateTime::new(CivilDate::new(1999, 6, 1), ClockTime::new(8, 30, 0));
/// jd_into_date(2_451_545, &mut date).unwrap();
/// assert_eq!(date.to_string(), "2000-01-01T08:30:00");
/// ```
///
/// # Errors
/// Returns `D::Error` if `D` cannot represent the date; `date` is left
/// unchanged then. Never fails for [`DateTime`].
pub fn jd_into_date<D: CalendarDate>(jd: i64, date: &mut D) -> Result<(), D::Error> {
    let CivilDate { year, month, day } = CivilDate::from_jd(jd);
    date.set_ymd(year, month, day)
}

/// Writes the calendar date of `jd` into `existing`, keeping its time of
/// day, or creates a new value at midnight when there is none.
///
/// `existing` is taken by value and handed back updated; use
/// [`jd_into_date`] to update a value the caller keeps borrowing.
///
/// ```
/// use julian_calendar::{DateTime, jd_to_date};
///
/// let fresh: DateTime = jd_to_date(2_451_545, None).unwrap();
/// assert_eq!(fresh.to_string(), "2000-01-01T00:00:00");
/// ```
///
/// # Errors
/// Returns `D::Error` if `D` cannot represent the date. Never fails for
/// [`DateTime`].
pub fn jd_to_date<D: CalendarDate>(jd: i64, existing: Option<D>) -> Result<D, D::Error> {
    match existing {
        Some(mut date) => {
            jd_into_date(jd, &mut date)?;
            Ok(date)
        },
        None => {
            let CivilDate { year, month, day } = CivilDate::from_jd(jd);
            D::from_ymd(year, month, day)
        },
    }
}

#[cfg(feature = "chrono")]
mod chrono_impl {
    use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

    use super::CalendarDate;

    /// The date lies outside what `chrono` can represent.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
    #[error("{year}-{month}-{day} is outside the range supported by chrono")]
    pub struct DateOutOfRange {
        pub year: i64,
        pub month: i64,
        pub day: i64,
    }

    fn naive_date(year: i64, month: i64, day: i64) -> Result<NaiveDate, DateOutOfRange> {
        let out_of_range = DateOutOfRange { year, month, day };
        let y = i32::try_from(year).map_err(|_| out_of_range)?;
        let m = u32::try_from(month).map_err(|_| out_of_range)?;
        let d = u32::try_from(day).map_err(|_| out_of_range)?;
        NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
            tracing::debug!(year, month, day, "date not representable by chrono");
            out_of_range
        })
    }

    impl CalendarDate for NaiveDateTime {
        type Error = DateOutOfRange;

        fn year(&self) -> i64 {
            i64::from(Datelike::year(self))
        }

        fn month(&self) -> i64 {
            i64::from(Datelike::month(self))
        }

        fn day(&self) -> i64 {
            i64::from(Datelike::day(self))
        }

        fn hour(&self) -> i64 {
            i64::from(Timelike::hour(self))
        }

        fn minute(&self) -> i64 {
            i64::from(Timelike::minute(self))
        }

        fn second(&self) -> i64 {
            i64::from(Timelike::second(self))
        }

        fn from_ymd(year: i64, month: i64, day: i64) -> Result<Self, Self::Error> {
            Ok(naive_date(year, month, day)?.and_time(NaiveTime::MIN))
        }

        fn set_ymd(&mut self, year: i64, month: i64, day: i64) -> Result<(), Self::Error> {
            *self = naive_date(year, month, day)?.and_time(self.time());
            Ok(())
        }
    }
}
