use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LAST_SECOND_OF_DAY, LEAP_YEAR_CYCLE, MINUTES_PER_HOUR, MONTHS_PER_YEAR, SECONDS_PER_MINUTE,
};
use crate::julian::{jd_to_ymd, or_default, ymd_to_day_of_week, ymd_to_jd};
use crate::prelude::*;
use crate::week::{jd_to_iso_week, ywdow_to_jd};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An astronomical year (year 0 is 1 BCE, negative years before that).
///
/// Displays as ISO 8601 does: at least four digits, with a leading minus
/// sign for years before year 0 (`-0044`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Year(i64);

impl Year {
    /// Wraps a raw year value
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the year value as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-{:04}", self.0.unsigned_abs())
        } else {
            write!(f, "{:04}", self.0)
        }
    }
}

/// A proleptic Gregorian calendar date.
///
/// Components are not range checked; anything that goes in comes back out
/// of the arithmetic, as with the free functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}-{:02}-{:02}", "Year(*year)", "month", "day")]
pub struct CivilDate {
    pub year: i64,
    pub month: i64,
    pub day: i64,
}

impl CivilDate {
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }

    /// Calendar date of a Julian Day
    pub const fn from_jd(jd: i64) -> Self {
        let (year, month, day) = jd_to_ymd(jd);
        Self { year, month, day }
    }

    /// Julian Day of this date (zero month/day count as 1, see [`ymd_to_jd`])
    pub const fn to_jd(self) -> i64 {
        ymd_to_jd(self.year, self.month, self.day)
    }

    /// `0` = Sunday through `6` = Saturday
    pub const fn day_of_week(self) -> i64 {
        ymd_to_day_of_week(self.year, self.month, self.day)
    }

    pub const fn year_month(self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }
}

impl From<(i64, i64, i64)> for CivilDate {
    fn from((year, month, day): (i64, i64, i64)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<CivilDate> for (i64, i64, i64) {
    fn from(date: CivilDate) -> Self {
        (date.year, date.month, date.day)
    }
}

/// A civil year and month, displayed as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}-{:02}", "Year(*year)", "month")]
pub struct YearMonth {
    pub year: i64,
    pub month: i64,
}

impl YearMonth {
    pub const fn new(year: i64, month: i64) -> Self {
        Self { year, month }
    }

    /// Absolute month count; an omitted (zero) month counts as January
    pub const fn to_ad_month(self) -> AdMonth {
        AdMonth(self.year * MONTHS_PER_YEAR + or_default(self.month, JANUARY) - 1)
    }
}

/// An ISO week-numbering year and week, displayed as `YYYY-Www`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}-W{:02}", "Year(*year)", "week")]
pub struct IsoWeek {
    pub year: i64,
    pub week: i64,
}

/// An ISO 8601 week date, displayed as `YYYY-Www-D`.
///
/// `year` is the ISO week-numbering year, which differs from the civil year
/// for a few days around January 1st. `weekday` runs from `1` = Monday to
/// `7` = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}-W{:02}-{}", "Year(*year)", "week", "weekday")]
pub struct IsoWeekDate {
    pub year: i64,
    pub week: i64,
    pub weekday: i64,
}

impl IsoWeekDate {
    pub const fn new(year: i64, week: i64, weekday: i64) -> Self {
        Self { year, week, weekday }
    }

    pub const fn from_jd(jd: i64) -> Self {
        jd_to_iso_week(jd)
    }

    /// Julian Day of this week date (a zero weekday counts as Monday)
    pub const fn to_jd(self) -> i64 {
        ywdow_to_jd(self.year, self.week, self.weekday)
    }

    /// Drops the weekday
    pub const fn iso_week(self) -> IsoWeek {
        IsoWeek {
            year: self.year,
            week: self.week,
        }
    }
}

/// A time of day, displayed as `HH:MM:SS`.
///
/// Not range checked: 25 hours or negative minutes simply flow into the
/// arithmetic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:02}:{:02}:{:02}", "hour", "minute", "second")]
pub struct ClockTime {
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl ClockTime {
    pub const fn new(hour: i64, minute: i64, second: i64) -> Self {
        Self { hour, minute, second }
    }

    /// Minutes since midnight, seconds ignored
    pub const fn to_minutes(self) -> i64 {
        self.hour * MINUTES_PER_HOUR + self.minute
    }

    /// Seconds since midnight
    pub const fn to_seconds(self) -> i64 {
        self.to_minutes() * SECONDS_PER_MINUTE + self.second
    }

    /// Percentage of the day elapsed, `23:59:59` being exactly 100
    pub fn to_percent(self) -> f64 {
        self.to_seconds() as f64 * 100.0 / LAST_SECOND_OF_DAY as f64
    }
}

/// Months elapsed since January of year 0: `year * 12 + (month - 1)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AdMonth(i64);

impl AdMonth {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Month containing the given Julian Day
    pub const fn from_jd(jd: i64) -> Self {
        let (year, month, _) = jd_to_ymd(jd);
        YearMonth::new(year, month).to_ad_month()
    }

    /// Civil year and month, floor division keeping months in `1..=12`
    pub const fn year_month(self) -> YearMonth {
        YearMonth::new(
            self.0.div_euclid(MONTHS_PER_YEAR),
            self.0.rem_euclid(MONTHS_PER_YEAR) + 1,
        )
    }

    /// Julian Day of the first day of this month
    pub const fn to_jd(self) -> i64 {
        let YearMonth { year, month } = self.year_month();
        ymd_to_jd(year, month, 1)
    }
}

impl From<YearMonth> for AdMonth {
    fn from(value: YearMonth) -> Self {
        value.to_ad_month()
    }
}

impl From<AdMonth> for YearMonth {
    fn from(value: AdMonth) -> Self {
        value.year_month()
    }
}

// Helper functions

pub const fn is_leap_year(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Days in `month` of `year`. Months outside `1..=12` wrap around the year,
/// so month 0 is December and month 13 is January.
pub const fn days_in_month(year: i64, month: i64) -> i64 {
    let month = match month.rem_euclid(MONTHS_PER_YEAR) {
        0 => MONTHS_PER_YEAR,
        m => m,
    };

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_display() {
        assert_eq!(Year::new(2024).to_string(), "2024");
        assert_eq!(Year::new(800).to_string(), "0800");
        assert_eq!(Year::new(0).to_string(), "0000");
        assert_eq!(Year::new(-44).to_string(), "-0044");
        assert_eq!(Year::new(12345).to_string(), "12345");
    }

    #[test]
    fn test_year_from_into() {
        let year: Year = 2024.into();
        assert_eq!(year.get(), 2024);
        let value: i64 = year.into();
        assert_eq!(value, 2024);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(-44);
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "-44");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
    }

    #[test]
    fn test_civil_date_display() {
        assert_eq!(CivilDate::new(1991, 8, 15).to_string(), "1991-08-15");
        assert_eq!(CivilDate::new(5, 1, 2).to_string(), "0005-01-02");
        assert_eq!(CivilDate::new(-1, 12, 31).to_string(), "-0001-12-31");
    }

    #[test]
    fn test_civil_date_julian_day() {
        let date = CivilDate::from_jd(2_451_545);
        assert_eq!(date, CivilDate::new(2000, 1, 1));
        assert_eq!(date.to_jd(), 2_451_545);
        assert_eq!(date.day_of_week(), 6);
        assert_eq!(date.year_month(), YearMonth::new(2000, 1));
    }

    #[test]
    fn test_civil_date_tuple_conversions() {
        let date: CivilDate = (2015, 1, 27).into();
        assert_eq!(date, CivilDate::new(2015, 1, 27));
        let tuple: (i64, i64, i64) = date.into();
        assert_eq!(tuple, (2015, 1, 27));
    }

    #[test]
    fn test_civil_date_ordering() {
        let d1 = CivilDate::new(1991, 8, 15);
        let d2 = CivilDate::new(1991, 9, 1);
        let d3 = CivilDate::new(1992, 1, 1);
        assert!(d1 < d2);
        assert!(d2 < d3);
    }

    #[test]
    fn test_civil_date_serde() {
        let date = CivilDate::new(2015, 1, 27);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":2015,"month":1,"day":27}"#);
        let parsed: CivilDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_year_month() {
        let ym = YearMonth::new(2015, 3);
        assert_eq!(ym.to_string(), "2015-03");
        assert_eq!(ym.to_ad_month().get(), 2015 * 12 + 2);
        assert_eq!(YearMonth::new(2015, 0).to_ad_month(), YearMonth::new(2015, 1).to_ad_month());
    }

    #[test]
    fn test_iso_week_display() {
        assert_eq!(IsoWeek { year: 2015, week: 5 }.to_string(), "2015-W05");
        assert_eq!(IsoWeekDate::new(2015, 5, 2).to_string(), "2015-W05-2");
        assert_eq!(IsoWeekDate::new(2015, 53, 7).iso_week().to_string(), "2015-W53");
    }

    #[test]
    fn test_iso_week_date_julian_day() {
        let date = IsoWeekDate::new(2015, 5, 2);
        assert_eq!(date.to_jd(), ymd_to_jd(2015, 1, 27));
        assert_eq!(IsoWeekDate::from_jd(date.to_jd()), date);
    }

    #[test]
    fn test_clock_time() {
        let time = ClockTime::new(7, 5, 9);
        assert_eq!(time.to_string(), "07:05:09");
        assert_eq!(time.to_minutes(), 425);
        assert_eq!(time.to_seconds(), 25_509);
        assert_eq!(ClockTime::default().to_percent(), 0.0);
        assert!((ClockTime::new(23, 59, 59).to_percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ad_month() {
        let month = AdMonth::new(2015 * 12 + 11);
        assert_eq!(month.year_month(), YearMonth::new(2015, 12));
        assert_eq!(month.to_string(), "24191");
        assert_eq!(month.to_jd(), ymd_to_jd(2015, 12, 1));
        assert_eq!(AdMonth::from_jd(ymd_to_jd(2015, 12, 31)), month);

        let negative = AdMonth::new(-1);
        assert_eq!(negative.year_month(), YearMonth::new(-1, 12));
    }

    #[test]
    fn test_ad_month_from_into() {
        let month: AdMonth = YearMonth::new(0, 1).into();
        assert_eq!(month.get(), 0);
        let ym: YearMonth = AdMonth::new(13).into();
        assert_eq!(ym, YearMonth::new(1, 2));
        let raw: i64 = month.into();
        assert_eq!(raw, 0);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i64,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "year zero is divisible by 400",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative, divisible by 4",
            },
            TestCase {
                year: -100,
                is_leap: false,
                description: "negative century not divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2024, month), 31, "Month {month} should have 31 days");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2024, month), 30, "Month {month} should have 30 days");
        }
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }

    #[test]
    fn test_days_in_month_wraps_out_of_range_months() {
        assert_eq!(days_in_month(2015, 0), 31, "month 0 is December");
        assert_eq!(days_in_month(2015, 13), 31, "month 13 is January");
        assert_eq!(days_in_month(2015, 14), 28, "month 14 is February");
        assert_eq!(days_in_month(2016, 14), 29);
        assert_eq!(days_in_month(2015, -1), 30, "month -1 is November");
        assert_eq!(days_in_month(2015, i64::MIN), days_in_month(2015, i64::MIN.rem_euclid(12)));
    }
}
