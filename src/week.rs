//! ISO 8601 week numbering.
//!
//! Week 1 of an ISO year is the week (Monday to Sunday) containing January
//! 4th, equivalently the week holding the year's first Thursday. Dates in
//! late December may belong to week 1 of the next ISO year, and dates in
//! early January to the last week (52 or 53) of the previous one.

use crate::consts::{DAYS_PER_WEEK, MONDAY, SUNDAY, THURSDAY};
use crate::julian::{jd_to_day_of_week, jd_to_ymd, or_default, ymd_to_jd};
use crate::types::IsoWeekDate;

/// ISO weekday of a Julian Day, `1` = Monday through `7` = Sunday.
#[inline]
pub const fn jd_to_iso_weekday(jd: i64) -> i64 {
    match jd_to_day_of_week(jd) {
        0 => SUNDAY,
        dow => dow,
    }
}

/// Julian Day of the Monday starting ISO week 1 of `year`.
///
/// Falls in late December of the previous year when January 1st is a
/// Tuesday, Wednesday or Thursday.
pub const fn first_week_jd(year: i64) -> i64 {
    let jan1 = ymd_to_jd(year, 1, 1);
    let weekday = jd_to_iso_weekday(jan1);
    if weekday <= THURSDAY {
        jan1 - (weekday - MONDAY)
    } else {
        jan1 + (DAYS_PER_WEEK + 1 - weekday)
    }
}

/// Week date of `jd` relative to the week-1 Monday `first` of `year`.
#[inline]
const fn week_date_from(year: i64, first: i64, jd: i64) -> IsoWeekDate {
    let offset = jd - first;
    IsoWeekDate::new(
        year,
        1 + offset.div_euclid(DAYS_PER_WEEK),
        1 + offset.rem_euclid(DAYS_PER_WEEK),
    )
}

/// ISO week date of a Julian Day.
pub const fn jd_to_iso_week(jd: i64) -> IsoWeekDate {
    let (year, _, _) = jd_to_ymd(jd);

    let next = first_week_jd(year + 1);
    if jd >= next {
        return week_date_from(year + 1, next, jd);
    }

    let first = first_week_jd(year);
    if jd < first {
        return week_date_from(year - 1, first_week_jd(year - 1), jd);
    }
    week_date_from(year, first, jd)
}

/// ISO week date of a civil date, as `(iso_year, week, weekday)`.
///
/// Zero month/day count as omitted, as in [`ymd_to_jd`].
pub const fn ymd_to_iso_week(year: i64, month: i64, day: i64) -> (i64, i64, i64) {
    let IsoWeekDate {
        year,
        week,
        weekday,
    } = jd_to_iso_week(ymd_to_jd(year, month, day));
    (year, week, weekday)
}

/// Julian Day of an ISO week date. A `weekday` of `0` counts as Monday.
///
/// ```
/// use julian_calendar::{ymd_to_jd, ywdow_to_jd};
///
/// assert_eq!(ywdow_to_jd(2015, 5, 2), ymd_to_jd(2015, 1, 27));
/// assert_eq!(ywdow_to_jd(2015, 1, 0), ymd_to_jd(2014, 12, 29));
/// ```
pub const fn ywdow_to_jd(year: i64, week: i64, weekday: i64) -> i64 {
    first_week_jd(year) + DAYS_PER_WEEK * (week - 1) + (or_default(weekday, MONDAY) - 1)
}

/// ISO week number (1..=53) of a civil date.
pub const fn ymd_to_week_number(year: i64, month: i64, day: i64) -> i64 {
    ymd_to_iso_week(year, month, day).1
}

/// ISO week number (1..=53) of a Julian Day.
pub const fn jd_to_week_number(jd: i64) -> i64 {
    jd_to_iso_week(jd).week
}

/// Formats the ISO week of a civil date as `YYYY-Www`.
///
/// ```
/// use julian_calendar::ymd_to_iso_yw;
///
/// assert_eq!(ymd_to_iso_yw(2015, 1, 26), "2015-W05");
/// assert_eq!(ymd_to_iso_yw(2016, 1, 1), "2015-W53");
/// ```
pub fn ymd_to_iso_yw(year: i64, month: i64, day: i64) -> String {
    jd_to_iso_yw(ymd_to_jd(year, month, day))
}

/// Formats the ISO week date of a civil date as `YYYY-Www-D`.
pub fn ymd_to_iso_ywd(year: i64, month: i64, day: i64) -> String {
    jd_to_iso_week(ymd_to_jd(year, month, day)).to_string()
}

/// Formats the ISO week of a Julian Day as `YYYY-Www`.
pub fn jd_to_iso_yw(jd: i64) -> String {
    jd_to_iso_week(jd).iso_week().to_string()
}
