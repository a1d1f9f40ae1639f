//! Civil date <-> Julian Day conversion.
//!
//! Every other conversion in the crate pivots through the Julian Day number
//! produced here. All divisions are floor divisions (`div_euclid`), so the
//! formulas stay exact for years before the Julian Day epoch as well.

use crate::consts::{
    DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_JULIAN_CYCLE, DAYS_PER_WEEK, JANUARY, JD_DAY_OFFSET,
    JD_YEAR_OFFSET, MIN_DAY, MONTHS_PER_YEAR,
};

/// Treats a zero component as omitted and substitutes `default`.
#[inline]
pub(crate) const fn or_default(value: i64, default: i64) -> i64 {
    if value == 0 { default } else { value }
}

/// Shifts the calendar so the year starts in March: returns the year counted
/// from 4800 BCE and the month counted from March (0..=11).
#[inline]
const fn march_based(year: i64, month: i64) -> (i64, i64) {
    let a = (14 - month).div_euclid(MONTHS_PER_YEAR);
    (year + JD_YEAR_OFFSET - a, month + MONTHS_PER_YEAR * a - 3)
}

/// Days from March 1st to the first day of a March-based month.
#[inline]
const fn days_before_month(march_month: i64) -> i64 {
    (153 * march_month + 2).div_euclid(5)
}

/// Converts a proleptic Gregorian date to its Julian Day number.
///
/// A `month` or `day` of `0` counts as omitted and is replaced by `1`, so
/// `ymd_to_jd(2015, 0, 0)` is January 1st 2015. Years are astronomical
/// (year 0 is 1 BCE).
///
/// Exact for years within ±2^50; beyond that the intermediate day count
/// overflows `i64`.
///
/// ```
/// use julian_calendar::ymd_to_jd;
///
/// assert_eq!(ymd_to_jd(2000, 1, 1), 2_451_545);
/// assert_eq!(ymd_to_jd(2000, 0, 0), 2_451_545);
/// ```
pub const fn ymd_to_jd(year: i64, month: i64, day: i64) -> i64 {
    let month = or_default(month, JANUARY);
    let day = or_default(day, MIN_DAY);
    let (y, m) = march_based(year, month);
    day + days_before_month(m) + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        - JD_DAY_OFFSET
}

/// Converts a Julian Day number back to a proleptic Gregorian `(year, month, day)`.
///
/// Exact inverse of [`ymd_to_jd`] for every Julian Day within ±2^60, which
/// covers years far beyond ±2^50. Larger values overflow `i64` in the
/// intermediate cycle counts.
pub const fn jd_to_ymd(jd: i64) -> (i64, i64, i64) {
    let a = jd + JD_DAY_OFFSET - 1;
    // 400-year cycles, then the day within the cycle
    let b = (4 * a + 3).div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    let c = a - (DAYS_PER_GREGORIAN_CYCLE * b).div_euclid(4);
    // 4-year cycles, then the day within the March-based year
    let d = (4 * c + 3).div_euclid(DAYS_PER_JULIAN_CYCLE);
    let e = c - (DAYS_PER_JULIAN_CYCLE * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - days_before_month(m) + 1;
    let month = m + 3 - MONTHS_PER_YEAR * m.div_euclid(10);
    let year = 100 * b + d - JD_YEAR_OFFSET + m.div_euclid(10);
    (year, month, day)
}

/// Day of week of a civil date, `0` = Sunday through `6` = Saturday.
///
/// Uses the day count of [`ymd_to_jd`] reduced modulo 7 term by term, so it
/// does not go through the Julian Day itself. Unlike [`ymd_to_jd`], a zero
/// month or day is taken literally.
pub const fn ymd_to_day_of_week(year: i64, month: i64, day: i64) -> i64 {
    let (y, m) = march_based(year, month);
    // 365 ≡ 1 and -32044 ≡ 2 (mod 7)
    (day + days_before_month(m) + y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + 2)
        .rem_euclid(DAYS_PER_WEEK)
}

/// Day of week of a Julian Day, `0` = Sunday through `6` = Saturday.
pub const fn jd_to_day_of_week(jd: i64) -> i64 {
    (jd + 1).rem_euclid(DAYS_PER_WEEK)
}
