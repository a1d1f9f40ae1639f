//! ISO date string <-> Julian Day.

use crate::julian::{jd_to_day_of_week, ymd_to_day_of_week};
use crate::types::CivilDate;
use crate::{IsoDate, ParseError};

/// Julian Day of an ISO 8601 date string.
///
/// Accepts `YYYY-Www-D`, `YYYY-Www`, `YYYY-MM-DD[THH:MM:SS...]`, `YYYY-MM`
/// and `YYYY`; missing trailing components count as 1.
///
/// ```
/// use julian_calendar::{iso_to_jd, ymd_to_jd};
///
/// assert_eq!(iso_to_jd("2015-01-27T08:00:00").unwrap(), ymd_to_jd(2015, 1, 27));
/// assert_eq!(iso_to_jd("2015-W05-2").unwrap(), ymd_to_jd(2015, 1, 27));
/// assert_eq!(iso_to_jd("2015").unwrap(), ymd_to_jd(2015, 1, 1));
/// ```
///
/// # Errors
/// Returns `ParseError` if the string does not follow one of those forms.
pub fn iso_to_jd(text: &str) -> Result<i64, ParseError> {
    Ok(text.parse::<IsoDate>()?.to_jd())
}

/// Day of week (`0` = Sunday) of a `YYYY-MM-DD` string.
///
/// # Errors
/// Returns `ParseError` if the string is not a date.
pub fn iso_ymd_to_day_of_week(text: &str) -> Result<i64, ParseError> {
    Ok(match text.parse::<IsoDate>()? {
        IsoDate::Day { year, month, day } => ymd_to_day_of_week(year, month, day),
        other => jd_to_day_of_week(other.to_jd()),
    })
}

/// Formats a Julian Day as `YYYY-MM-DD`.
pub fn jd_to_iso_ymd(jd: i64) -> String {
    CivilDate::from_jd(jd).to_string()
}

/// Formats the month of a Julian Day as `YYYY-MM`.
pub fn jd_to_iso_ym(jd: i64) -> String {
    CivilDate::from_jd(jd).year_month().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::ymd_to_jd;

    #[test]
    fn test_iso_to_jd_calendar_forms() {
        assert_eq!(iso_to_jd("2000-01-01").unwrap(), 2_451_545);
        assert_eq!(iso_to_jd("2000-01").unwrap(), 2_451_545);
        assert_eq!(iso_to_jd("2000").unwrap(), 2_451_545);
        assert_eq!(iso_to_jd("2000-03-01T23:59:59").unwrap(), ymd_to_jd(2000, 3, 1));
        assert_eq!(iso_to_jd("2000-03-00").unwrap(), ymd_to_jd(2000, 3, 1), "day 0 counts as 1");
    }

    #[test]
    fn test_iso_to_jd_week_forms() {
        assert_eq!(iso_to_jd("2015-W05-2").unwrap(), ymd_to_jd(2015, 1, 27));
        assert_eq!(iso_to_jd("2015-W05").unwrap(), ymd_to_jd(2015, 1, 26));
        assert_eq!(iso_to_jd("2015-W53-5").unwrap(), ymd_to_jd(2016, 1, 1));
        assert_eq!(iso_to_jd("2015-W01-1").unwrap(), ymd_to_jd(2014, 12, 29));
    }

    #[test]
    fn test_iso_to_jd_errors() {
        assert!(matches!(iso_to_jd(""), Err(ParseError::EmptyInput)));
        assert!(iso_to_jd("yesterday").is_err());
        assert!(iso_to_jd("2015-W").is_err());
    }

    #[test]
    fn test_iso_ymd_to_day_of_week() {
        assert_eq!(iso_ymd_to_day_of_week("2000-01-01").unwrap(), 6);
        assert_eq!(iso_ymd_to_day_of_week("2015-01-26").unwrap(), 1);
        assert_eq!(iso_ymd_to_day_of_week("2016-01-03").unwrap(), 0);
        assert!(iso_ymd_to_day_of_week("2016-01-xx").is_err());
    }

    #[test]
    fn test_jd_formatting() {
        assert_eq!(jd_to_iso_ymd(2_451_545), "2000-01-01");
        assert_eq!(jd_to_iso_ymd(ymd_to_jd(2015, 1, 27)), "2015-01-27");
        assert_eq!(jd_to_iso_ym(ymd_to_jd(2015, 1, 27)), "2015-01");
        assert_eq!(jd_to_iso_ymd(0), "-4713-11-24");
    }

    #[test]
    fn test_iso_round_trip() {
        for jd in 2_457_000..2_458_000 {
            assert_eq!(iso_to_jd(&jd_to_iso_ymd(jd)).unwrap(), jd);
        }
    }
}
