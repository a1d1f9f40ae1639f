/// Months in a civil year
pub const MONTHS_PER_YEAR: i64 = 12;

/// Days in a week
pub const DAYS_PER_WEEK: i64 = 7;

/// Month number for January, also the default when a month is omitted
pub const JANUARY: i64 = 1;
/// Month number for February
pub const FEBRUARY: i64 = 2;

/// First day of month, also the default when a day is omitted
pub const MIN_DAY: i64 = 1;

/// ISO weekday number for Monday, also the default when a weekday is omitted
pub const MONDAY: i64 = 1;
/// ISO weekday number for Thursday; the week holding a year's first Thursday is week 1
pub const THURSDAY: i64 = 4;
/// ISO weekday number for Sunday
pub const SUNDAY: i64 = 7;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i64 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [i64; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;
/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Days in a 4-year Julian cycle
pub(crate) const DAYS_PER_JULIAN_CYCLE: i64 = 1461;

/// Offset in years that keeps the day-count terms non-negative back to 4800 BCE
pub(crate) const JD_YEAR_OFFSET: i64 = 4800;
/// Julian Day of the (shifted) day count origin used by the forward formula
pub(crate) const JD_DAY_OFFSET: i64 = 32045;

/// Julian Day of 1970-01-01
pub const JD_1970_01_01: i64 = 2_440_588;
/// Julian Day of 2000-01-01
pub const JD_2000_01_01: i64 = 2_451_545;

/// Minutes in an hour
pub const MINUTES_PER_HOUR: i64 = 60;
/// Seconds in a minute
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Index of the last second of a day; percent-of-day divides by this, not 86400
pub const LAST_SECOND_OF_DAY: i64 = 86_399;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator (ISO 8601 format)
pub const TIME_SEPARATOR: char = ':';
/// Separates the date part from the time part
pub const DATE_TIME_SEPARATOR: char = 'T';
/// Prefix of the week token in a week date
pub const WEEK_MARKER: char = 'W';
