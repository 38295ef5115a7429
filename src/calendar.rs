//! Proleptic Gregorian calendar rules
//!
//! Pure functions shared by the temporal validators. The calendar is fixed:
//! nothing here depends on locale, time zone database or system clock.

use chrono::{Datelike, NaiveDate};

/// Smallest year accepted by the temporal validators
pub fn min_year() -> i64 {
    i64::from(NaiveDate::MIN.year())
}

/// Largest year accepted by the temporal validators
pub fn max_year() -> i64 {
    i64::from(NaiveDate::MAX.year())
}

/// Whether `year` is inside the supported magnitude window
pub fn is_supported_year(year: i64) -> bool {
    (min_year()..=max_year()).contains(&year)
}

/// Leap year per the 4/100/400 rule, applied to the year number as written
pub fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Whether `month` names one of the twelve months
pub fn is_valid_month(month: u32) -> bool {
    (1..=12).contains(&month)
}

/// Number of days in `month` of `year`, or `None` for an invalid month
///
/// See [daysInMonth](https://www.w3.org/TR/xmlschema11-2/#f-daysInMonth).
pub fn days_in_month(year: i64, month: u32) -> Option<u32> {
    match month {
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        4 | 6 | 9 | 11 => Some(30),
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        _ => None,
    }
}

/// Whether `year-month-day` names an existing calendar day
pub fn is_valid_day(year: i64, month: u32, day: u32) -> bool {
    days_in_month(year, month).is_some_and(|max| (1..=max).contains(&day))
}
