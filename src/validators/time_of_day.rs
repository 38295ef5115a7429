//! Time-of-day rules for dateTime literals

use crate::validators::lexical::ParsedTime;

/// Validate hour, minute, second and fraction of a dateTime
///
/// - minute is always `0..=59`
/// - second is `0..=59`, or `60` (leap second) with an absent or all-zero fraction
/// - hour is `0..=23`, or `24` only as `24:00:00` with an absent or all-zero
///   fraction, denoting the first instant of the next day
pub fn is_valid_time_of_day(time: &ParsedTime<'_>) -> bool {
    if time.minute > 59 {
        return false;
    }

    match time.second {
        0..=59 => {}
        60 if time.has_zero_fraction() => {}
        _ => return false,
    }

    match time.hour {
        0..=23 => true,
        24 => time.minute == 0 && time.second == 0 && time.has_zero_fraction(),
        _ => false,
    }
}
