//! Timezone bounds and recoverable-timezone equivalence
//!
//! `Z` and `±hh:mm` with `hh` in `00..=14`, `mm` in `00..=59`, and only
//! `:00` allowed when `hh` is `14`. `+00:00` and `-00:00` both denote UTC.

use chrono::{Datelike, NaiveDate};

/// Maximum lexical offset magnitude, in minutes (`14:00`)
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Recoverable range of a timezoned date, in minutes: `+12:00` down to `-11:59`
pub const RECOVERABLE_MINUTES: std::ops::RangeInclusive<i64> = -719..=720;

/// A lexically valid timezone offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimezoneOffset {
    minutes: i32,
}

impl TimezoneOffset {
    /// UTC, written `Z`, `+00:00` or `-00:00`
    pub const UTC: Self = Self { minutes: 0 };

    /// Parse `Z` or `±hh:mm`, `None` if out of bounds or malformed
    pub fn parse(token: &str) -> Option<Self> {
        if token == "Z" {
            return Some(Self::UTC);
        }

        let (sign, rest) = if let Some(rest) = token.strip_prefix('+') {
            (1, rest)
        } else if let Some(rest) = token.strip_prefix('-') {
            (-1, rest)
        } else {
            return None;
        };
        let (hours, minutes) = rest.split_once(':')?;
        if hours.len() != 2 || minutes.len() != 2 {
            return None;
        }
        if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        let hours: i32 = hours.parse().ok()?;
        let minutes: i32 = minutes.parse().ok()?;

        if !is_valid_offset(hours, minutes) {
            return None;
        }
        Some(Self {
            minutes: sign * (hours * 60 + minutes),
        })
    }

    /// Signed offset from UTC in minutes
    pub fn minutes(self) -> i32 {
        self.minutes
    }

    /// Whether this offset equals UTC
    pub fn is_utc(self) -> bool {
        self.minutes == 0
    }
}

/// Lexical bounds of an offset given as unsigned hours and minutes
pub fn is_valid_offset(hours: i32, minutes: i32) -> bool {
    if !(0..=14).contains(&hours) || !(0..=59).contains(&minutes) {
        return false;
    }
    hours != 14 || minutes == 0
}

/// Minutes in one day
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Whether a timezoned date denotes a recoverable UTC calendar day
///
/// Local midnight of `year-month-day` under `offset` is an instant; the UTC
/// midnights of that instant's UTC date and of the following UTC date are the
/// two candidates. The date is recoverable if the signed distance from the
/// instant to either candidate lies in [`RECOVERABLE_MINUTES`]. Checking both
/// candidates is what lets `+13:00` and `+14:00` normalize onto the previous
/// UTC day.
///
/// The instant is a plain `i64` minute count built from chrono's common-era
/// day number, so both candidates exist on the first and last supported days. Only a
/// date chrono cannot represent rejects.
pub fn is_recoverable(year: i64, month: u32, day: u32, offset: TimezoneOffset) -> bool {
    recoverable_distances(year, month, day, offset).is_some_and(|(current, next)| {
        RECOVERABLE_MINUTES.contains(&current) || RECOVERABLE_MINUTES.contains(&next)
    })
}

fn recoverable_distances(
    year: i64,
    month: u32,
    day: u32,
    offset: TimezoneOffset,
) -> Option<(i64, i64)> {
    let date = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)?;
    let local_midnight = i64::from(date.num_days_from_ce()) * MINUTES_PER_DAY;
    let instant = local_midnight - i64::from(offset.minutes);

    let utc_midnight = instant.div_euclid(MINUTES_PER_DAY) * MINUTES_PER_DAY;
    let current = utc_midnight - instant;
    Some((current, current + MINUTES_PER_DAY))
}
