//! `xsd:dateTime` literal validation (XML Schema 1.0, §3.2.7)

use crate::validators::lexical::{ParsedTemporal, RawLexicalGroups};
use crate::validators::time_of_day::is_valid_time_of_day;

/// Check whether `literal` is a valid `xsd:dateTime`
///
/// Accepts `[-]YYYY-MM-DDThh:mm:ss[.fraction][Z|±hh:mm]` where the year has
/// at least four digits, is not `0000`, carries no `+` and no leading zero
/// beyond four digits; the day exists in the proleptic Gregorian calendar;
/// the time satisfies the leap-second and `24:00:00` rules; and the timezone
/// is within `±14:00`. Fractional seconds of any length are accepted as
/// written. Never panics; anything unrepresentable is rejected.
///
/// ```
/// use mdto_xsd::is_valid_date_time_literal;
///
/// assert!(is_valid_date_time_literal("2025-10-22T07:15:30.123Z"));
/// assert!(is_valid_date_time_literal("2000-01-01T24:00:00Z"));
/// assert!(!is_valid_date_time_literal("2025-02-29T00:00:00Z"));
/// ```
pub fn is_valid_date_time_literal(literal: &str) -> bool {
    let groups = match RawLexicalGroups::split_date_time(literal) {
        Some(groups) => groups,
        None => return false,
    };
    if !groups.has_valid_year_digits() {
        return false;
    }
    let parsed = match ParsedTemporal::from_groups(&groups) {
        Some(parsed) => parsed,
        None => return false,
    };

    parsed.is_valid_calendar_date() && parsed.time.as_ref().is_some_and(is_valid_time_of_day)
}
