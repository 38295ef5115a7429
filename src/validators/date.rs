//! `xsd:date` literal validation (XML Schema 1.0, §3.2.9)

use crate::validators::lexical::{ParsedTemporal, RawLexicalGroups};
use crate::validators::timezone::is_recoverable;

/// Check whether `literal` is a valid `xsd:date`
///
/// Same year, month and day rules as [`is_valid_date_time_literal`], no time
/// part. Without a timezone the calendar check is sufficient. With `Z` the
/// literal is accepted outright; any other offset must be within `±14:00`
/// (only `:00` at 14) and must denote a recoverable UTC day, see
/// [`is_recoverable`].
///
/// [`is_valid_date_time_literal`]: crate::validators::is_valid_date_time_literal
///
/// ```
/// use mdto_xsd::is_valid_date_literal;
///
/// assert!(is_valid_date_literal("2002-10-10+13:00"));
/// assert!(is_valid_date_literal("2002-10-09-11:00"));
/// assert!(!is_valid_date_literal("2025-10-22+14:30"));
/// ```
pub fn is_valid_date_literal(literal: &str) -> bool {
    let groups = match RawLexicalGroups::split_date(literal) {
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
    if !parsed.is_valid_calendar_date() {
        return false;
    }

    match (groups.timezone, parsed.timezone) {
        (None, _) | (Some("Z"), _) => true,
        (Some(_), Some(offset)) => is_recoverable(parsed.year, parsed.month, parsed.day, offset),
        (Some(_), None) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_timezone() {
        assert!(is_valid_date_literal("2025-10-22"));
        assert!(is_valid_date_literal("-0001-01-01"));
        assert!(!is_valid_date_literal("2025-13-01"));
        assert!(!is_valid_date_literal("2025-02-30"));
    }

    #[test]
    fn test_year_rules_match_date_time() {
        assert!(!is_valid_date_literal("0000-01-01"));
        assert!(!is_valid_date_literal("+2020-01-01"));
        assert!(!is_valid_date_literal("01234-01-01"));
        assert!(is_valid_date_literal("12345-01-01"));
        assert!(!is_valid_date_literal("99999999999999999999-01-01"));
    }

    #[test]
    fn test_timezones() {
        assert!(is_valid_date_literal("2025-10-22Z"));
        assert!(is_valid_date_literal("2025-10-22+12:00"));
        assert!(is_valid_date_literal("2025-10-22-11:59"));
        assert!(is_valid_date_literal("2025-10-22+14:00"));
        assert!(!is_valid_date_literal("2025-10-22+14:30"));
        assert!(!is_valid_date_literal("2025-01-01+05:60"));
    }

    #[test]
    fn test_supported_year_edges_with_timezone() {
        // The first and last supported days validate with or without a timezone
        let first = format!("{}-01-01", crate::calendar::min_year());
        let last = format!("{}-12-31", crate::calendar::max_year());
        for date in [&first, &last] {
            assert!(is_valid_date_literal(date), "{}", date);
            for offset in ["Z", "+01:00", "+12:00", "-12:00", "+14:00", "-14:00", "-11:59"] {
                let literal = format!("{}{}", date, offset);
                assert!(is_valid_date_literal(&literal), "{} should be valid", literal);
            }
        }

        assert!(!is_valid_date_literal(&format!(
            "{}-01-01",
            crate::calendar::max_year() + 1
        )));
        assert!(!is_valid_date_literal(&format!(
            "{}-12-31+14:00",
            crate::calendar::min_year() - 1
        )));
    }
}
