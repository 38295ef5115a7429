//! Lexical decomposition of date and dateTime literals
//!
//! Matching a literal against its grammar only splits it into raw groups.
//! Nothing in [`RawLexicalGroups`] has been judged yet; the numeric view
//! [`ParsedTemporal`] is derived from it afterwards and may still fail (a
//! year that overflows, a timezone out of bounds) before any calendar rule
//! is consulted.

use crate::calendar;
use crate::validators::timezone::TimezoneOffset;
use once_cell::sync::Lazy;
use regex::Regex;

// `[0-9]` rather than `\d`: the regex crate treats `\d` as any Unicode digit.

/// `[-]YYYY...-MM-DDThh:mm:ss[.fraction][timezone]`
static DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(-)?([0-9]{4,})-([0-9]{2})-([0-9]{2})T([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]+))?(Z|[+-][0-9]{2}:[0-9]{2})?$",
    )
    .unwrap()
});

/// `[-]YYYY...-MM-DD[timezone]`
static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-)?([0-9]{4,})-([0-9]{2})-([0-9]{2})(Z|[+-][0-9]{2}:[0-9]{2})?$").unwrap()
});

/// Raw time-of-day groups of a dateTime literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTimeGroups<'a> {
    /// Two hour digits
    pub hour: &'a str,
    /// Two minute digits
    pub minute: &'a str,
    /// Two second digits
    pub second: &'a str,
    /// Fraction digits after the `.`, if any
    pub fraction: Option<&'a str>,
}

/// String fragments of a date or dateTime literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLexicalGroups<'a> {
    /// Leading `-` present
    pub negative: bool,
    /// Year digits, without sign
    pub year: &'a str,
    /// Two month digits
    pub month: &'a str,
    /// Two day digits
    pub day: &'a str,
    /// Time part (dateTime only)
    pub time: Option<RawTimeGroups<'a>>,
    /// `Z` or `±hh:mm`
    pub timezone: Option<&'a str>,
}

impl<'a> RawLexicalGroups<'a> {
    /// Split a dateTime literal, `None` if it does not have the dateTime shape
    pub fn split_date_time(literal: &'a str) -> Option<Self> {
        let caps = DATE_TIME.captures(literal)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());

        Some(Self {
            negative: group(1).is_some(),
            year: group(2)?,
            month: group(3)?,
            day: group(4)?,
            time: Some(RawTimeGroups {
                hour: group(5)?,
                minute: group(6)?,
                second: group(7)?,
                fraction: group(8),
            }),
            timezone: group(9),
        })
    }

    /// Split a date literal, `None` if it does not have the date shape
    pub fn split_date(literal: &'a str) -> Option<Self> {
        let caps = DATE.captures(literal)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());

        Some(Self {
            negative: group(1).is_some(),
            year: group(2)?,
            month: group(3)?,
            day: group(4)?,
            time: None,
            timezone: group(5),
        })
    }

    /// Year digit rules: never `0000`, and no leading zero beyond four digits
    pub fn has_valid_year_digits(&self) -> bool {
        if self.year == "0000" {
            return false;
        }
        !(self.year.len() > 4 && self.year.starts_with('0'))
    }

    /// Signed numeric year, `None` if it falls outside the supported window
    pub fn year_value(&self) -> Option<i64> {
        // i64 parsing fails on overflow, which is a rejection
        let magnitude: i64 = self.year.parse().ok()?;
        let year = if self.negative { -magnitude } else { magnitude };
        calendar::is_supported_year(year).then_some(year)
    }
}

/// Numeric time-of-day fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTime<'a> {
    /// Hour, `0..=99` before validation
    pub hour: u32,
    /// Minute
    pub minute: u32,
    /// Second, without fraction
    pub second: u32,
    /// Fraction digits, kept as written
    pub fraction: Option<&'a str>,
}

impl ParsedTime<'_> {
    /// Whether the fractional part is absent or made only of zeros
    pub fn has_zero_fraction(&self) -> bool {
        self.fraction.map_or(true, |digits| digits.bytes().all(|b| b == b'0'))
    }
}

/// Numeric view over [`RawLexicalGroups`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTemporal<'a> {
    /// Signed year
    pub year: i64,
    /// Month, not yet range-checked
    pub month: u32,
    /// Day, not yet range-checked
    pub day: u32,
    /// Time of day (dateTime only)
    pub time: Option<ParsedTime<'a>>,
    /// Timezone offset, lexically bounded
    pub timezone: Option<TimezoneOffset>,
}

impl<'a> ParsedTemporal<'a> {
    /// Derive the numeric view; fails on an unsupported year or timezone
    pub fn from_groups(groups: &RawLexicalGroups<'a>) -> Option<Self> {
        let time = match groups.time {
            Some(raw) => Some(ParsedTime {
                hour: raw.hour.parse().ok()?,
                minute: raw.minute.parse().ok()?,
                second: raw.second.parse().ok()?,
                fraction: raw.fraction,
            }),
            None => None,
        };
        let timezone = match groups.timezone {
            Some(token) => Some(TimezoneOffset::parse(token)?),
            None => None,
        };

        Some(Self {
            year: groups.year_value()?,
            month: groups.month.parse().ok()?,
            day: groups.day.parse().ok()?,
            time,
            timezone,
        })
    }

    /// Month in range and day valid for that month and year
    pub fn is_valid_calendar_date(&self) -> bool {
        calendar::is_valid_month(self.month) && calendar::is_valid_day(self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_date_time() {
        let groups = RawLexicalGroups::split_date_time("-2025-10-22T07:15:30.123+01:00").unwrap();
        assert!(groups.negative);
        assert_eq!(groups.year, "2025");
        assert_eq!(groups.month, "10");
        assert_eq!(groups.day, "22");
        assert_eq!(
            groups.time,
            Some(RawTimeGroups {
                hour: "07",
                minute: "15",
                second: "30",
                fraction: Some("123"),
            })
        );
        assert_eq!(groups.timezone, Some("+01:00"));
    }

    #[test]
    fn test_split_rejects_shape() {
        assert!(RawLexicalGroups::split_date_time("2025-1-01T00:00:00Z").is_none());
        assert!(RawLexicalGroups::split_date_time("2025-01-01 00:00:00Z").is_none());
        assert!(RawLexicalGroups::split_date_time("+2020-01-01T00:00:00Z").is_none());
        assert!(RawLexicalGroups::split_date_time("2025-01-01T00:00:00.Z").is_none());
        assert!(RawLexicalGroups::split_date("2025-01-01T00:00:00").is_none());
        assert!(RawLexicalGroups::split_date("2025-01-01+5:00").is_none());
        // Non-ASCII digits never match
        assert!(RawLexicalGroups::split_date("٢٠٢٥-01-01").is_none());
    }

    #[test]
    fn test_split_does_not_judge() {
        let groups = RawLexicalGroups::split_date("0000-99-99+99:99").unwrap();
        assert_eq!(groups.month, "99");
        assert_eq!(groups.timezone, Some("+99:99"));
        assert!(!groups.has_valid_year_digits());
    }

    #[test]
    fn test_year_digits() {
        let year = |y: &'static str| RawLexicalGroups {
            negative: false,
            year: y,
            month: "01",
            day: "01",
            time: None,
            timezone: None,
        };
        assert!(year("2025").has_valid_year_digits());
        assert!(year("0001").has_valid_year_digits());
        assert!(year("12345").has_valid_year_digits());
        assert!(!year("0000").has_valid_year_digits());
        assert!(!year("01234").has_valid_year_digits());

        assert_eq!(year("12345").year_value(), Some(12345));
        assert_eq!(year("99999999999999999999999").year_value(), None);
    }

    #[test]
    fn test_parsed_temporal() {
        let groups = RawLexicalGroups::split_date("-0001-02-29Z").unwrap();
        let parsed = ParsedTemporal::from_groups(&groups).unwrap();
        assert_eq!(parsed.year, -1);
        assert_eq!(parsed.timezone, Some(TimezoneOffset::UTC));
        assert!(!parsed.is_valid_calendar_date());
    }

    #[test]
    fn test_zero_fraction() {
        let time = |fraction| ParsedTime {
            hour: 0,
            minute: 0,
            second: 0,
            fraction,
        };
        assert!(time(None).has_zero_fraction());
        assert!(time(Some("000")).has_zero_fraction());
        assert!(!time(Some("001")).has_zero_fraction());
    }
}
