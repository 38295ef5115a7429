//! Property-based tests for the temporal validators

use mdto_xsd::calendar::is_leap_year;
use mdto_xsd::{is_valid_date_literal, is_valid_date_time_literal, is_valid_duration_literal};
use proptest::prelude::*;

fn max_day(year: i64, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

proptest! {
    /// The last day of every month is accepted and the day after it rejected
    #[test]
    fn prop_month_length(year in 1u32..=9999, month in 1u32..=12) {
        let last = max_day(i64::from(year), month);

        let valid = format!("{:04}-{:02}-{:02}T00:00:00Z", year, month, last);
        prop_assert!(is_valid_date_time_literal(&valid), "{} should be valid", valid);

        let overflow = format!("{:04}-{:02}-{:02}T00:00:00Z", year, month, last + 1);
        prop_assert!(!is_valid_date_time_literal(&overflow), "{} should be invalid", overflow);

        let date = format!("{:04}-{:02}-{:02}", year, month, last);
        prop_assert!(is_valid_date_literal(&date));
    }

    /// February 29th exists exactly in leap years
    #[test]
    fn prop_february_29(year in 1u32..=9999) {
        let literal = format!("{:04}-02-29T12:00:00", year);
        prop_assert_eq!(is_valid_date_time_literal(&literal), is_leap_year(i64::from(year)));
    }

    /// Every lexically legal offset keeps a date valid
    #[test]
    fn prop_date_offsets(
        year in 1u32..=9999,
        month in 1u32..=12,
        day in 1u32..=28,
        negative in any::<bool>(),
        hours in 0u32..=14,
        minutes in 0u32..=59,
    ) {
        let minutes = if hours == 14 { 0 } else { minutes };
        let sign = if negative { '-' } else { '+' };
        let literal = format!("{:04}-{:02}-{:02}{}{:02}:{:02}", year, month, day, sign, hours, minutes);
        prop_assert!(is_valid_date_literal(&literal), "{} should be valid", literal);
    }

    /// Any arrangement of duration components in order is accepted
    #[test]
    fn prop_duration_components(
        y in proptest::option::of(0u64..100_000),
        d in proptest::option::of(0u64..100_000),
        h in proptest::option::of(0u64..100_000),
        s in proptest::option::of(0u64..100_000),
    ) {
        prop_assume!(y.is_some() || d.is_some() || h.is_some() || s.is_some());
        let mut literal = String::from("P");
        if let Some(y) = y { literal.push_str(&format!("{}Y", y)); }
        if let Some(d) = d { literal.push_str(&format!("{}D", d)); }
        if h.is_some() || s.is_some() {
            literal.push('T');
            if let Some(h) = h { literal.push_str(&format!("{}H", h)); }
            if let Some(s) = s { literal.push_str(&format!("{}S", s)); }
        }
        prop_assert!(is_valid_duration_literal(&literal), "{} should be valid", literal);
    }

    /// Arbitrary input never panics and always gets the same verdict
    #[test]
    fn prop_deterministic(input in "\\PC{0,40}") {
        prop_assert_eq!(is_valid_date_time_literal(&input), is_valid_date_time_literal(&input));
        prop_assert_eq!(is_valid_date_literal(&input), is_valid_date_literal(&input));
        prop_assert_eq!(is_valid_duration_literal(&input), is_valid_duration_literal(&input));
    }

    /// Temporal-looking noise never panics
    #[test]
    fn prop_no_panic_on_shaped_noise(input in "-?[0-9]{1,25}-[0-9]{2}-[0-9]{2}(T[0-9]{2}:[0-9]{2}:[0-9]{2})?([+-][0-9]{2}:[0-9]{2}|Z)?") {
        let _ = is_valid_date_time_literal(&input);
        let _ = is_valid_date_literal(&input);
    }
}

#[test]
fn test_concurrent_calls_agree() {
    let literals = [
        "2002-10-10+13:00",
        "2025-02-29",
        "2000-01-01T24:00:00Z",
        "P1Y2MT",
        "-0001-01-01T00:00:00Z",
    ];
    let expected: Vec<bool> = literals
        .iter()
        .map(|l| is_valid_date_literal(l) || is_valid_date_time_literal(l) || is_valid_duration_literal(l))
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(move || {
                literals
                    .iter()
                    .map(|l| {
                        is_valid_date_literal(l)
                            || is_valid_date_time_literal(l)
                            || is_valid_duration_literal(l)
                    })
                    .collect::<Vec<bool>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
