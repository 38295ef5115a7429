//! `xsd:gYear` and `xsd:gYearMonth` bound checks
//!
//! These accept the narrow forms used by MDTO records: a four-digit year and
//! a four-digit year with month, without sign or timezone. Optional
//! `earliest`/`latest` dates bound the accepted range.

use crate::calendar;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static GYEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{4})$").unwrap());

static GYEAR_MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})$").unwrap());

/// Check whether `literal` is a `CCYY` year within the optional bounds
///
/// Only the year of `earliest` and `latest` is compared.
pub fn is_valid_gyear_literal(
    literal: &str,
    earliest: Option<NaiveDate>,
    latest: Option<NaiveDate>,
) -> bool {
    let year: i32 = match GYEAR.captures(literal).and_then(|caps| caps[1].parse::<i32>().ok()) {
        Some(year) => year,
        None => return false,
    };

    if earliest.is_some_and(|earliest| year < earliest.year()) {
        return false;
    }
    !latest.is_some_and(|latest| year > latest.year())
}

/// Check whether `literal` is a `CCYY-MM` year-month within the optional bounds
///
/// The first day of the month is compared against `earliest` and `latest`.
pub fn is_valid_gyear_month_literal(
    literal: &str,
    earliest: Option<NaiveDate>,
    latest: Option<NaiveDate>,
) -> bool {
    let caps = match GYEAR_MONTH.captures(literal) {
        Some(caps) => caps,
        None => return false,
    };
    let (year, month): (i32, u32) = match (caps[1].parse::<i32>(), caps[2].parse::<u32>()) {
        (Ok(year), Ok(month)) => (year, month),
        _ => return false,
    };
    if !calendar::is_valid_month(month) {
        return false;
    }
    if earliest.is_none() && latest.is_none() {
        return true;
    }

    let first_day = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => return false,
    };
    if earliest.is_some_and(|earliest| first_day < earliest) {
        return false;
    }
    !latest.is_some_and(|latest| first_day > latest)
}
