//! `xsd:duration` literal validation
//!
//! Grammar: `[-]P[nY][nM][nD][T[nH][nM][n[.n]S]]` with at least one
//! component, and at least one time component after `T`. The sign belongs to
//! the whole literal. Magnitudes are unbounded digit strings and are never
//! converted to numbers; only the seconds component may carry a fraction,
//! with digits on both sides of the `.`.

use once_cell::sync::Lazy;
use regex::Regex;

static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(-)?P(?:([0-9]+)Y)?(?:([0-9]+)M)?(?:([0-9]+)D)?(?:(T)(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+(?:\.[0-9]+)?)S)?)?$",
    )
    .unwrap()
});

/// Components of a duration literal, as written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedDuration<'a> {
    /// Leading `-`
    pub negative: bool,
    /// `nY`
    pub years: Option<&'a str>,
    /// `nM` before `T`
    pub months: Option<&'a str>,
    /// `nD`
    pub days: Option<&'a str>,
    /// `T` present
    pub time_designator: bool,
    /// `nH`
    pub hours: Option<&'a str>,
    /// `nM` after `T`
    pub minutes: Option<&'a str>,
    /// `n[.n]S`
    pub seconds: Option<&'a str>,
}

impl<'a> ParsedDuration<'a> {
    /// Match the grammar shape, `None` if the literal does not fit it
    ///
    /// The result may still violate the component-presence rules; see
    /// [`ParsedDuration::is_well_formed`].
    pub fn parse(literal: &'a str) -> Option<Self> {
        let caps = DURATION.captures(literal)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str());

        Some(Self {
            negative: group(1).is_some(),
            years: group(2),
            months: group(3),
            days: group(4),
            time_designator: group(5).is_some(),
            hours: group(6),
            minutes: group(7),
            seconds: group(8),
        })
    }

    fn has_date_component(&self) -> bool {
        self.years.is_some() || self.months.is_some() || self.days.is_some()
    }

    fn has_time_component(&self) -> bool {
        self.hours.is_some() || self.minutes.is_some() || self.seconds.is_some()
    }

    /// At least one component, and `T` never dangles
    pub fn is_well_formed(&self) -> bool {
        if self.time_designator && !self.has_time_component() {
            return false;
        }
        self.has_date_component() || self.has_time_component()
    }
}

/// Check whether `literal` is a valid `xsd:duration`
///
/// ```
/// use mdto_xsd::is_valid_duration_literal;
///
/// assert!(is_valid_duration_literal("P1Y2M3DT10H30M"));
/// assert!(is_valid_duration_literal("-P120D"));
/// assert!(!is_valid_duration_literal("P1Y2MT"));
/// ```
pub fn is_valid_duration_literal(literal: &str) -> bool {
    ParsedDuration::parse(literal).is_some_and(|parsed| parsed.is_well_formed())
}
