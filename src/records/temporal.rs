//! Records carrying date, dateTime and duration literals

use super::common::{BegripGegevens, VerwijzingGegevens};
use super::{check_literal, check_optional_literal, field_path, validated, Validate};
use crate::error::ValidationErrors;
use crate::validators::builtins::{XSD_DATE, XSD_DATETIME, XSD_DURATION, XSD_GYEAR, XSD_GYEAR_MONTH};
use serde::{Deserialize, Serialize};

/// `xsd:gYear | xsd:gYearMonth | xsd:date`
const PARTIAL_DATE: &[&str] = &[XSD_GYEAR, XSD_GYEAR_MONTH, XSD_DATE];

/// `xsd:gYear | xsd:gYearMonth | xsd:date | xsd:dateTime`
const PARTIAL_DATE_OR_DATE_TIME: &[&str] = &[XSD_GYEAR, XSD_GYEAR_MONTH, XSD_DATE, XSD_DATETIME];

// =============================================================================
// Checksum
// =============================================================================

/// A checksum computed over a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecksumGegevens {
    /// `checksumAlgoritme`, 1..1
    pub checksum_algoritme: BegripGegevens,
    /// `checksumWaarde`, 1..1
    pub checksum_waarde: String,
    /// `checksumDatum`, 1..1, `xsd:dateTime`
    pub checksum_datum: String,
}

impl ChecksumGegevens {
    /// Create a checksum record; `datum` must be an `xsd:dateTime`
    pub fn new(
        algoritme: BegripGegevens,
        waarde: impl Into<String>,
        datum: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        validated(Self {
            checksum_algoritme: algoritme,
            checksum_waarde: waarde.into(),
            checksum_datum: datum.into(),
        })
    }
}

impl Validate for ChecksumGegevens {
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        check_literal(
            errors,
            field_path(path, "checksumDatum"),
            &self.checksum_datum,
            &[XSD_DATETIME],
        );
    }
}

// =============================================================================
// Coverage in time
// =============================================================================

/// The moment or period an information object's content relates to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DekkingInTijdGegevens {
    /// `dekkingInTijdType`, 1..1
    pub dekking_in_tijd_type: BegripGegevens,
    /// `dekkingInTijdBegindatum`, 1..1, gYear | gYearMonth | date
    pub dekking_in_tijd_begindatum: String,
    /// `dekkingInTijdEinddatum`, 0..1, gYear | gYearMonth | date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dekking_in_tijd_einddatum: Option<String>,
}

impl DekkingInTijdGegevens {
    /// Create a coverage record from a begin and optional end date
    pub fn new(
        dekking_type: BegripGegevens,
        begindatum: impl Into<String>,
        einddatum: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        validated(Self {
            dekking_in_tijd_type: dekking_type,
            dekking_in_tijd_begindatum: begindatum.into(),
            dekking_in_tijd_einddatum: einddatum,
        })
    }
}

impl Validate for DekkingInTijdGegevens {
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        check_literal(
            errors,
            field_path(path, "dekkingInTijdBegindatum"),
            &self.dekking_in_tijd_begindatum,
            PARTIAL_DATE,
        );
        check_optional_literal(
            errors,
            field_path(path, "dekkingInTijdEinddatum"),
            self.dekking_in_tijd_einddatum.as_deref(),
            PARTIAL_DATE,
        );
    }
}

// =============================================================================
// Event
// =============================================================================

/// Something that happened to an information object or its metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventGegevens {
    /// `eventType`, 1..1
    pub event_type: BegripGegevens,
    /// `eventTijd`, 0..1, gYear | gYearMonth | date | dateTime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_tijd: Option<String>,
    /// `eventVerantwoordelijkeActor`, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_verantwoordelijke_actor: Option<VerwijzingGegevens>,
    /// `eventResultaat`, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_resultaat: Option<String>,
}

impl EventGegevens {
    /// Create an event record
    pub fn new(
        event_type: BegripGegevens,
        tijd: Option<String>,
        verantwoordelijke_actor: Option<VerwijzingGegevens>,
        resultaat: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        validated(Self {
            event_type,
            event_tijd: tijd,
            event_verantwoordelijke_actor: verantwoordelijke_actor,
            event_resultaat: resultaat,
        })
    }
}

impl Validate for EventGegevens {
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        check_optional_literal(
            errors,
            field_path(path, "eventTijd"),
            self.event_tijd.as_deref(),
            PARTIAL_DATE_OR_DATE_TIME,
        );
    }
}

// =============================================================================
// Retention term
// =============================================================================

/// A term: a trigger, a start date, a running time and an end date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermijnGegevens {
    /// `termijnTriggerStartLooptijd`, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termijn_trigger_start_looptijd: Option<BegripGegevens>,
    /// `termijnStartdatumLooptijd`, 0..1, `xsd:date`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termijn_startdatum_looptijd: Option<String>,
    /// `termijnLooptijd`, 0..1, `xsd:duration`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termijn_looptijd: Option<String>,
    /// `termijnEinddatum`, 0..1, gYear | gYearMonth | date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termijn_einddatum: Option<String>,
}

impl TermijnGegevens {
    /// Create a term record
    pub fn new(
        trigger_start_looptijd: Option<BegripGegevens>,
        startdatum_looptijd: Option<String>,
        looptijd: Option<String>,
        einddatum: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        validated(Self {
            termijn_trigger_start_looptijd: trigger_start_looptijd,
            termijn_startdatum_looptijd: startdatum_looptijd,
            termijn_looptijd: looptijd,
            termijn_einddatum: einddatum,
        })
    }
}

impl Validate for TermijnGegevens {
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        check_optional_literal(
            errors,
            field_path(path, "termijnStartdatumLooptijd"),
            self.termijn_startdatum_looptijd.as_deref(),
            &[XSD_DATE],
        );
        check_optional_literal(
            errors,
            field_path(path, "termijnLooptijd"),
            self.termijn_looptijd.as_deref(),
            &[XSD_DURATION],
        );
        check_optional_literal(
            errors,
            field_path(path, "termijnEinddatum"),
            self.termijn_einddatum.as_deref(),
            PARTIAL_DATE,
        );
    }
}

// =============================================================================
// Tests
// =============================================================================
