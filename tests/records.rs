//! MDTO record integration tests
//!
//! Records are loaded from the JSON fixtures in `tests/fixtures` and validated
//! as a whole.

use mdto_xsd::records::{
    BegripGegevens, BeperkingGebruikGegevens, ChecksumGegevens, IdentificatieGegevens,
    InformatieobjectType, ObjectType, TermijnGegevens, VerwijzingGegevens,
};
use mdto_xsd::{Error, Limits, MdtoObject, Validate};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    std::fs::read_to_string(&path).expect("Failed to read fixture")
}

fn begrip(label: &str, lijst: &str) -> BegripGegevens {
    BegripGegevens::new(label, VerwijzingGegevens::new(lijst))
}

// ============================================================================
// Fixtures
// ============================================================================

#[test]
fn test_valid_fixture() {
    let json = fixture("informatieobject_valid.json");
    Limits::default().check_record_size(json.len()).unwrap();

    let record = MdtoObject::from_json(&json).unwrap();
    assert!(record.validate().is_ok());

    let ObjectType::Informatieobject(object) = &record.object;
    assert_eq!(object.taal, vec!["nl", "en-GB"]);
    assert_eq!(object.dekking_in_tijd[0].dekking_in_tijd_begindatum, "2025-10");
}

#[test]
fn test_invalid_fixture_reports_every_field() {
    let record = MdtoObject::from_json(&fixture("informatieobject_invalid.json")).unwrap();
    let errors = record.validate().unwrap_err();

    assert_eq!(
        errors.fields(),
        vec![
            "informatieobject.archiefvormer",
            "informatieobject.taal[0]",
            "informatieobject.dekkingInTijd[0].dekkingInTijdBegindatum",
            "informatieobject.event[0].eventTijd",
            "informatieobject.bewaartermijn.termijnLooptijd",
            "informatieobject.beperkingGebruik[0].beperkingGebruikTermijn.termijnEinddatum",
        ]
    );

    let event = errors
        .iter()
        .find(|e| e.field.as_deref() == Some("informatieobject.event[0].eventTijd"))
        .unwrap();
    assert_eq!(event.value.as_deref(), Some("2025-10-22T24:00:01"));
    assert_eq!(
        event.datatype.as_deref(),
        Some("xsd:gYear | xsd:gYearMonth | xsd:date | xsd:dateTime")
    );
}

#[test]
fn test_errors_serialize_as_list() {
    let record = MdtoObject::from_json(&fixture("informatieobject_invalid.json")).unwrap();
    let errors = record.validate().unwrap_err();

    let json = serde_json::to_value(&errors).unwrap();
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), errors.len());
    assert_eq!(list[1]["field"], "informatieobject.taal[0]");
    assert_eq!(list[1]["value"], "Nederlands");
}

#[test]
fn test_malformed_json_is_an_error() {
    let err = MdtoObject::from_json("{\"informatieobject\": {}}").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_builder_round_trips_through_json() {
    let object = InformatieobjectType::builder("Jaarverslag 2024", begrip("Bewaren", "Waarderingslijst"))
        .identificatie(IdentificatieGegevens::new("JV-2024", "Provincie Utrecht"))
        .archiefvormer(VerwijzingGegevens::new("Provincie Utrecht"))
        .beperking_gebruik(
            BeperkingGebruikGegevens::new(begrip("Openbaar", "Openbaarheidslijst")).with_termijn(
                TermijnGegevens::new(None, None, Some("P5Y".into()), Some("2030".into())).unwrap(),
            ),
        )
        .taal("nl")
        .build()
        .unwrap();

    let mdto = MdtoObject::informatieobject(object);
    let json = serde_json::to_string_pretty(&mdto).unwrap();
    let parsed = MdtoObject::from_json(&json).unwrap();
    assert_eq!(parsed, mdto);
    assert!(parsed.validate().is_ok());
}

#[test]
fn test_constructor_errors_convert_to_crate_error() {
    let result: mdto_xsd::Result<ChecksumGegevens> = ChecksumGegevens::new(
        begrip("SHA-256", "Checksumalgoritmen"),
        "e3b0c442",
        "2025-10-22T07:15",
    )
    .map_err(Error::from);

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Validations(_)));
    assert!(err.to_string().contains("checksumDatum"));
}
