//! MDTO 1.0.1 metadata records
//!
//! Plain serde structures whose string fields are guarded by the XML Schema
//! literal validators. Constructors return every field error at once in a
//! [`ValidationErrors`] instead of stopping at the first; records obtained
//! through deserialization are checked with [`Validate::validate`].

mod common;
mod informatieobject;
mod temporal;

pub use common::{
    BegripGegevens, BetrokkeneGegevens, GerelateerdInformatieobjectGegevens,
    IdentificatieGegevens, VerwijzingGegevens,
};
pub use informatieobject::{
    BeperkingGebruikGegevens, InformatieobjectBuilder, InformatieobjectType, MdtoObject,
    ObjectType, RaadpleegLocatieGegevens,
};
pub use temporal::{ChecksumGegevens, DekkingInTijdGegevens, EventGegevens, TermijnGegevens};

use crate::error::{ValidationError, ValidationErrors};
use crate::validators::builtins::{describe_union, matches_any};

/// Field-level validation of a record and everything nested in it
pub trait Validate {
    /// Push an error for every invalid field below `path` into `errors`
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors);

    /// Validate the whole record, collecting every field error
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.validate_into("", &mut errors);
        errors.into_result(())
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        if let Some(inner) = self {
            inner.validate_into(path, errors);
        }
    }
}

/// Validate `record` and hand it back only if it has no field errors
pub(crate) fn validated<T: Validate>(record: T) -> Result<T, ValidationErrors> {
    record.validate().map(|()| record)
}

/// `parent.field`, or `field` at the root
pub(crate) fn field_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}

/// `parent.field[index]`
pub(crate) fn item_path(parent: &str, field: &str, index: usize) -> String {
    format!("{}[{}]", field_path(parent, field), index)
}

/// Check a literal against a union of XML Schema datatypes
pub(crate) fn check_literal(
    errors: &mut ValidationErrors,
    path: String,
    value: &str,
    datatypes: &[&str],
) {
    if matches_any(datatypes, value) {
        return;
    }
    let expected = describe_union(datatypes);
    tracing::debug!(field = %path, value, datatype = %expected, "field rejected");
    errors.push(ValidationError::nonconforming(value, expected).with_field(path));
}

/// Check an optional literal; absence is always valid
pub(crate) fn check_optional_literal(
    errors: &mut ValidationErrors,
    path: String,
    value: Option<&str>,
    datatypes: &[&str],
) {
    if let Some(value) = value {
        check_literal(errors, path, value, datatypes);
    }
}

/// Check a `1..unbounded` field
pub(crate) fn check_not_empty<T>(errors: &mut ValidationErrors, path: String, values: &[T]) {
    if values.is_empty() {
        tracing::debug!(field = %path, "required field is empty");
        errors.push(ValidationError::empty(path));
    }
}

/// Validate every item of a repeated nested field
pub(crate) fn validate_items<T: Validate>(
    errors: &mut ValidationErrors,
    parent: &str,
    field: &str,
    items: &[T],
) {
    for (index, item) in items.iter().enumerate() {
        item.validate_into(&item_path(parent, field, index), errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::builtins::{XSD_DATE, XSD_GYEAR};

    #[test]
    fn test_paths() {
        assert_eq!(field_path("", "naam"), "naam");
        assert_eq!(field_path("event[0]", "eventTijd"), "event[0].eventTijd");
        assert_eq!(item_path("", "taal", 2), "taal[2]");
        assert_eq!(item_path("termijn", "x", 0), "termijn.x[0]");
    }

    #[test]
    fn test_check_literal() {
        let mut errors = ValidationErrors::new();
        check_literal(&mut errors, "a".into(), "2025", &[XSD_GYEAR, XSD_DATE]);
        check_optional_literal(&mut errors, "b".into(), None, &[XSD_DATE]);
        assert!(errors.is_empty());

        check_literal(&mut errors, "c".into(), "2025-02-30", &[XSD_GYEAR, XSD_DATE]);
        let error = errors.iter().next().unwrap();
        assert_eq!(error.field.as_deref(), Some("c"));
        assert_eq!(error.datatype.as_deref(), Some("xsd:gYear | xsd:date"));
    }

    #[test]
    fn test_check_not_empty() {
        let mut errors = ValidationErrors::new();
        check_not_empty::<String>(&mut errors, "archiefvormer".into(), &[]);
        check_not_empty(&mut errors, "taal".into(), &["nl".to_string()]);
        assert_eq!(errors.fields(), vec!["archiefvormer"]);
    }
}
