//! XSD built-in datatypes used by MDTO records
//!
//! A small registry mapping XML Schema type names to their literal checks,
//! so callers (the record layer, the CLI) can validate by name and turn a
//! rejection into an error that names the expected datatype.

use crate::error::{Error, Result, ValidationError};
use crate::validators::{
    is_valid_any_uri_literal, is_valid_date_literal, is_valid_date_time_literal,
    is_valid_duration_literal, is_valid_gyear_literal, is_valid_gyear_month_literal,
    is_valid_language_literal,
};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

// =============================================================================
// XSD Namespace Constants
// =============================================================================

/// XSD 1.0 Namespace
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// XSD dateTime type name
pub const XSD_DATETIME: &str = "dateTime";
/// XSD date type name
pub const XSD_DATE: &str = "date";
/// XSD duration type name
pub const XSD_DURATION: &str = "duration";
/// XSD gYear type name
pub const XSD_GYEAR: &str = "gYear";
/// XSD gYearMonth type name
pub const XSD_GYEAR_MONTH: &str = "gYearMonth";
/// XSD language type name
pub const XSD_LANGUAGE: &str = "language";
/// XSD anyURI type name
pub const XSD_ANY_URI: &str = "anyURI";

// =============================================================================
// Built-in Type Definition
// =============================================================================

/// Category of XSD type
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    /// Primitive type of XML Schema Part 2
    Primitive,
    /// Derived type (derived from another type)
    Derived,
}

/// Definition of a built-in XSD type
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuiltinType {
    /// Type name (local name without namespace)
    pub name: &'static str,
    /// Type category
    pub category: TypeCategory,
    #[serde(skip)]
    validator: fn(&str) -> bool,
}

impl BuiltinType {
    /// Check a literal against this type
    pub fn is_valid(&self, literal: &str) -> bool {
        (self.validator)(literal)
    }

    /// Check a literal, returning a descriptive error on rejection
    pub fn validate(&self, literal: &str) -> Result<()> {
        if self.is_valid(literal) {
            Ok(())
        } else {
            Err(Error::Validation(ValidationError::nonconforming(
                literal,
                self.prefixed_name(),
            )))
        }
    }

    /// `xsd:`-prefixed type name, as used in messages
    pub fn prefixed_name(&self) -> String {
        format!("xsd:{}", self.name)
    }

    /// Check if this type is a date/time type
    pub fn is_temporal(&self) -> bool {
        matches!(
            self.name,
            XSD_DATETIME | XSD_DATE | XSD_DURATION | XSD_GYEAR | XSD_GYEAR_MONTH
        )
    }
}

fn gyear_unbounded(literal: &str) -> bool {
    is_valid_gyear_literal(literal, None, None)
}

fn gyear_month_unbounded(literal: &str) -> bool {
    is_valid_gyear_month_literal(literal, None, None)
}

// =============================================================================
// Built-in Type Registry
// =============================================================================

fn entry(
    name: &'static str,
    category: TypeCategory,
    validator: fn(&str) -> bool,
) -> (&'static str, BuiltinType) {
    (
        name,
        BuiltinType {
            name,
            category,
            validator,
        },
    )
}

static BUILTIN_TYPES: Lazy<IndexMap<&'static str, BuiltinType>> = Lazy::new(|| {
    IndexMap::from([
        entry(XSD_DATETIME, TypeCategory::Primitive, is_valid_date_time_literal),
        entry(XSD_DATE, TypeCategory::Primitive, is_valid_date_literal),
        entry(XSD_DURATION, TypeCategory::Primitive, is_valid_duration_literal),
        entry(XSD_GYEAR, TypeCategory::Primitive, gyear_unbounded),
        entry(XSD_GYEAR_MONTH, TypeCategory::Primitive, gyear_month_unbounded),
        entry(XSD_LANGUAGE, TypeCategory::Derived, is_valid_language_literal),
        entry(XSD_ANY_URI, TypeCategory::Primitive, is_valid_any_uri_literal),
    ])
});

/// Get a built-in type by name; an `xsd:` prefix is accepted
pub fn get_builtin_type(name: &str) -> Option<&'static BuiltinType> {
    let local = name.strip_prefix("xsd:").unwrap_or(name);
    BUILTIN_TYPES.get(local)
}

/// All registered built-in types, in registration order
pub fn builtin_types() -> impl Iterator<Item = &'static BuiltinType> {
    BUILTIN_TYPES.values()
}

/// Check a literal against a built-in type by name
pub fn is_valid_builtin(type_name: &str, literal: &str) -> Result<bool> {
    match get_builtin_type(type_name) {
        Some(builtin) => Ok(builtin.is_valid(literal)),
        None => Err(Error::Type(format!("Unknown built-in type: {}", type_name))),
    }
}

/// Validate a literal against a built-in type by name
pub fn validate_builtin(type_name: &str, literal: &str) -> Result<()> {
    match get_builtin_type(type_name) {
        Some(builtin) => builtin.validate(literal),
        None => Err(Error::Type(format!("Unknown built-in type: {}", type_name))),
    }
}

/// Whether `literal` conforms to at least one of the named types
///
/// Unknown names never match.
pub fn matches_any(type_names: &[&str], literal: &str) -> bool {
    type_names
        .iter()
        .filter_map(|name| get_builtin_type(name))
        .any(|builtin| builtin.is_valid(literal))
}

/// Human-readable union of type names, e.g. `xsd:gYear | xsd:date`
pub fn describe_union(type_names: &[&str]) -> String {
    type_names
        .iter()
        .map(|&name| format!("xsd:{}", name.strip_prefix("xsd:").unwrap_or(name)))
        .collect::<Vec<_>>()
        .join(" | ")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_types() {
        assert!(validate_builtin(XSD_DATETIME, "2024-01-15T10:30:00").is_ok());
        assert!(validate_builtin(XSD_DATETIME, "2024-01-15T10:30:00Z").is_ok());
        assert!(validate_builtin(XSD_DATETIME, "2024-01-15T10:30:00+05:30").is_ok());
        assert!(validate_builtin(XSD_DATETIME, "invalid").is_err());

        assert!(validate_builtin(XSD_DATE, "2024-01-15").is_ok());
        assert!(validate_builtin(XSD_DATE, "2024-01-15Z").is_ok());
        assert!(validate_builtin(XSD_DATE, "invalid").is_err());

        assert!(validate_builtin(XSD_DURATION, "P1Y2M3DT4H5M6S").is_ok());
        assert!(validate_builtin(XSD_DURATION, "PT1H").is_ok());
        assert!(validate_builtin(XSD_DURATION, "P").is_err());
    }

    #[test]
    fn test_prefixed_lookup() {
        assert_eq!(get_builtin_type("xsd:date").unwrap().name, XSD_DATE);
        assert!(get_builtin_type("xsd:unknownType").is_none());
        assert!(get_builtin_type("integer").is_none());
    }

    #[test]
    fn test_unknown_type() {
        let err = is_valid_builtin("unknownType", "x").unwrap_err();
        assert!(matches!(err, Error::Type(_)));
        assert!(validate_builtin("unknownType", "x").is_err());
    }

    #[test]
    fn test_validation_error_names_datatype() {
        match validate_builtin(XSD_DURATION, "P-1347M") {
            Err(Error::Validation(err)) => {
                assert_eq!(err.datatype.as_deref(), Some("xsd:duration"));
                assert_eq!(err.value.as_deref(), Some("P-1347M"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_matches_any() {
        let union = [XSD_GYEAR, XSD_GYEAR_MONTH, XSD_DATE];
        assert!(matches_any(&union, "2025"));
        assert!(matches_any(&union, "2025-10"));
        assert!(matches_any(&union, "2025-10-22"));
        assert!(!matches_any(&union, "2025-10-22T00:00:00"));
        assert!(!matches_any(&["nope"], "2025"));
        assert_eq!(describe_union(&union), "xsd:gYear | xsd:gYearMonth | xsd:date");
    }

    #[test]
    fn test_registry_order_and_categories() {
        let names: Vec<_> = builtin_types().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                XSD_DATETIME,
                XSD_DATE,
                XSD_DURATION,
                XSD_GYEAR,
                XSD_GYEAR_MONTH,
                XSD_LANGUAGE,
                XSD_ANY_URI
            ]
        );
        assert_eq!(get_builtin_type(XSD_LANGUAGE).unwrap().category, TypeCategory::Derived);
        assert!(get_builtin_type(XSD_GYEAR).unwrap().is_temporal());
        assert!(!get_builtin_type(XSD_ANY_URI).unwrap().is_temporal());
    }
}
