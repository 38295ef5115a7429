//! # mdto-xsd
//!
//! XML Schema literal validation for MDTO metadata records.
//!
//! The core of the crate answers one question per datatype: does a string
//! conform to the lexical space of `xsd:dateTime`, `xsd:date` or
//! `xsd:duration`? Each validator is a pure function returning `bool`; it never
//! panics and never normalizes its input.
//!
//! Around that core sit the auxiliary `gYear`, `gYearMonth`, `language` and
//! `anyURI` checks, a registry that looks datatypes up by name, and the MDTO
//! record types whose string fields are guarded by the validators.
//!
//! ## Example
//!
//! ```rust
//! use mdto_xsd::{is_valid_date_literal, is_valid_date_time_literal, is_valid_duration_literal};
//!
//! assert!(is_valid_date_time_literal("2002-10-10T12:00:00-05:00"));
//! assert!(!is_valid_date_time_literal("2002-10-10T24:00:01"));
//!
//! assert!(is_valid_date_literal("2000-02-29"));
//! assert!(!is_valid_date_literal("1900-02-29"));
//!
//! assert!(is_valid_duration_literal("P1Y2M3DT10H30M"));
//! assert!(!is_valid_duration_literal("PT"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calendar;
pub mod error;
pub mod limits;
pub mod records;
pub mod validators;

// Re-exports for convenience
pub use error::{Error, Result, ValidationError, ValidationErrors};
pub use limits::Limits;
pub use records::{MdtoObject, Validate};
pub use validators::builtins::{get_builtin_type, is_valid_builtin, validate_builtin};
pub use validators::{
    is_valid_any_uri_literal, is_valid_date_literal, is_valid_date_time_literal,
    is_valid_duration_literal, is_valid_gyear_literal, is_valid_gyear_month_literal,
    is_valid_language_literal,
};

/// Version of the mdto-xsd library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// XML Schema namespace
pub const XSD_NAMESPACE: &str = validators::builtins::XSD_NAMESPACE;
