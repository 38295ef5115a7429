//! Error types for mdto-xsd
//!
//! The literal validators themselves only answer `true`/`false`. The types in
//! this module are produced one layer up, by the datatype registry and by the
//! record constructors, where a rejected literal has to be reported together
//! with the field it came from and the datatype it was expected to match.

use std::fmt;
use thiserror::Error;

/// Result type alias using mdto-xsd Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for mdto-xsd operations
#[derive(Error, Debug)]
pub enum Error {
    /// A single literal or field failed validation
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// One or more fields of a record failed validation
    #[error("{0}")]
    Validations(#[from] ValidationErrors),

    /// Unknown datatype name
    #[error("type error: {0}")]
    Type(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A rejected value with enough context to tell the user what went wrong
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationError {
    /// Error message
    pub message: String,
    /// Path of the record field that failed, e.g. `event[0].eventTijd`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// The offending literal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// XML Schema datatype(s) the value was expected to conform to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    /// Additional explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
            value: None,
            datatype: None,
            reason: None,
        }
    }

    /// Error for a literal that does not conform to `datatype`
    pub fn nonconforming(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        let datatype = datatype.into();
        Self::new(format!("value does not conform to {}", datatype))
            .with_value(value)
            .with_datatype(datatype)
    }

    /// Error for a field with cardinality `1..unbounded` that was left empty
    pub fn empty(field: impl Into<String>) -> Self {
        Self::new("at least one value is required").with_field(field)
    }

    /// Set the field path
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Set the offending value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the expected datatype
    pub fn with_datatype(mut self, datatype: impl Into<String>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }

    /// Set the reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref field) = self.field {
            write!(f, "{}: ", field)?;
        }
        write!(f, "{}", self.message)?;

        if let Some(ref value) = self.value {
            write!(f, " (got {:?})", value)?;
        }

        if let Some(ref reason) = self.reason {
            write!(f, "; {}", reason)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Every field error collected while validating one record
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Whether no error was recorded
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over the recorded errors
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Field paths of the recorded errors, in order
    pub fn fields(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter_map(|e| e.field.as_deref())
            .collect()
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`
    pub fn into_result<T>(self, value: T) -> std::result::Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
