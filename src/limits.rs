//! Limits applied before literals and records reach the validators
//!
//! The validators run in time linear in their input, so these limits only
//! bound what a caller is willing to feed them: the length of a single
//! literal and the size of a serialized record.

use crate::error::{Error, Result};

/// Input size limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum length of a single literal, in bytes
    pub max_literal_length: usize,

    /// Maximum size of a serialized record, in bytes
    pub max_record_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_literal_length: 4096,
            max_record_size: 16 * 1024 * 1024, // 16 MB
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_literal_length: 256,
            max_record_size: 1024 * 1024, // 1 MB
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_literal_length: 1024 * 1024,
            max_record_size: 1024 * 1024 * 1024, // 1 GB
        }
    }

    /// Check if a literal is within limits
    pub fn check_literal_length(&self, literal: &str) -> Result<()> {
        if literal.len() > self.max_literal_length {
            Err(Error::LimitExceeded(format!(
                "literal length {} exceeds maximum {}",
                literal.len(),
                self.max_literal_length
            )))
        } else {
            Ok(())
        }
    }

    /// Check if a serialized record is within limits
    pub fn check_record_size(&self, size: usize) -> Result<()> {
        if size > self.max_record_size {
            Err(Error::LimitExceeded(format!(
                "record size {} bytes exceeds maximum {} bytes",
                size, self.max_record_size
            )))
        } else {
            Ok(())
        }
    }
}
