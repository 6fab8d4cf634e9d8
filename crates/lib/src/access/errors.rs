//! Error types for single-segment access.
//!
//! This module defines the structured errors raised when a segment cannot be read from or
//! written to a container: unknown record fields, containers of the wrong shape, writes that
//! cannot reach their target, and values that do not fit a field's declared type.

use thiserror::Error;

/// Structured error types for container access.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The root of a write was null
    #[error("Write target may not be null")]
    NilTarget,

    /// A record has no field with this name
    #[error("Field not found: {field}")]
    FieldNotFound { field: String },

    /// A segment was applied to a value that cannot hold children
    #[error("Cannot access '{segment}' on a {kind} value")]
    UnsupportedContainer { segment: String, kind: String },

    /// A write had to descend through a record field that is only available as a copy
    #[error("Field '{field}' is not addressable for writing")]
    NotAddressable { field: String },

    /// A value could not be assigned to a record field
    #[error("Type mismatch for field '{field}': expected {expected}, found {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },
}

impl AccessError {
    /// Check if this error indicates a missing field
    pub fn is_not_found(&self) -> bool {
        matches!(self, AccessError::FieldNotFound { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            AccessError::TypeMismatch { .. } | AccessError::UnsupportedContainer { .. }
        )
    }

    /// Check if this error rejected a write before anything was assigned
    pub fn is_write_rejected(&self) -> bool {
        matches!(
            self,
            AccessError::NilTarget
                | AccessError::NotAddressable { .. }
                | AccessError::TypeMismatch { .. }
        )
    }

    /// Get the field name if this is a field-related error
    pub fn field(&self) -> Option<&str> {
        match self {
            AccessError::FieldNotFound { field }
            | AccessError::NotAddressable { field }
            | AccessError::TypeMismatch { field, .. } => Some(field),
            _ => None,
        }
    }
}

// Conversion from AccessError to the main Error type
impl From<AccessError> for crate::Error {
    fn from(err: AccessError) -> Self {
        crate::Error::Access(err)
    }
}
