//! Failure taxonomy shared by every component.

use thiserror::Error;

use super::Value;

/// Broad category of a failure, independent of which type raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The argument was not of a permitted kind.
    Type,
    /// The argument had the right kind but an out-of-domain value.
    Range,
    /// A withdrawal or sale asked for more than is available.
    InsufficientResource,
}

impl FailureKind {
    /// `InsufficientResource` is a specialised range failure.
    pub fn is_range(self) -> bool {
        matches!(self, FailureKind::Range | FailureKind::InsufficientResource)
    }
}

/// Errors raised while validating a single argument.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// The argument's kind is not among the permitted kinds for the field.
    #[error("{field} must be {expected}, got {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The argument's kind is right but its value lies outside the field's domain.
    #[error("{field} {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

impl ValidationError {
    pub fn wrong_type(field: &'static str, expected: &'static str, found: &Value) -> Self {
        ValidationError::WrongType {
            field,
            expected,
            found: found.kind(),
        }
    }

    pub fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::OutOfRange {
            field,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ValidationError::WrongType { .. } => FailureKind::Type,
            ValidationError::OutOfRange { .. } => FailureKind::Range,
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::WrongType { field, .. } | ValidationError::OutOfRange { field, .. } => {
                field
            }
        }
    }
}
