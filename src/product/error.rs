//! Error types for Product operations.

use thiserror::Error;

use crate::validation::{FailureKind, ValidationError};

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// An argument had the wrong kind or an out-of-domain value.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u64, available: u64 },
}

impl ProductError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ProductError::Invalid(e) => e.kind(),
            ProductError::InsufficientStock { .. } => FailureKind::InsufficientResource,
        }
    }
}
