//! Error types for BankAccount operations.

use thiserror::Error;

use crate::validation::{FailureKind, ValidationError};

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// An argument had the wrong kind or an out-of-domain value.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The withdrawal is larger than the balance.
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },
}

impl AccountError {
    pub fn kind(&self) -> FailureKind {
        match self {
            AccountError::Invalid(e) => e.kind(),
            AccountError::InsufficientFunds { .. } => FailureKind::InsufficientResource,
        }
    }
}
