//! Account-specific record logic: deposits, withdrawals and their errors.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
