//! Person- and Resident-specific record logic.
//!
//! Both report plain [`ValidationError`](crate::validation::ValidationError)s;
//! none of their operations can run out of a resource.

mod actions;
pub mod entity;

pub use actions::*;
