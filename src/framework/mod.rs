//! Generic entity contract for validated records.
//!
//! This module provides the building blocks for driving records through
//! create / update / action hooks with structured logging around every call.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that record types implement
//! - [`create`], [`update`], [`act`] - Traced dispatch into the hooks

pub mod core;

// Re-export core types for convenience
pub use core::*;
