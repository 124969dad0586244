//! # Core Entity Contract
//!
//! This module defines the generic building blocks every managed record shares.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all managed record types implement.
//! - [`create`], [`update`], [`act`]: Traced dispatch into the entity hooks.

use std::error::Error;
use std::fmt::Debug;
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that a validated record implements to be driven through [`create`],
/// [`update`] and [`act`].
///
/// # Architecture Note
/// Associated types tie each record to its own payloads: a `BankAccount` takes an
/// `AccountCreate`, and you can't accidentally hand it a `ProductCreate`.
///
/// Every hook must validate its whole payload before touching `self`. A failed
/// call leaves the record exactly as it was.
pub trait Entity: Sized + Debug {
    /// The data required to create a new instance (DTO - Data Transfer Object).
    type CreateParams: Debug;

    /// The data required to update an existing instance.
    /// Use `()` if the record has no updatable fields.
    type UpdateParams: Debug;

    /// Enum representing record-specific operations (e.g., `Withdraw`).
    type Action: Debug;

    /// The result type returned by custom actions.
    type ActionResult: Debug;

    /// The error every hook reports.
    type Error: Error;

    /// Construct the full record from its payload.
    fn from_create_params(params: Self::CreateParams) -> Result<Self, Self::Error>;

    /// Called when an update request is received.
    fn on_update(&mut self, _update: Self::UpdateParams) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom record-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE TRACED DISPATCH
// =============================================================================

/// Extracts just the type name (e.g., "Product" instead of "oop_exercises::model::product::Product").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

/// Builds a record from its create payload.
pub fn create<T: Entity>(params: T::CreateParams) -> Result<T, T::Error> {
    let entity_type = entity_type::<T>();
    debug!(entity_type, ?params, "Create");
    match T::from_create_params(params) {
        Ok(item) => {
            info!(entity_type, "Created");
            Ok(item)
        }
        Err(e) => {
            warn!(entity_type, error = %e, "Create failed");
            Err(e)
        }
    }
}

/// Applies an update payload to an existing record.
pub fn update<T: Entity>(item: &mut T, update: T::UpdateParams) -> Result<(), T::Error> {
    let entity_type = entity_type::<T>();
    debug!(entity_type, ?update, "Update");
    let result = item.on_update(update);
    match &result {
        Ok(()) => info!(entity_type, "Updated"),
        Err(e) => warn!(entity_type, error = %e, "Update failed"),
    }
    result
}

/// Runs a custom action against a record.
pub fn act<T: Entity>(item: &mut T, action: T::Action) -> Result<T::ActionResult, T::Error> {
    let entity_type = entity_type::<T>();
    debug!(entity_type, ?action, "Action");
    let result = item.handle_action(action);
    match &result {
        Ok(outcome) => info!(entity_type, ?outcome, "Action ok"),
        Err(e) => warn!(entity_type, error = %e, "Action failed"),
    }
    result
}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================
