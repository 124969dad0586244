//! Custom actions for Product records.
//!
//! This module defines the domain-specific operations (Actions) that can be performed
//! on a [`Product`](crate::model::Product), such as checking or moving stock.
//! These actions are handled by the [`Entity::handle_action`](crate::framework::Entity::handle_action) method.
//!
//! See [`impl Entity for Product`](crate::model::Product#impl-Entity-for-Product) for the implementation details.

use crate::validation::Value;

/// Custom actions for Product records.
///
/// These actions represent domain-specific operations that can be performed
/// on a product beyond creation and updates.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Checks the current stock level without modifying it.
    CheckStock,
    /// Sells a number of units.
    ///
    /// # Errors
    /// Will fail if the requested amount exceeds available stock.
    Sell(Value),
    /// Adds a number of units to stock.
    Restock(Value),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Result from CheckStock action - returns the current stock level
    CheckStock(u64),
    /// Result from Sell action - returns the remaining stock
    Sell(u64),
    /// Result from Restock action - returns the new stock level
    Restock(u64),
}
