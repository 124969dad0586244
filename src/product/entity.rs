//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`Entity`] trait implementation
//! that lets [`Product`] be driven through [`crate::framework::act`].
//!
//! Includes support for custom actions like stock checking, sales and restocking.

use super::actions::{ProductAction, ProductActionResult};
use super::ProductError;
use crate::framework::Entity;
use crate::model::{Product, ProductCreate, ProductUpdate};

impl Entity for Product {
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = ProductError;

    /// Creates a new Product from creation parameters.
    fn from_create_params(params: ProductCreate) -> Result<Self, ProductError> {
        Ok(Self::new(params.name, params.price, params.quantity)?)
    }

    /// Handles updates to the Product entity.
    ///
    /// Both fields are validated before either is written.
    ///
    /// # Fields Updated
    /// - `price`: Product price
    /// - `quantity`: Available stock quantity
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), ProductError> {
        let mut next = self.clone();
        if let Some(price) = update.price {
            next.set_price(price)?;
        }
        if let Some(quantity) = update.quantity {
            next.set_quantity(quantity)?;
        }
        *self = next;
        Ok(())
    }

    /// Handles custom actions for the Product entity.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `Sell`: Decrements stock if available, returns what is left
    /// - `Restock`: Increments stock, returns the new level
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity())),
            ProductAction::Sell(amount) => {
                self.sell(amount)?;
                Ok(ProductActionResult::Sell(self.quantity()))
            }
            ProductAction::Restock(amount) => {
                self.restock(amount)?;
                Ok(ProductActionResult::Restock(self.quantity()))
            }
        }
    }
}
