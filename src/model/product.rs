use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::product::ProductError;
use crate::validation::{amount, count, format_float, quoted, required_text, ValidationError, Value};

/// Represents a product in the inventory.
///
/// # Entity
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// so it can be driven through [`framework::act`](crate::framework::act).
///
/// See [`impl Entity for Product`](#impl-Entity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`](crate::model::ProductCreate))
/// - Update parameters ([`ProductUpdate`](crate::model::ProductUpdate))
/// - Custom actions ([`ProductAction`](crate::product::ProductAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: f64,
    quantity: u64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `name` - Product name, must not be empty
    /// * `price` - Unit price, any number `>= 0`
    /// * `quantity` - Available stock, an integer `>= 0`
    pub fn new(
        name: impl Into<Value>,
        price: impl Into<Value>,
        quantity: impl Into<Value>,
    ) -> Result<Self, ValidationError> {
        let name = required_text("name", name)?;
        let price = amount("price", price)?;
        let quantity = count("quantity", quantity)?;
        Ok(Self {
            name,
            price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn set_price(&mut self, price: impl Into<Value>) -> Result<(), ValidationError> {
        self.price = amount("price", price)?;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: impl Into<Value>) -> Result<(), ValidationError> {
        self.quantity = count("quantity", quantity)?;
        Ok(())
    }

    /// Removes `amount` units from stock.
    ///
    /// # Errors
    /// [`ProductError::InsufficientStock`] if `amount` exceeds the stock.
    pub fn sell(&mut self, amount: impl Into<Value>) -> Result<(), ProductError> {
        let amount = count("quantity", amount)?;
        if amount > self.quantity {
            return Err(ProductError::InsufficientStock {
                requested: amount,
                available: self.quantity,
            });
        }
        self.quantity -= amount;
        Ok(())
    }

    /// Adds `amount` units to stock.
    pub fn restock(&mut self, amount: impl Into<Value>) -> Result<(), ProductError> {
        let amount = count("quantity", amount)?;
        self.quantity = self
            .quantity
            .checked_add(amount)
            .ok_or_else(|| ValidationError::out_of_range("quantity", "overflows stock counter"))?;
        Ok(())
    }

    /// Value of the stock on hand: `price * quantity`.
    pub fn total_cost(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product(name={}, price={}, quantity={})",
            quoted(&self.name),
            format_float(self.price),
            self.quantity
        )
    }
}

/// DTOs for Product creation and updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: Value,
    pub price: Value,
    pub quantity: Value,
}

// DTOs for Product updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<Value>,
    pub quantity: Option<Value>,
}
