//! Bank account record.
//!
//! The balance never goes below zero: withdrawals larger than the balance fail
//! with [`AccountError::InsufficientFunds`](crate::account::AccountError) and
//! leave the account as it was.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::account::AccountError;
use crate::validation::{amount, format_float, positive_amount, quoted, required_text, ValidationError, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    owner: String,
    balance: f64,
    currency: String,
}

impl BankAccount {
    /// Opens an account.
    ///
    /// # Arguments
    /// * `owner` - Non-empty owner name
    /// * `balance` - Opening balance, any number `>= 0`
    /// * `currency` - Non-empty currency code
    pub fn new(
        owner: impl Into<Value>,
        balance: impl Into<Value>,
        currency: impl Into<Value>,
    ) -> Result<Self, ValidationError> {
        let owner = required_text("owner", owner)?;
        let balance = amount("balance", balance)?;
        let currency = required_text("currency", currency)?;
        Ok(Self {
            owner,
            balance,
            currency,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Adds a strictly positive amount to the balance.
    pub fn deposit(&mut self, amount: impl Into<Value>) -> Result<(), AccountError> {
        let amount = positive_amount("amount", amount)?;
        self.balance += amount;
        Ok(())
    }

    /// Takes a strictly positive amount out of the balance.
    ///
    /// # Errors
    /// [`AccountError::InsufficientFunds`] when `amount > balance`.
    pub fn withdraw(&mut self, amount: impl Into<Value>) -> Result<(), AccountError> {
        let amount = positive_amount("amount", amount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

impl Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BankAccount(owner={}, balance={}, currency={})",
            quoted(&self.owner),
            format_float(self.balance),
            quoted(&self.currency)
        )
    }
}

/// Payload for opening a [`BankAccount`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCreate {
    pub owner: Value,
    pub balance: Value,
    pub currency: Value,
}
