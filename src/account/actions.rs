//! Custom actions for BankAccount records.

use crate::validation::Value;

/// Operations that move money in or out of a [`BankAccount`](crate::model::BankAccount).
#[derive(Debug, Clone)]
pub enum AccountAction {
    /// Reads the balance without modifying it.
    CheckBalance,
    /// Adds a strictly positive amount.
    Deposit(Value),
    /// Removes a strictly positive amount no larger than the balance.
    Withdraw(Value),
}

/// Results from AccountActions - variants match 1:1 with AccountAction.
/// Each carries the balance after the action.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountActionResult {
    CheckBalance(f64),
    Deposit(f64),
    Withdraw(f64),
}
