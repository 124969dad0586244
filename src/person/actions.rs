//! Custom actions for Person and Resident records.

use crate::validation::Value;

/// Operations on a [`Person`](crate::model::Person).
#[derive(Debug, Clone)]
pub enum PersonAction {
    /// Adds one year to the age.
    Birthday,
    /// Replaces the email after validating it.
    ChangeEmail(Value),
    /// Reports whether the person is at least 18.
    IsAdult,
}

/// Results from PersonActions - variants match 1:1 with PersonAction
#[derive(Debug, Clone, PartialEq)]
pub enum PersonActionResult {
    /// The age after the birthday.
    Birthday(u64),
    ChangeEmail(()),
    IsAdult(bool),
}

/// Operations on a [`Resident`](crate::model::Resident).
#[derive(Debug, Clone)]
pub enum ResidentAction {
    /// Returns the greeting line.
    Greet,
    /// Moves to another city after validating it.
    Relocate(Value),
}

/// Results from ResidentActions - variants match 1:1 with ResidentAction
#[derive(Debug, Clone, PartialEq)]
pub enum ResidentActionResult {
    Greet(String),
    Relocate(()),
}
