//! Arithmetic exposed as associated functions on a stateless type.

use crate::validation::{Number, ValidationError, Value};

/// Namespace for [`Calculator::add`] and [`Calculator::mul`]. Never instantiated.
#[derive(Debug)]
pub struct Calculator;

impl Calculator {
    /// Sum of two numbers. Two integers give an integer.
    ///
    /// ```
    /// use oop_exercises::calculator::Calculator;
    /// use oop_exercises::validation::Number;
    ///
    /// assert_eq!(Calculator::add(5, 6).unwrap(), Number::Int(11));
    /// assert!(Calculator::add("5", 6).is_err());
    /// ```
    pub fn add(a: impl Into<Value>, b: impl Into<Value>) -> Result<Number, ValidationError> {
        let (a, b) = operands(a, b)?;
        Ok(a + b)
    }

    /// Product of two numbers. Two integers give an integer.
    pub fn mul(a: impl Into<Value>, b: impl Into<Value>) -> Result<Number, ValidationError> {
        let (a, b) = operands(a, b)?;
        Ok(a * b)
    }
}

fn operands(a: impl Into<Value>, b: impl Into<Value>) -> Result<(Number, Number), ValidationError> {
    Ok((Value::of(a).expect_number("a")?, Value::of(b).expect_number("b")?))
}
