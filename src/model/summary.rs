//! Descriptive statistics over a numeric data set.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::validation::{format_float, non_blank, quoted, Number, ValidationError, Value};

/// A named, non-empty list of numbers with a unit of measurement.
///
/// Derived values are computed on every call; nothing is cached.
///
/// # Examples
///
/// ```
/// use oop_exercises::model::NumericSummary;
///
/// let sales = NumericSummary::new(vec![10, 20, 30], "Sales", "USD").unwrap();
/// assert_eq!(sales.mean(), 20.0);
/// assert_eq!(sales.report(), "Sales summary: mean=20.0 USD, min=10 USD, max=30 USD");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    data: Vec<Number>,
    name: String,
    unit: String,
}

impl NumericSummary {
    /// Materialises `data` and validates every argument.
    ///
    /// Kind checks run first (`name`, `unit`, each element), then range checks
    /// (data non-empty, name and unit not blank).
    pub fn new<I>(
        data: I,
        name: impl Into<Value>,
        unit: impl Into<Value>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let name = Value::of(name).expect_text("name")?;
        let unit = Value::of(unit).expect_text("unit")?;
        let data = data
            .into_iter()
            .map(|item| Value::of(item).expect_number("data"))
            .collect::<Result<Vec<_>, _>>()?;

        if data.is_empty() {
            return Err(ValidationError::out_of_range("data", "cannot be empty"));
        }
        let name = non_blank("name", name)?;
        let unit = non_blank("unit", unit)?;

        Ok(Self { data, name, unit })
    }

    pub fn data(&self) -> &[Number] {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Exact for all-integer data, float otherwise.
    pub fn total(&self) -> Number {
        self.data
            .iter()
            .copied()
            .fold(Number::Int(0), |acc, x| acc + x)
    }

    pub fn mean(&self) -> f64 {
        self.data.iter().map(|x| x.as_f64()).sum::<f64>() / self.data.len() as f64
    }

    /// First smallest element, kept as an `Int` or `Float` as given.
    pub fn minimum(&self) -> Number {
        self.extreme(|candidate, best| candidate < best)
    }

    /// First largest element, kept as an `Int` or `Float` as given.
    pub fn maximum(&self) -> Number {
        self.extreme(|candidate, best| candidate > best)
    }

    fn extreme(&self, replaces: impl Fn(&Number, &Number) -> bool) -> Number {
        let mut items = self.data.iter();
        // `data` is non-empty from construction on.
        let mut best = items.next().copied().unwrap_or(Number::Int(0));
        for item in items {
            if replaces(item, &best) {
                best = *item;
            }
        }
        best
    }

    /// One-line report with the unit attached to every figure.
    pub fn report(&self) -> String {
        format!(
            "{name} summary: mean={mean} {unit}, min={min} {unit}, max={max} {unit}",
            name = self.name,
            mean = format_float(self.mean()),
            min = self.minimum(),
            max = self.maximum(),
            unit = self.unit,
        )
    }
}

impl Display for NumericSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NumericSummary(name={}, unit={}, count={})",
            quoted(&self.name),
            quoted(&self.unit),
            self.data.len()
        )
    }
}

/// Payload for building a [`NumericSummary`] from loosely-typed input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryCreate {
    pub data: Value,
    pub name: Value,
    pub unit: Value,
}

impl TryFrom<SummaryCreate> for NumericSummary {
    type Error = ValidationError;

    fn try_from(params: SummaryCreate) -> Result<Self, Self::Error> {
        // The container check belongs between the label checks and the
        // element checks, so the labels are checked here first.
        let name = params.name.expect_text("name")?;
        let unit = params.unit.expect_text("unit")?;
        let data = params
            .data
            .expect_list("data", "an iterable of numbers")?;
        Self::new(data, name, unit)
    }
}
