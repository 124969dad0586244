//! Frequency analysis over categorical labels.

use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::validation::{non_blank, quoted, ValidationError, Value};

/// A named list of text labels.
///
/// Unlike [`NumericSummary`](super::NumericSummary), an empty list is
/// accepted. That asymmetry is kept on purpose for compatibility, although it
/// is most likely an oversight; every derived value is still well defined on
/// empty data.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    data: Vec<String>,
    name: String,
}

impl CategorySummary {
    pub fn new<I>(data: I, name: impl Into<Value>) -> Result<Self, ValidationError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let name = Value::of(name).expect_text("name")?;
        let data = data
            .into_iter()
            .map(|item| Value::of(item).expect_text("data"))
            .collect::<Result<Vec<_>, _>>()?;
        let name = non_blank("name", name)?;
        Ok(Self { data, name })
    }

    pub fn data(&self) -> &[String] {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of elements, duplicates included.
    pub fn total(&self) -> usize {
        self.data.len()
    }

    /// The `n` most frequent labels with their counts.
    ///
    /// Sorted by descending count; equal counts keep the order in which the
    /// labels first appeared.
    ///
    /// ```
    /// use oop_exercises::model::CategorySummary;
    ///
    /// let fruits = CategorySummary::new(["Apple", "Banana", "Apple", "Orange"], "Fruits").unwrap();
    /// assert_eq!(
    ///     fruits.most_common(2),
    ///     vec![("Apple".to_string(), 2), ("Banana".to_string(), 1)]
    /// );
    /// ```
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut counts = self.counts();
        // Stable, so ties stay in first-seen order.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(n);
        counts
    }

    pub fn unique_count(&self) -> usize {
        self.counts().len()
    }

    /// Share of `label` among all elements; `0.0` when it never occurs.
    pub fn proportion(&self, label: &str) -> f64 {
        let hits = self.data.iter().filter(|item| *item == label).count();
        if hits == 0 {
            return 0.0;
        }
        hits as f64 / self.data.len() as f64
    }

    /// Label counts in first-appearance order.
    fn counts(&self) -> Vec<(String, usize)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();
        for item in &self.data {
            match index.get(item.as_str()) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(item.as_str(), counts.len());
                    counts.push((item.clone(), 1));
                }
            }
        }
        counts
    }
}

impl Display for CategorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CategorySummary(name={}, total={})",
            quoted(&self.name),
            self.data.len()
        )
    }
}

/// Payload for building a [`CategorySummary`] from loosely-typed input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub data: Value,
    pub name: Value,
}

impl TryFrom<CategoryCreate> for CategorySummary {
    type Error = ValidationError;

    fn try_from(params: CategoryCreate) -> Result<Self, Self::Error> {
        let name = params.name.expect_text("name")?;
        let data = params
            .data
            .expect_list("data", "an iterable of strings")?;
        Self::new(data, name)
    }
}
