use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::validation::{count, quoted, required_text, ValidationError, Value};

/// Age at which [`Person::is_adult`] and [`Resident::is_adult`] turn true.
pub const ADULT_AGE: u64 = 18;

/// A person reachable by email.
///
/// Fields are private; every write goes through a validating method.
///
/// ```compile_fail
/// let mut p = oop_exercises::model::Person::new("Ivan", 30, "ivan@example.com").unwrap();
/// p.age = 0;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: String,
    age: u64,
    email: String,
}

impl Person {
    /// # Errors
    /// Type failure for a non-text name/email or a non-integer age; range
    /// failure for an empty name, a negative age or an email without `@`.
    pub fn new(
        name: impl Into<Value>,
        age: impl Into<Value>,
        email: impl Into<Value>,
    ) -> Result<Self, ValidationError> {
        let name = required_text("name", name)?;
        let age = count("age", age)?;
        let email = validate_email(email)?;
        Ok(Self { name, age, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_name(&mut self, name: impl Into<Value>) -> Result<(), ValidationError> {
        self.name = required_text("name", name)?;
        Ok(())
    }

    /// Adds one year to the age. Nothing else changes.
    pub fn birthday(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    pub fn change_email(&mut self, email: impl Into<Value>) -> Result<(), ValidationError> {
        self.email = validate_email(email)?;
        Ok(())
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }
}

fn validate_email(email: impl Into<Value>) -> Result<String, ValidationError> {
    let email = Value::of(email).expect_text("email")?;
    if !email.contains('@') {
        return Err(ValidationError::out_of_range("email", "must contain '@'"));
    }
    Ok(email)
}

impl Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person(name={}, age={}, email={})",
            quoted(&self.name),
            self.age,
            quoted(&self.email)
        )
    }
}

/// A person tied to a city.
#[derive(Debug, Clone, PartialEq)]
pub struct Resident {
    name: String,
    age: u64,
    city: String,
}

impl Resident {
    pub fn new(
        name: impl Into<Value>,
        age: impl Into<Value>,
        city: impl Into<Value>,
    ) -> Result<Self, ValidationError> {
        let name = required_text("name", name)?;
        let age = count("age", age)?;
        let city = required_text("city", city)?;
        Ok(Self { name, age, city })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn greet(&self) -> String {
        format!("Hello, my name is {}", self.name)
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    pub fn relocate(&mut self, city: impl Into<Value>) -> Result<(), ValidationError> {
        self.city = required_text("city", city)?;
        Ok(())
    }
}

impl Display for Resident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Resident(name={}, age={}, city={})",
            quoted(&self.name),
            self.age,
            quoted(&self.city)
        )
    }
}

/// Payload for creating a [`Person`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonCreate {
    pub name: Value,
    pub age: Value,
    pub email: Value,
}

/// Payload for updating a [`Person`]. Absent fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonUpdate {
    pub name: Option<Value>,
    pub email: Option<Value>,
}

/// Payload for creating a [`Resident`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResidentCreate {
    pub name: Value,
    pub age: Value,
    pub city: Value,
}
