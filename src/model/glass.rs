use std::fmt::{self, Display};

use crate::validation::{non_negative, positive, Number, ValidationError, Value};

/// A glass with a fixed capacity and some amount already poured into it.
///
/// Both kinds are checked before either range, so `Glass::new("big", -1)`
/// reports the type problem with `capacity` first.
#[derive(Debug, Clone, PartialEq)]
pub struct Glass {
    capacity: Number,
    occupied: Number,
}

impl Glass {
    /// # Errors
    /// - [`ValidationError::WrongType`] if either argument is not a number.
    /// - [`ValidationError::OutOfRange`] if `capacity <= 0` or `occupied` is
    ///   outside `0..=capacity`.
    pub fn new(
        capacity: impl Into<Value>,
        occupied: impl Into<Value>,
    ) -> Result<Self, ValidationError> {
        let capacity = Value::of(capacity).expect_number("capacity")?;
        let occupied = Value::of(occupied).expect_number("occupied")?;

        let capacity = positive("capacity", capacity)?;
        let occupied = non_negative("occupied", occupied)?;
        if occupied > capacity {
            return Err(ValidationError::out_of_range(
                "occupied",
                format!("must not exceed capacity {capacity}"),
            ));
        }

        Ok(Self { capacity, occupied })
    }

    pub fn capacity(&self) -> Number {
        self.capacity
    }

    pub fn occupied(&self) -> Number {
        self.occupied
    }
}

impl Display for Glass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Glass(capacity={}, occupied={})",
            self.capacity, self.occupied
        )
    }
}
