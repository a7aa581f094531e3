use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Number of units of a product in a cart; always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i32);

impl Quantity {
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if value >= 1 {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidQuantity { value })
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Adds another quantity; `None` on overflow
    pub fn checked_add(self, other: i32) -> Option<i32> {
        self.0.checked_add(other)
    }
}
