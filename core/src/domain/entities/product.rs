//! Product entity from the catalogue.

use serde::{Deserialize, Serialize};

/// A product that can be placed in a cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price in the smallest currency unit
    pub price: i32,
    /// Units currently available
    pub stock: i32,
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: i32, stock: i32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Whether `quantity` units can be held without exceeding stock
    pub fn can_supply(&self, quantity: i32) -> bool {
        quantity <= self.stock
    }
}
