//! Cart read model: a product joined with the quantity a customer holds.

use serde::{Deserialize, Serialize};

use super::product::Product;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub product: Product,
    pub quantity: i32,
}

impl Cart {
    pub fn new(product: Product, quantity: i32) -> Self {
        Self { product, quantity }
    }

    /// Price of the line (unit price times quantity)
    pub fn total_price(&self) -> i64 {
        i64::from(self.product.price) * i64::from(self.quantity)
    }
}
