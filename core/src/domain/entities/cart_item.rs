//! Cart item row: one product held by one customer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub customer_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

impl CartItem {
    pub fn new(id: i64, customer_id: i64, product_id: i64, quantity: i32) -> Self {
        Self {
            id,
            customer_id,
            product_id,
            quantity,
        }
    }
}
