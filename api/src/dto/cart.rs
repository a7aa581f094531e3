use serde::{Deserialize, Serialize};
use validator::Validate;

use sc_core::domain::entities::Cart;

/// Body of `POST /api/carts` and `PATCH /api/carts`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub product_id: i64,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

/// One line of the cart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub product_id: i64,
    pub name: String,
    pub price: i32,
    pub image_url: Option<String>,
    pub stock: i32,
    pub quantity: i32,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            product_id: cart.product.id,
            name: cart.product.name,
            price: cart.product.price,
            image_url: cart.product.image_url,
            stock: cart.product.stock,
            quantity: cart.quantity,
        }
    }
}
