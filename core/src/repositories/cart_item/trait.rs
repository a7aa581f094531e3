//! Cart item repository trait.
//!
//! Implementations must enforce a single row per (customer, product) pair.

use async_trait::async_trait;

use crate::domain::entities::cart_item::CartItem;
use crate::errors::DomainError;

/// Repository trait for CartItem persistence operations
#[async_trait]
pub trait CartItemRepository: Send + Sync {
    /// All cart items of a customer, ordered by cart item id
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<CartItem>, DomainError>;

    /// Ids of the products a customer holds, ordered by cart item id
    async fn find_product_ids_by_customer_id(&self, customer_id: i64) -> Result<Vec<i64>, DomainError>;

    async fn find_by_customer_and_product(
        &self,
        customer_id: i64,
        product_id: i64,
    ) -> Result<Option<CartItem>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<CartItem>, DomainError>;

    /// Whether the customer already holds the product
    async fn exists(&self, customer_id: i64, product_id: i64) -> Result<bool, DomainError>;

    /// Insert a new cart item and return its id
    ///
    /// # Returns
    /// * `Ok(id)` - The generated cart item id
    /// * `Err(DomainError::Cart(CartError::InvalidProduct))` - The row violates a
    ///   constraint (unknown customer/product or the pair already exists)
    async fn save(&self, customer_id: i64, product_id: i64, quantity: i32) -> Result<i64, DomainError>;

    /// Set the quantity of the customer's item for a product.
    /// `Ok(false)` when the customer does not hold the product.
    async fn update_quantity(
        &self,
        customer_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> Result<bool, DomainError>;

    /// Atomically add `quantity` to the customer's item for a product, only
    /// while the sum stays within the product's stock.
    /// `Ok(false)` when the item is missing or the sum would exceed stock.
    async fn add_quantity(
        &self,
        customer_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> Result<bool, DomainError>;

    /// Delete a single cart item by id; `Ok(false)` when nothing was deleted
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
