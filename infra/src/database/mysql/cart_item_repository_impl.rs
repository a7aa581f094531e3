//! MySQL implementation of the CartItemRepository trait.
//!
//! The `uk_cart_item_customer_product` unique key keeps one row per
//! customer and product; constraint violations on insert surface as
//! `CartError::InvalidProduct`.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use sc_core::domain::entities::cart_item::CartItem;
use sc_core::errors::{CartError, DomainError};
use sc_core::repositories::CartItemRepository;

use super::{database_error, is_constraint_violation};

/// MySQL implementation of CartItemRepository
pub struct MySqlCartItemRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCartItemRepository {
    /// Create a new MySQL cart item repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_cart_item(row: &sqlx::mysql::MySqlRow) -> Result<CartItem, DomainError> {
        let get_err = |column: &str, e: sqlx::Error| {
            DomainError::database(format!("Failed to get {}: {}", column, e))
        };

        Ok(CartItem {
            id: row.try_get("id").map_err(|e| get_err("id", e))?,
            customer_id: row.try_get("customer_id").map_err(|e| get_err("customer_id", e))?,
            product_id: row.try_get("product_id").map_err(|e| get_err("product_id", e))?,
            quantity: row.try_get("quantity").map_err(|e| get_err("quantity", e))?,
        })
    }
}

#[async_trait]
impl CartItemRepository for MySqlCartItemRepository {
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<CartItem>, DomainError> {
        let query = r#"
            SELECT id, customer_id, product_id, quantity
            FROM cart_item
            WHERE customer_id = ?
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find cart items", e))?;

        rows.iter().map(Self::row_to_cart_item).collect()
    }

    async fn find_product_ids_by_customer_id(&self, customer_id: i64) -> Result<Vec<i64>, DomainError> {
        sqlx::query_scalar("SELECT product_id FROM cart_item WHERE customer_id = ? ORDER BY id")
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find cart product ids", e))
    }

    async fn find_by_customer_and_product(
        &self,
        customer_id: i64,
        product_id: i64,
    ) -> Result<Option<CartItem>, DomainError> {
        let query = r#"
            SELECT id, customer_id, product_id, quantity
            FROM cart_item
            WHERE customer_id = ? AND product_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(customer_id)
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find cart item", e))?;

        result.as_ref().map(Self::row_to_cart_item).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CartItem>, DomainError> {
        let result = sqlx::query("SELECT id, customer_id, product_id, quantity FROM cart_item WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find cart item", e))?;

        result.as_ref().map(Self::row_to_cart_item).transpose()
    }

    async fn exists(&self, customer_id: i64, product_id: i64) -> Result<bool, DomainError> {
        let exists: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM cart_item WHERE customer_id = ? AND product_id = ?)",
        )
        .bind(customer_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("Failed to check cart item existence", e))?;

        Ok(exists == 1)
    }

    async fn save(&self, customer_id: i64, product_id: i64, quantity: i32) -> Result<i64, DomainError> {
        let result = sqlx::query(
            "INSERT INTO cart_item (customer_id, product_id, quantity) VALUES (?, ?, ?)",
        )
        .bind(customer_id)
        .bind(product_id)
        .bind(quantity)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_constraint_violation(&e) {
                tracing::warn!(
                    "Rejected cart item for customer {} and product {}: {}",
                    customer_id,
                    product_id,
                    e
                );
                DomainError::Cart(CartError::InvalidProduct)
            } else {
                database_error("Failed to save cart item", e)
            }
        })?;

        i64::try_from(result.last_insert_id())
            .map_err(|_| DomainError::internal("Cart item id out of range"))
    }

    async fn update_quantity(
        &self,
        customer_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> Result<bool, DomainError> {
        // rows_affected counts matched rows: SQLx sets CLIENT_FOUND_ROWS
        let result = sqlx::query(
            "UPDATE cart_item SET quantity = ? WHERE customer_id = ? AND product_id = ?",
        )
        .bind(quantity)
        .bind(customer_id)
        .bind(product_id)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("Failed to update cart item", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_quantity(
        &self,
        customer_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> Result<bool, DomainError> {
        // One statement: the row lock taken by UPDATE serializes concurrent adds
        let query = r#"
            UPDATE cart_item c
            JOIN product p ON p.id = c.product_id
            SET c.quantity = c.quantity + ?
            WHERE c.customer_id = ? AND c.product_id = ? AND c.quantity + ? <= p.stock
        "#;

        let result = sqlx::query(query)
            .bind(quantity)
            .bind(customer_id)
            .bind(product_id)
            .bind(quantity)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to add to cart item", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM cart_item WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to delete cart item", e))?;

        Ok(result.rows_affected() > 0)
    }
}
