//! MySQL implementation of the ProductRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use sc_core::domain::entities::product::Product;
use sc_core::errors::DomainError;
use sc_core::repositories::ProductRepository;

use super::database_error;

const PRODUCT_COLUMNS: &str = "id, name, price, stock, image_url";

pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &sqlx::mysql::MySqlRow) -> Result<Product, DomainError> {
        let get_err = |column: &str, e: sqlx::Error| {
            DomainError::database(format!("Failed to get {}: {}", column, e))
        };

        Ok(Product {
            id: row.try_get("id").map_err(|e| get_err("id", e))?,
            name: row.try_get("name").map_err(|e| get_err("name", e))?,
            price: row.try_get("price").map_err(|e| get_err("price", e))?,
            stock: row.try_get("stock").map_err(|e| get_err("stock", e))?,
            image_url: row.try_get("image_url").map_err(|e| get_err("image_url", e))?,
        })
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let query = format!("SELECT {} FROM product WHERE id = ?", PRODUCT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find product", e))?;

        result.as_ref().map(Self::row_to_product).transpose()
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "SELECT {} FROM product WHERE id IN ({}) ORDER BY id",
            PRODUCT_COLUMNS, placeholders
        );

        let mut statement = sqlx::query(&query);
        for id in ids {
            statement = statement.bind(id);
        }

        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find products", e))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Product>, DomainError> {
        let query = format!(
            "SELECT {} FROM product ORDER BY id LIMIT ? OFFSET ?",
            PRODUCT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Failed to list products", e))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("Failed to count products", e))?;

        Ok(u64::try_from(total).unwrap_or(0))
    }
}
