//! MySQL implementation of the CustomerRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use sc_core::domain::entities::customer::{Customer, NewCustomer};
use sc_core::domain::value_objects::Nickname;
use sc_core::errors::{CustomerError, DomainError};
use sc_core::repositories::CustomerRepository;

use super::database_error;

/// MySQL implementation of CustomerRepository
pub struct MySqlCustomerRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    /// Create a new MySQL customer repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Customer entity
    fn row_to_customer(row: &sqlx::mysql::MySqlRow) -> Result<Customer, DomainError> {
        Ok(Customer {
            id: row.try_get("id")
                .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?,
            email: row.try_get("email")
                .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?,
            nickname: row.try_get("nickname")
                .map_err(|e| DomainError::database(format!("Failed to get nickname: {}", e)))?,
            password_hash: row.try_get("password")
                .map_err(|e| DomainError::database(format!("Failed to get password: {}", e)))?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let query = r#"
            SELECT id, email, nickname, password, created_at, updated_at
            FROM customer
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find customer", e))?;

        result.as_ref().map(Self::row_to_customer).transpose()
    }

    async fn find_id_by_email(&self, email: &str) -> Result<Option<i64>, DomainError> {
        sqlx::query_scalar("SELECT id FROM customer WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to find customer id", e))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customer WHERE email = ?)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| database_error("Failed to check email existence", e))?;

        Ok(exists == 1)
    }

    async fn save(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let query = r#"
            INSERT INTO customer (email, nickname, password, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let now = Utc::now();
        let result = sqlx::query(query)
            .bind(customer.email.as_str())
            .bind(customer.nickname.as_str())
            .bind(&customer.password_hash)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::Customer(CustomerError::DuplicateEmail)
                }
                e => database_error("Failed to save customer", e),
            })?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| DomainError::internal("Customer id out of range"))?;
        let mut saved = customer.into_customer(id);
        saved.created_at = now;
        saved.updated_at = now;
        Ok(saved)
    }

    async fn update_nickname(&self, email: &str, nickname: &Nickname) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE customer SET nickname = ?, updated_at = ? WHERE email = ?")
            .bind(nickname.as_str())
            .bind(Utc::now())
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to update nickname", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_password(&self, email: &str, password_hash: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE customer SET password = ?, updated_at = ? WHERE email = ?")
            .bind(password_hash)
            .bind(Utc::now())
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to update password", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| database_error("Failed to begin transaction", e))?;

        sqlx::query(
            "DELETE cart_item FROM cart_item \
             JOIN customer ON customer.id = cart_item.customer_id \
             WHERE customer.email = ?",
        )
        .bind(email)
        .execute(&mut *tx)
        .await
        .map_err(|e| database_error("Failed to delete cart items", e))?;

        let result = sqlx::query("DELETE FROM customer WHERE email = ?")
            .bind(email)
            .execute(&mut *tx)
            .await
            .map_err(|e| database_error("Failed to delete customer", e))?;

        tx.commit()
            .await
            .map_err(|e| database_error("Failed to commit transaction", e))?;

        Ok(result.rows_affected() > 0)
    }
}
