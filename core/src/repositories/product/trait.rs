//! Product repository trait. The catalogue is read-only for this service.

use async_trait::async_trait;

use crate::domain::entities::product::Product;
use crate::errors::DomainError;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;

    /// Products whose id is in `ids`; unknown ids are skipped
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, DomainError>;

    /// One page of products ordered by id
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Product>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
