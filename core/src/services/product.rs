//! Read-only product catalogue service

use std::sync::Arc;

use sc_shared::{PaginatedResponse, Pagination};

use crate::domain::entities::Product;
use crate::errors::{CartError, DomainResult, ValidationError};
use crate::repositories::ProductRepository;

pub struct ProductService<P>
where
    P: ProductRepository,
{
    product_repository: Arc<P>,
}

impl<P> ProductService<P>
where
    P: ProductRepository,
{
    pub fn new(product_repository: Arc<P>) -> Self {
        Self { product_repository }
    }

    pub async fn find_by_id(&self, id: i64) -> DomainResult<Product> {
        self.product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CartError::ProductNotFound.into())
    }

    /// One page of the catalogue, ordered by product id
    pub async fn find_page(&self, pagination: Pagination) -> DomainResult<PaginatedResponse<Product>> {
        if pagination.page < 1 {
            return Err(ValidationError::InvalidPagination {
                field: "page".to_string(),
            }
            .into());
        }
        if pagination.limit < 1 {
            return Err(ValidationError::InvalidPagination {
                field: "limit".to_string(),
            }
            .into());
        }

        let pagination = Pagination::new(pagination.page, pagination.limit);
        let total = self.product_repository.count().await?;
        let products = self
            .product_repository
            .find_page(pagination.offset(), pagination.limit())
            .await?;

        Ok(PaginatedResponse::new(products, pagination, total))
    }
}
