use serde::{Deserialize, Serialize};

use sc_core::domain::entities::Product;
use sc_shared::Pagination;

/// `?page=&limit=` of the product listing; missing values use the defaults
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ProductPageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<ProductPageQuery> for Pagination {
    fn from(query: ProductPageQuery) -> Self {
        let defaults = Pagination::default();
        Pagination {
            page: query.page.unwrap_or(defaults.page),
            limit: query.limit.unwrap_or(defaults.limit),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: i32,
    pub stock: i32,
    pub image_url: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            stock: product.stock,
            image_url: product.image_url,
        }
    }
}
