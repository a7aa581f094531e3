//! Public product catalogue

use actix_web::{web, HttpResponse};

use sc_core::repositories::{CartItemRepository, CustomerRepository, ProductRepository};

use crate::app::AppState;
use crate::dto::product::{ProductPageQuery, ProductResponse};
use crate::handlers::ApiError;

pub fn configure<C, P, I>(cfg: &mut web::ServiceConfig)
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    cfg.route("", web::get().to(find_products::<C, P, I>))
        .route("/{product_id}", web::get().to(find_product::<C, P, I>));
}

/// Handler for GET /api/products?page={page}&limit={limit}
///
/// `page` starts at 1 and defaults to 1; `limit` defaults to 20 and is capped at 100.
pub async fn find_products<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    query: web::Query<ProductPageQuery>,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let page = state
        .product_service
        .find_page(query.into_inner().into())
        .await?
        .map(ProductResponse::from);
    Ok(HttpResponse::Ok().json(page))
}

/// Handler for GET /api/products/{product_id}
pub async fn find_product<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let product = state.product_service.find_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}
