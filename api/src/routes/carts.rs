//! Cart route handlers. Every route runs behind `JwtAuth`.

use actix_web::{web, HttpResponse};
use log::debug;
use validator::Validate;

use sc_core::repositories::{CartItemRepository, CustomerRepository, ProductRepository};
use sc_shared::validation::mask_email;

use crate::app::AppState;
use crate::dto::cart::{CartItemRequest, CartResponse};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

pub fn configure<C, P, I>(cfg: &mut web::ServiceConfig)
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    cfg.route("", web::get().to(find_carts::<C, P, I>))
        .route("", web::post().to(add_cart_item::<C, P, I>))
        .route("", web::patch().to(update_cart_item::<C, P, I>))
        .route("/{product_id}", web::delete().to(delete_cart_item::<C, P, I>));
}

/// Handler for GET /api/carts
pub async fn find_carts<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let carts: Vec<CartResponse> = state
        .cart_service
        .find_carts(&auth.email)
        .await?
        .into_iter()
        .map(CartResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(carts))
}

/// Handler for POST /api/carts
///
/// Adds a product, or raises the quantity when it is already in the cart.
///
/// ## Errors
/// - 400 Bad Request: Quantity below 1, or more than the product has in stock
/// - 404 Not Found: Unknown product
pub async fn add_cart_item<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    auth: AuthContext,
    request: web::Json<CartItemRequest>,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    state
        .cart_service
        .add_cart_item(&auth.email, request.product_id, request.quantity)
        .await?;

    debug!(
        "Added product {} x{} to cart of {}",
        request.product_id,
        request.quantity,
        mask_email(&auth.email)
    );
    Ok(HttpResponse::Created().finish())
}

/// Handler for PATCH /api/carts
///
/// Sets the quantity of a product already in the cart. Repeating the same
/// request leaves the cart unchanged.
pub async fn update_cart_item<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    auth: AuthContext,
    request: web::Json<CartItemRequest>,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    state
        .cart_service
        .update_cart_item(&auth.email, request.product_id, request.quantity)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Handler for DELETE /api/carts/{product_id}
pub async fn delete_cart_item<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    auth: AuthContext,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let product_id = path.into_inner();
    state
        .cart_service
        .delete_cart_item(&auth.email, product_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
