use actix_web::{web, HttpResponse};
use validator::Validate;

use sc_core::repositories::{CartItemRepository, CustomerRepository, ProductRepository};

use crate::app::AppState;
use crate::dto::member::{PasswordCheckRequest, UpdatePasswordRequest};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for POST /api/members/auth/password-check
///
/// Re-confirms the current password before sensitive changes.
/// 204 when it matches, 400 `PASSWORD_MISMATCH` otherwise.
pub async fn check_password<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    auth: AuthContext,
    request: web::Json<PasswordCheckRequest>,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    state
        .customer_service
        .check_password(&auth.email, &request.password)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Handler for PATCH /api/members/auth/password
pub async fn update_password<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    auth: AuthContext,
    request: web::Json<UpdatePasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    state
        .customer_service
        .update_password(&auth.email, &request.password)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
