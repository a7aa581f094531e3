use actix_web::{web, HttpResponse};
use validator::Validate;

use sc_core::repositories::{CartItemRepository, CustomerRepository, ProductRepository};

use crate::app::AppState;
use crate::dto::member::{MemberResponse, UpdateProfileRequest};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /api/members/auth/me
pub async fn find_me<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let customer = state.customer_service.find_by_email(&auth.email).await?;
    Ok(HttpResponse::Ok().json(MemberResponse::from(customer)))
}

/// Handler for PATCH /api/members/auth/me
///
/// Changes the nickname. Responds 204 No Content.
pub async fn update_me<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    auth: AuthContext,
    request: web::Json<UpdateProfileRequest>,
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
        .update_profile(&auth.email, &request.nickname)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Handler for DELETE /api/members/auth/me
///
/// Deletes the account together with its cart. The token stays
/// cryptographically valid but every later request fails with 404.
pub async fn delete_me<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    state.customer_service.delete(&auth.email).await?;
    Ok(HttpResponse::NoContent().finish())
}
