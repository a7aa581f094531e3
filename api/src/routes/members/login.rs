use actix_web::{web, HttpResponse};
use log::warn;
use validator::Validate;

use sc_core::repositories::{CartItemRepository, CustomerRepository, ProductRepository};
use sc_shared::validation::mask_email;

use crate::app::AppState;
use crate::dto::member::{LoginRequest, LoginResponse};
use crate::handlers::ApiError;

/// Handler for POST /api/members/login
///
/// Exchanges email and password for a bearer access token.
///
/// # Response
///
/// ## Success (200 OK)
/// ```text
/// { "accessToken": "eyJ...", "nickname": "shopper" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Malformed body
/// - 401 Unauthorized: Unknown email or wrong password
pub async fn login<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(result) => Ok(HttpResponse::Ok().json(LoginResponse::from(result))),
        Err(error) => {
            warn!("Login failed for {}: {}", mask_email(&request.email), error);
            Err(error.into())
        }
    }
}
