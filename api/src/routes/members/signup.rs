use actix_web::{web, HttpResponse};
use validator::Validate;

use sc_core::repositories::{CartItemRepository, CustomerRepository, ProductRepository};
use sc_core::services::SignUpCommand;

use crate::app::AppState;
use crate::dto::member::{EmailCheckQuery, EmailCheckResponse, MemberResponse, SignUpRequest};
use crate::handlers::ApiError;

/// Handler for GET /api/members/check-email?email={email}
///
/// Reports whether the address is still free to register.
pub async fn check_email<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    query: web::Query<EmailCheckQuery>,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let query = query.into_inner();
    query.validate()?;

    let unique = state.customer_service.is_unique_email(&query.email).await?;
    Ok(HttpResponse::Ok().json(EmailCheckResponse { unique }))
}

/// Handler for POST /api/members
///
/// # Request Body
///
/// ```text
/// { "email": "email@email.com", "nickname": "shopper", "password": "password1!" }
/// ```
///
/// # Response
///
/// 201 Created with `{ "email", "nickname" }`.
///
/// ## Errors
/// - 400 Bad Request: Invalid email, nickname or password
/// - 409 Conflict: Email already registered
pub async fn sign_up<C, P, I>(
    state: web::Data<AppState<C, P, I>>,
    request: web::Json<SignUpRequest>,
) -> Result<HttpResponse, ApiError>
where
    C: CustomerRepository + 'static,
    P: ProductRepository + 'static,
    I: CartItemRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let customer = state
        .customer_service
        .sign_up(SignUpCommand {
            email: request.email,
            nickname: request.nickname,
            password: request.password,
        })
        .await?;
    Ok(HttpResponse::Created().json(MemberResponse::from(customer)))
}
