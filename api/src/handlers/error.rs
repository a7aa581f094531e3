//! HTTP error type rendering every failure as an `ErrorResponse`.

use std::collections::HashMap;

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use sc_core::errors::{AuthError, CartError, CustomerError, DomainError, TokenError};
use sc_shared::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// Error returned by handlers and middleware
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body or query failed `validator` rules
    #[error("Invalid request")]
    Validation(#[from] ValidationErrors),

    /// Body, query or path could not be deserialized
    #[error("{0}")]
    BadRequest(String),

    #[error("The requested resource was not found")]
    NotFound,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR)
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
            ApiError::Domain(error) => map_domain_error(error),
        }
    }

    fn to_error_response(&self) -> ErrorResponse {
        let (status, code) = self.status_and_code();
        match self {
            ApiError::Domain(DomainError::Cart(CartError::InsufficientStock { stock })) => {
                ErrorResponse::new(code, self.to_string()).add_detail("stock", stock)
            }
            ApiError::Validation(errors) => {
                ErrorResponse::with_details(code, self.to_string(), field_details(errors))
            }
            // Server-side failures never leak their message
            _ if status.is_server_error() => {
                ErrorResponse::new(code, "An internal error occurred")
            }
            _ => ErrorResponse::new(code, self.to_string()),
        }
    }
}

fn map_domain_error(error: &DomainError) -> (StatusCode, &'static str) {
    match error {
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, error_codes::INVALID_CREDENTIALS)
            }
            AuthError::PasswordMismatch => (StatusCode::BAD_REQUEST, error_codes::PASSWORD_MISMATCH),
            AuthError::Unauthenticated => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::TokenExpired => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED),
            TokenError::InvalidToken => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID),
            TokenError::TokenGenerationFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
        },
        DomainError::Customer(customer_error) => match customer_error {
            CustomerError::DuplicateEmail => (StatusCode::CONFLICT, error_codes::DUPLICATE_EMAIL),
            CustomerError::CustomerNotFound => {
                (StatusCode::NOT_FOUND, error_codes::CUSTOMER_NOT_FOUND)
            }
        },
        DomainError::Cart(cart_error) => match cart_error {
            CartError::ProductNotFound => (StatusCode::NOT_FOUND, error_codes::PRODUCT_NOT_FOUND),
            CartError::ItemNotInCart => (StatusCode::NOT_FOUND, error_codes::CART_ITEM_NOT_FOUND),
            CartError::InsufficientStock { .. } => {
                (StatusCode::BAD_REQUEST, error_codes::INSUFFICIENT_STOCK)
            }
            CartError::InvalidProduct => (StatusCode::BAD_REQUEST, error_codes::INVALID_PRODUCT),
        },
        DomainError::Database { .. } | DomainError::Internal { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        }
    }
}

/// Field name to list of failed rule messages
fn field_details(errors: &ValidationErrors) -> HashMap<String, serde_json::Value> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), serde_json::json!(messages))
        })
        .collect()
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {:?}", self);
        } else {
            log::debug!("Request rejected with {}: {}", status, self);
        }

        HttpResponse::build(status).json(self.to_error_response())
    }
}

/// `JsonConfig` error handler
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid JSON body: {}", err)).into()
}

/// `QueryConfig` error handler
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid query string: {}", err)).into()
}

/// `PathConfig` error handler
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid path parameter: {}", err)).into()
}
