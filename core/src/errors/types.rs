//! Error sub-types grouped by the flow that raises them.
//!
//! The HTTP layer maps each variant to a status code and error code; the
//! messages here are the client-facing English text.

use thiserror::Error;

/// Authentication failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password at login
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Password re-confirmation did not match
    #[error("Password does not match")]
    PasswordMismatch,

    #[error("Authentication required")]
    Unauthenticated,
}

/// Token validation and issuance failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid authentication token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Customer account failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomerError {
    #[error("Email is already registered")]
    DuplicateEmail,

    #[error("Customer not found")]
    CustomerNotFound,
}

/// Cart mutation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Product not found")]
    ProductNotFound,

    #[error("Insufficient stock. Current stock: {stock}")]
    InsufficientStock { stock: i32 },

    #[error("Product is not in the cart")]
    ItemNotInCart,

    #[error("Product cannot be added to the cart")]
    InvalidProduct,
}

/// Input validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Nickname must be between 1 and 10 characters")]
    InvalidNickname,

    #[error("Password must be 8-20 characters and contain a letter, a digit and a special character")]
    InvalidPassword,

    #[error("Quantity must be at least 1 (got {value})")]
    InvalidQuantity { value: i32 },

    #[error("{field} must be at least 1")]
    InvalidPagination { field: String },
}
