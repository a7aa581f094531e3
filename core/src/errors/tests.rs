use super::*;

#[test]
fn test_sub_errors_convert_into_domain_error() {
    let error: DomainError = CartError::InsufficientStock { stock: 3 }.into();
    assert_eq!(error, DomainError::Cart(CartError::InsufficientStock { stock: 3 }));
    assert_eq!(error.to_string(), "Insufficient stock. Current stock: 3");
}

#[test]
fn test_transparent_messages() {
    let error: DomainError = CustomerError::DuplicateEmail.into();
    assert_eq!(error.to_string(), "Email is already registered");

    let error: DomainError = TokenError::TokenExpired.into();
    assert_eq!(error.to_string(), "Token has expired");
}

#[test]
fn test_client_error_classification() {
    assert!(DomainError::from(AuthError::InvalidCredentials).is_client_error());
    assert!(DomainError::from(ValidationError::InvalidEmail).is_client_error());
    assert!(!DomainError::database("connection reset").is_client_error());
    assert!(!DomainError::internal("bcrypt failure").is_client_error());
    assert!(!DomainError::from(TokenError::TokenGenerationFailed).is_client_error());
}
