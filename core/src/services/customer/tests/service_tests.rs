//! Unit tests for customer service

use std::sync::Arc;

use crate::domain::entities::Product;
use crate::errors::{AuthError, CustomerError, DomainError, ValidationError};
use crate::repositories::{CartItemRepository, MockStore};
use crate::services::customer::{CustomerService, SignUpCommand};
use crate::services::password::PasswordHasher;

const EMAIL: &str = "email@email.com";

fn sign_up_command(email: &str) -> SignUpCommand {
    SignUpCommand {
        email: email.to_string(),
        nickname: "shopper".to_string(),
        password: "password1!".to_string(),
    }
}

fn create_test_service() -> (CustomerService<MockStore>, Arc<MockStore>) {
    let store = Arc::new(MockStore::with_products(vec![Product::new(1, "apple", 1000, 10)]));
    let service = CustomerService::new(store.clone(), PasswordHasher::new(4));
    (service, store)
}

#[tokio::test]
async fn test_sign_up_stores_hashed_password() {
    let (service, _) = create_test_service();

    let customer = service.sign_up(sign_up_command(EMAIL)).await.unwrap();

    assert_eq!(customer.email, EMAIL);
    assert_eq!(customer.nickname, "shopper");
    assert_ne!(customer.password_hash, "password1!");
    assert!(customer.password_hash.starts_with("$2"));
}

#[tokio::test]
async fn test_sign_up_rejects_duplicate_email() {
    let (service, _) = create_test_service();
    service.sign_up(sign_up_command(EMAIL)).await.unwrap();

    let result = service.sign_up(sign_up_command(EMAIL)).await;

    assert_eq!(result, Err(DomainError::Customer(CustomerError::DuplicateEmail)));
}

#[tokio::test]
async fn test_sign_up_validates_input() {
    let (service, _) = create_test_service();

    let bad_email = service.sign_up(sign_up_command("not-an-email")).await;
    assert_eq!(bad_email, Err(DomainError::Validation(ValidationError::InvalidEmail)));

    let bad_password = service
        .sign_up(SignUpCommand {
            password: "password".to_string(),
            ..sign_up_command(EMAIL)
        })
        .await;
    assert_eq!(bad_password, Err(DomainError::Validation(ValidationError::InvalidPassword)));
}

#[tokio::test]
async fn test_is_unique_email() {
    let (service, _) = create_test_service();
    assert!(service.is_unique_email(EMAIL).await.unwrap());

    service.sign_up(sign_up_command(EMAIL)).await.unwrap();
    assert!(!service.is_unique_email(EMAIL).await.unwrap());
}

#[tokio::test]
async fn test_check_password() {
    let (service, _) = create_test_service();
    service.sign_up(sign_up_command(EMAIL)).await.unwrap();

    assert!(service.check_password(EMAIL, "password1!").await.is_ok());
    assert_eq!(
        service.check_password(EMAIL, "password2!").await,
        Err(DomainError::Auth(AuthError::PasswordMismatch))
    );
}

#[tokio::test]
async fn test_find_missing_customer() {
    let (service, _) = create_test_service();

    assert_eq!(
        service.find_by_email(EMAIL).await,
        Err(DomainError::Customer(CustomerError::CustomerNotFound))
    );
}

#[tokio::test]
async fn test_update_profile() {
    let (service, _) = create_test_service();
    service.sign_up(sign_up_command(EMAIL)).await.unwrap();

    service.update_profile(EMAIL, "renamed").await.unwrap();
    assert_eq!(service.find_by_email(EMAIL).await.unwrap().nickname, "renamed");

    assert_eq!(
        service.update_profile(EMAIL, "").await,
        Err(DomainError::Validation(ValidationError::InvalidNickname))
    );
}

#[tokio::test]
async fn test_update_password() {
    let (service, _) = create_test_service();
    service.sign_up(sign_up_command(EMAIL)).await.unwrap();

    service.update_password(EMAIL, "changed12#").await.unwrap();

    assert!(service.check_password(EMAIL, "changed12#").await.is_ok());
    assert!(service.check_password(EMAIL, "password1!").await.is_err());
}

#[tokio::test]
async fn test_delete_removes_cart_items() {
    let (service, store) = create_test_service();
    let customer = service.sign_up(sign_up_command(EMAIL)).await.unwrap();
    store.save(customer.id, 1, 2).await.unwrap();

    service.delete(EMAIL).await.unwrap();

    assert_eq!(store.cart_item_count().await, 0);
    assert_eq!(
        service.find_by_email(EMAIL).await,
        Err(DomainError::Customer(CustomerError::CustomerNotFound))
    );
    assert_eq!(
        service.delete(EMAIL).await,
        Err(DomainError::Customer(CustomerError::CustomerNotFound))
    );
}
