//! Unit tests for cart service

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::cart_item::CartItem;
use crate::domain::entities::{NewCustomer, Product};
use crate::domain::value_objects::{Email, Nickname};
use crate::errors::{CartError, CustomerError, DomainError, ValidationError};
use crate::repositories::{CartItemRepository, CustomerRepository, MockStore};
use crate::services::cart::CartService;

const EMAIL: &str = "email@email.com";

type TestCartService = CartService<MockStore, MockStore, MockStore>;

async fn create_test_service() -> (TestCartService, Arc<MockStore>) {
    let store = Arc::new(MockStore::with_products(vec![
        Product::new(1, "apple", 1000, 10).with_image_url("http://image/apple.png"),
        Product::new(2, "banana", 2000, 3),
    ]));
    CustomerRepository::save(
        store.as_ref(),
        NewCustomer::new(
            Email::parse(EMAIL).unwrap(),
            Nickname::parse("shopper").unwrap(),
            "hash".to_string(),
        ),
    )
    .await
    .unwrap();

    let service = CartService::new(store.clone(), store.clone(), store.clone());
    (service, store)
}

/// Cart items whose row changes between the service's read and its write,
/// the way a second request for the same customer would change it
struct RacingCartItems {
    store: Arc<MockStore>,
    race: Race,
}

enum Race {
    /// Another add bumps the stored quantity to this value
    Bump(i32),
    /// Another add inserts the row first with this quantity
    Insert(i32),
}

#[async_trait]
impl CartItemRepository for RacingCartItems {
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<CartItem>, DomainError> {
        self.store.find_all_by_customer_id(customer_id).await
    }

    async fn find_product_ids_by_customer_id(&self, customer_id: i64) -> Result<Vec<i64>, DomainError> {
        self.store.find_product_ids_by_customer_id(customer_id).await
    }

    async fn find_by_customer_and_product(
        &self,
        customer_id: i64,
        product_id: i64,
    ) -> Result<Option<CartItem>, DomainError> {
        let seen = self.store.find_by_customer_and_product(customer_id, product_id).await?;
        match self.race {
            Race::Bump(quantity) => {
                self.store.update_quantity(customer_id, product_id, quantity).await?;
            }
            Race::Insert(quantity) => {
                CartItemRepository::save(self.store.as_ref(), customer_id, product_id, quantity).await?;
            }
        }
        Ok(seen)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CartItem>, DomainError> {
        CartItemRepository::find_by_id(self.store.as_ref(), id).await
    }

    async fn exists(&self, customer_id: i64, product_id: i64) -> Result<bool, DomainError> {
        self.store.exists(customer_id, product_id).await
    }

    async fn save(&self, customer_id: i64, product_id: i64, quantity: i32) -> Result<i64, DomainError> {
        CartItemRepository::save(self.store.as_ref(), customer_id, product_id, quantity).await
    }

    async fn update_quantity(
        &self,
        customer_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> Result<bool, DomainError> {
        self.store.update_quantity(customer_id, product_id, quantity).await
    }

    async fn add_quantity(
        &self,
        customer_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> Result<bool, DomainError> {
        self.store.add_quantity(customer_id, product_id, quantity).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.store.delete(id).await
    }
}

fn racing_service(
    store: &Arc<MockStore>,
    race: Race,
) -> CartService<MockStore, MockStore, RacingCartItems> {
    let cart_items = Arc::new(RacingCartItems {
        store: store.clone(),
        race,
    });
    CartService::new(store.clone(), store.clone(), cart_items)
}

fn insufficient(stock: i32) -> Result<(), DomainError> {
    Err(DomainError::Cart(CartError::InsufficientStock { stock }))
}

#[tokio::test]
async fn test_add_and_find_carts() {
    let (service, _) = create_test_service().await;

    service.add_cart_item(EMAIL, 2, 1).await.unwrap();
    service.add_cart_item(EMAIL, 1, 4).await.unwrap();

    let carts = service.find_carts(EMAIL).await.unwrap();
    assert_eq!(carts.len(), 2);
    assert_eq!(carts[0].product.id, 2);
    assert_eq!(carts[1].product.id, 1);
    assert_eq!(carts[1].quantity, 4);
    assert_eq!(carts[1].product.image_url.as_deref(), Some("http://image/apple.png"));
}

#[tokio::test]
async fn test_find_carts_empty() {
    let (service, _) = create_test_service().await;

    assert!(service.find_carts(EMAIL).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_merges_existing_item() {
    let (service, store) = create_test_service().await;

    service.add_cart_item(EMAIL, 1, 3).await.unwrap();
    service.add_cart_item(EMAIL, 1, 2).await.unwrap();

    assert_eq!(store.cart_item_count().await, 1);
    let carts = service.find_carts(EMAIL).await.unwrap();
    assert_eq!(carts[0].quantity, 5);
}

#[tokio::test]
async fn test_add_rejects_quantity_over_stock() {
    let (service, store) = create_test_service().await;

    assert_eq!(service.add_cart_item(EMAIL, 2, 4).await, insufficient(3));
    assert_eq!(store.cart_item_count().await, 0);
}

#[tokio::test]
async fn test_add_rejects_merge_over_stock() {
    let (service, _) = create_test_service().await;
    service.add_cart_item(EMAIL, 2, 2).await.unwrap();

    assert_eq!(service.add_cart_item(EMAIL, 2, 2).await, insufficient(3));

    let carts = service.find_carts(EMAIL).await.unwrap();
    assert_eq!(carts[0].quantity, 2);
}

#[tokio::test]
async fn test_add_unknown_product() {
    let (service, _) = create_test_service().await;

    assert_eq!(
        service.add_cart_item(EMAIL, 99, 1).await,
        Err(DomainError::Cart(CartError::ProductNotFound))
    );
}

#[tokio::test]
async fn test_add_rejects_non_positive_quantity() {
    let (service, _) = create_test_service().await;

    assert_eq!(
        service.add_cart_item(EMAIL, 1, 0).await,
        Err(DomainError::Validation(ValidationError::InvalidQuantity { value: 0 }))
    );
}

#[tokio::test]
async fn test_unknown_customer() {
    let (service, _) = create_test_service().await;

    assert_eq!(
        service.add_cart_item("nobody@email.com", 1, 1).await,
        Err(DomainError::Customer(CustomerError::CustomerNotFound))
    );
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let (service, _) = create_test_service().await;
    service.add_cart_item(EMAIL, 1, 1).await.unwrap();

    service.update_cart_item(EMAIL, 1, 7).await.unwrap();
    service.update_cart_item(EMAIL, 1, 7).await.unwrap();

    let carts = service.find_carts(EMAIL).await.unwrap();
    assert_eq!(carts[0].quantity, 7);
}

#[tokio::test]
async fn test_update_requires_item_in_cart() {
    let (service, _) = create_test_service().await;

    assert_eq!(
        service.update_cart_item(EMAIL, 1, 1).await,
        Err(DomainError::Cart(CartError::ItemNotInCart))
    );
}

#[tokio::test]
async fn test_update_rejects_quantity_over_stock() {
    let (service, store) = create_test_service().await;
    service.add_cart_item(EMAIL, 1, 5).await.unwrap();
    store.set_stock(1, 6).await;

    assert_eq!(service.update_cart_item(EMAIL, 1, 7).await, insufficient(6));
    assert!(service.update_cart_item(EMAIL, 1, 6).await.is_ok());
}

#[tokio::test]
async fn test_delete_removes_exactly_one_row() {
    let (service, store) = create_test_service().await;
    let other = CustomerRepository::save(
        store.as_ref(),
        NewCustomer::new(
            Email::parse("other@email.com").unwrap(),
            Nickname::parse("other").unwrap(),
            "hash".to_string(),
        ),
    )
    .await
    .unwrap();
    CartItemRepository::save(store.as_ref(), other.id, 1, 1).await.unwrap();
    service.add_cart_item(EMAIL, 1, 1).await.unwrap();
    service.add_cart_item(EMAIL, 2, 1).await.unwrap();

    service.delete_cart_item(EMAIL, 1).await.unwrap();

    assert_eq!(store.cart_item_count().await, 2);
    let carts = service.find_carts(EMAIL).await.unwrap();
    assert_eq!(carts.len(), 1);
    assert_eq!(carts[0].product.id, 2);
    assert!(store.exists(other.id, 1).await.unwrap());
}

#[tokio::test]
async fn test_delete_missing_item() {
    let (service, _) = create_test_service().await;

    assert_eq!(
        service.delete_cart_item(EMAIL, 1).await,
        Err(DomainError::Cart(CartError::ItemNotInCart))
    );
}

#[tokio::test]
async fn test_add_keeps_concurrent_increment() {
    let (service, store) = create_test_service().await;
    service.add_cart_item(EMAIL, 1, 2).await.unwrap();

    // Read sees 2, another request raises it to 5 before the write
    let racing = racing_service(&store, Race::Bump(5));
    racing.add_cart_item(EMAIL, 1, 3).await.unwrap();

    let carts = service.find_carts(EMAIL).await.unwrap();
    assert_eq!(carts[0].quantity, 8);
}

#[tokio::test]
async fn test_add_rejects_concurrent_increment_over_stock() {
    let (service, store) = create_test_service().await;
    service.add_cart_item(EMAIL, 1, 2).await.unwrap();

    // 2 + 3 fits the stock of 10, 8 + 3 does not
    let racing = racing_service(&store, Race::Bump(8));
    assert_eq!(racing.add_cart_item(EMAIL, 1, 3).await, insufficient(10));

    let carts = service.find_carts(EMAIL).await.unwrap();
    assert_eq!(carts[0].quantity, 8);
}

#[tokio::test]
async fn test_add_merges_into_concurrent_insert() {
    let (service, store) = create_test_service().await;

    let racing = racing_service(&store, Race::Insert(4));
    racing.add_cart_item(EMAIL, 1, 3).await.unwrap();

    assert_eq!(store.cart_item_count().await, 1);
    let carts = service.find_carts(EMAIL).await.unwrap();
    assert_eq!(carts[0].quantity, 7);
}
