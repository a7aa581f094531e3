//! In-memory store implementing every repository trait.
//!
//! One store backs all three traits so that foreign keys and the account
//! deletion cascade behave like the MySQL schema.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{CartItem, Customer, NewCustomer, Product};
use crate::domain::value_objects::Nickname;
use crate::errors::{CartError, CustomerError, DomainError};
use crate::repositories::{CartItemRepository, CustomerRepository, ProductRepository};

#[derive(Debug, Default)]
struct StoreState {
    customers: BTreeMap<i64, Customer>,
    products: BTreeMap<i64, Product>,
    cart_items: BTreeMap<i64, CartItem>,
    last_customer_id: i64,
    last_cart_item_id: i64,
}

impl StoreState {
    fn customer_by_email(&self, email: &str) -> Option<&Customer> {
        self.customers.values().find(|c| c.email == email)
    }

    fn customer_by_email_mut(&mut self, email: &str) -> Option<&mut Customer> {
        self.customers.values_mut().find(|c| c.email == email)
    }
}

/// Mock repository store for testing
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    state: Arc<RwLock<StoreState>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose catalogue holds `products`
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let state = StoreState {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
            ..StoreState::default()
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    pub async fn insert_product(&self, product: Product) {
        self.state.write().await.products.insert(product.id, product);
    }

    /// Changes the stock of a product already in the catalogue
    pub async fn set_stock(&self, product_id: i64, stock: i32) {
        if let Some(product) = self.state.write().await.products.get_mut(&product_id) {
            product.stock = stock;
        }
    }

    pub async fn cart_item_count(&self) -> usize {
        self.state.read().await.cart_items.len()
    }
}

#[async_trait]
impl CustomerRepository for MockStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        Ok(self.state.read().await.customer_by_email(email).cloned())
    }

    async fn find_id_by_email(&self, email: &str) -> Result<Option<i64>, DomainError> {
        Ok(self.state.read().await.customer_by_email(email).map(|c| c.id))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.state.read().await.customer_by_email(email).is_some())
    }

    async fn save(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let mut state = self.state.write().await;
        if state.customer_by_email(customer.email.as_str()).is_some() {
            return Err(CustomerError::DuplicateEmail.into());
        }

        state.last_customer_id += 1;
        let customer = customer.into_customer(state.last_customer_id);
        state.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn update_nickname(&self, email: &str, nickname: &Nickname) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        match state.customer_by_email_mut(email) {
            Some(customer) => {
                customer.change_nickname(nickname.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_password(&self, email: &str, password_hash: &str) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        match state.customer_by_email_mut(email) {
            Some(customer) => {
                customer.change_password_hash(password_hash.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        let Some(id) = state.customer_by_email(email).map(|c| c.id) else {
            return Ok(false);
        };

        state.cart_items.retain(|_, item| item.customer_id != id);
        state.customers.remove(&id);
        Ok(true)
    }
}

#[async_trait]
impl ProductRepository for MockStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        Ok(self.state.read().await.products.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Product>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .products
            .values()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Product>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .products
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.state.read().await.products.len() as u64)
    }
}

#[async_trait]
impl CartItemRepository for MockStore {
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<CartItem>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .cart_items
            .values()
            .filter(|item| item.customer_id == customer_id)
            .copied()
            .collect())
    }

    async fn find_product_ids_by_customer_id(&self, customer_id: i64) -> Result<Vec<i64>, DomainError> {
        let items = self.find_all_by_customer_id(customer_id).await?;
        Ok(items.into_iter().map(|item| item.product_id).collect())
    }

    async fn find_by_customer_and_product(
        &self,
        customer_id: i64,
        product_id: i64,
    ) -> Result<Option<CartItem>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .cart_items
            .values()
            .find(|item| item.customer_id == customer_id && item.product_id == product_id)
            .copied())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CartItem>, DomainError> {
        Ok(self.state.read().await.cart_items.get(&id).copied())
    }

    async fn exists(&self, customer_id: i64, product_id: i64) -> Result<bool, DomainError> {
        Ok(self
            .find_by_customer_and_product(customer_id, product_id)
            .await?
            .is_some())
    }

    async fn save(&self, customer_id: i64, product_id: i64, quantity: i32) -> Result<i64, DomainError> {
        let mut state = self.state.write().await;
        let duplicate = state
            .cart_items
            .values()
            .any(|item| item.customer_id == customer_id && item.product_id == product_id);
        if duplicate
            || !state.customers.contains_key(&customer_id)
            || !state.products.contains_key(&product_id)
        {
            return Err(CartError::InvalidProduct.into());
        }

        state.last_cart_item_id += 1;
        let id = state.last_cart_item_id;
        state
            .cart_items
            .insert(id, CartItem::new(id, customer_id, product_id, quantity));
        Ok(id)
    }

    async fn add_quantity(
        &self,
        customer_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        let stock = match state.products.get(&product_id) {
            Some(product) => product.stock,
            None => return Ok(false),
        };
        match state
            .cart_items
            .values_mut()
            .find(|item| item.customer_id == customer_id && item.product_id == product_id)
        {
            Some(item) => match item.quantity.checked_add(quantity) {
                Some(total) if total <= stock => {
                    item.quantity = total;
                    Ok(true)
                }
                _ => Ok(false),
            },
            None => Ok(false),
        }
    }

    async fn update_quantity(
        &self,
        customer_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;
        match state
            .cart_items
            .values_mut()
            .find(|item| item.customer_id == customer_id && item.product_id == product_id)
        {
            Some(item) => {
                item.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.state.write().await.cart_items.remove(&id).is_some())
    }
}
