//! Customer repository trait defining the interface for customer persistence.
//!
//! The trait is async-first and returns `DomainError` so services never see
//! driver-specific errors.

use async_trait::async_trait;

use crate::domain::entities::customer::{Customer, NewCustomer};
use crate::domain::value_objects::Nickname;
use crate::errors::DomainError;

/// Repository trait for Customer persistence operations
///
/// Customers are addressed by email because the email is the JWT subject.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use sc_core::domain::entities::customer::{Customer, NewCustomer};
/// use sc_core::domain::value_objects::Nickname;
/// use sc_core::errors::DomainError;
/// use sc_core::repositories::CustomerRepository;
///
/// struct MySqlCustomerRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl CustomerRepository for MySqlCustomerRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_id_by_email(&self, _: &str) -> Result<Option<i64>, DomainError> { Ok(None) }
/// #   async fn exists_by_email(&self, _: &str) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn save(&self, c: NewCustomer) -> Result<Customer, DomainError> { Ok(c.into_customer(1)) }
/// #   async fn update_nickname(&self, _: &str, _: &Nickname) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn update_password(&self, _: &str, _: &str) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn delete_by_email(&self, _: &str) -> Result<bool, DomainError> { Ok(false) }
/// }
/// ```
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by email
    ///
    /// # Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - No customer registered with this email
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError>;

    /// Find only the id of the customer with this email
    async fn find_id_by_email(&self, email: &str) -> Result<Option<i64>, DomainError>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Persist a new customer
    ///
    /// # Returns
    /// * `Ok(Customer)` - The stored customer with its generated id
    /// * `Err(DomainError::Customer(CustomerError::DuplicateEmail))` - Email taken
    /// * `Err(DomainError)` - Database error occurred
    async fn save(&self, customer: NewCustomer) -> Result<Customer, DomainError>;

    /// Change the nickname; `Ok(false)` when no customer matched
    async fn update_nickname(&self, email: &str, nickname: &Nickname) -> Result<bool, DomainError>;

    /// Replace the password hash; `Ok(false)` when no customer matched
    async fn update_password(&self, email: &str, password_hash: &str) -> Result<bool, DomainError>;

    /// Delete the customer together with every cart item they own
    ///
    /// # Returns
    /// * `Ok(true)` - Customer was deleted
    /// * `Ok(false)` - Customer not found
    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
