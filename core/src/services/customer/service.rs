//! Customer account service implementation

use std::sync::Arc;

use sc_shared::validation::mask_email;
use tracing::{info, warn};

use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::value_objects::{Email, Nickname, RawPassword};
use crate::errors::{AuthError, CustomerError, DomainResult};
use crate::repositories::CustomerRepository;
use crate::services::password::PasswordHasher;

/// Raw signup input as received from the client
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub email: String,
    pub nickname: String,
    pub password: String,
}

/// Service managing customer accounts
pub struct CustomerService<C>
where
    C: CustomerRepository,
{
    customer_repository: Arc<C>,
    password_hasher: PasswordHasher,
}

impl<C> CustomerService<C>
where
    C: CustomerRepository,
{
    pub fn new(customer_repository: Arc<C>, password_hasher: PasswordHasher) -> Self {
        Self {
            customer_repository,
            password_hasher,
        }
    }

    /// Whether no customer is registered with `email`
    pub async fn is_unique_email(&self, email: &str) -> DomainResult<bool> {
        let email = Email::parse(email)?;
        let exists = self.customer_repository.exists_by_email(email.as_str()).await?;
        Ok(!exists)
    }

    /// Register a new customer
    ///
    /// # Returns
    ///
    /// * `Ok(Customer)` - The stored customer
    /// * `Err(ValidationError)` - Email, nickname or password is malformed
    /// * `Err(CustomerError::DuplicateEmail)` - Email already registered
    pub async fn sign_up(&self, command: SignUpCommand) -> DomainResult<Customer> {
        let email = Email::parse(&command.email)?;
        let nickname = Nickname::parse(&command.nickname)?;
        let password = RawPassword::parse(&command.password)?;

        if self.customer_repository.exists_by_email(email.as_str()).await? {
            return Err(CustomerError::DuplicateEmail.into());
        }

        let password_hash = self.password_hasher.hash(password.expose())?;
        let customer = self
            .customer_repository
            .save(NewCustomer::new(email, nickname, password_hash))
            .await?;

        info!("Customer {} signed up", mask_email(&customer.email));
        Ok(customer)
    }

    /// Re-confirm the password of an authenticated customer
    pub async fn check_password(&self, email: &str, password: &str) -> DomainResult<()> {
        let customer = self.find_by_email(email).await?;
        if self.password_hasher.verify(password, &customer.password_hash)? {
            Ok(())
        } else {
            warn!("Password re-confirmation failed for {}", mask_email(email));
            Err(AuthError::PasswordMismatch.into())
        }
    }

    pub async fn find_by_email(&self, email: &str) -> DomainResult<Customer> {
        self.customer_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| CustomerError::CustomerNotFound.into())
    }

    /// Change the nickname
    pub async fn update_profile(&self, email: &str, nickname: &str) -> DomainResult<()> {
        let nickname = Nickname::parse(nickname)?;
        if !self.customer_repository.update_nickname(email, &nickname).await? {
            return Err(CustomerError::CustomerNotFound.into());
        }
        Ok(())
    }

    /// Replace the password after checking it against the password policy
    pub async fn update_password(&self, email: &str, new_password: &str) -> DomainResult<()> {
        let password = RawPassword::parse(new_password)?;
        let password_hash = self.password_hasher.hash(password.expose())?;

        if !self
            .customer_repository
            .update_password(email, &password_hash)
            .await?
        {
            return Err(CustomerError::CustomerNotFound.into());
        }

        info!("Customer {} changed password", mask_email(email));
        Ok(())
    }

    /// Delete the account and everything in its cart
    pub async fn delete(&self, email: &str) -> DomainResult<()> {
        if !self.customer_repository.delete_by_email(email).await? {
            return Err(CustomerError::CustomerNotFound.into());
        }

        info!("Customer {} deleted their account", mask_email(email));
        Ok(())
    }
}
