//! Main authentication service implementation

use std::sync::Arc;

use sc_shared::validation::mask_email;
use tracing::{debug, info};

use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::CustomerRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Outcome of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub access_token: String,
    pub nickname: String,
}

/// Authentication service for the login flow
pub struct AuthService<C>
where
    C: CustomerRepository,
{
    /// Customer repository for credential lookup
    customer_repository: Arc<C>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
}

impl<C> AuthService<C>
where
    C: CustomerRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `customer_repository` - Repository for customer lookup
    /// * `token_service` - Service for JWT token management
    /// * `password_hasher` - bcrypt hasher used to check credentials
    pub fn new(
        customer_repository: Arc<C>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            customer_repository,
            token_service,
            password_hasher,
        }
    }

    /// Log a customer in with email and password
    ///
    /// Unknown emails and wrong passwords fail with the same
    /// `AuthError::InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResult> {
        let email = email.trim();
        let customer = match self.customer_repository.find_by_email(email).await? {
            Some(customer) => customer,
            None => {
                debug!("Login failed for {}: unknown email", mask_email(email));
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.password_hasher.verify(password, &customer.password_hash)? {
            debug!("Login failed for {}: wrong password", mask_email(email));
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.token_service.create_token(&customer.email)?;
        info!("Customer {} logged in", mask_email(&customer.email));

        Ok(LoginResult {
            access_token,
            nickname: customer.nickname,
        })
    }

    /// Resolve a bearer token to the email it was issued for
    pub fn authenticate(&self, token: &str) -> Result<String, DomainError> {
        self.token_service.get_payload(token)
    }
}
