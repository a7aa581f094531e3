//! bcrypt password hashing

use sc_shared::PasswordConfig;

use crate::errors::DomainError;

/// Hashes and verifies customer passwords with bcrypt
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }

    pub fn hash(&self, raw: &str) -> Result<String, DomainError> {
        bcrypt::hash(raw, self.cost)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    /// Checks `raw` against a stored hash
    pub fn verify(&self, raw: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(raw, hash)
            .map_err(|e| DomainError::internal(format!("Failed to verify password: {}", e)))
    }
}
