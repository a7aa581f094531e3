//! Configuration for the token service

use sc_shared::JwtConfig;

use crate::domain::entities::token::{DEFAULT_TOKEN_VALIDITY_SECONDS, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub secret: String,
    /// Access token lifetime in seconds
    pub validity_seconds: i64,
    /// Value of the `iss` claim, checked on verification
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: sc_shared::config::auth::DEFAULT_JWT_SECRET.to_string(),
            validity_seconds: DEFAULT_TOKEN_VALIDITY_SECONDS,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            validity_seconds: config.access_token_expiry,
            issuer: config.issuer.clone(),
        }
    }
}
