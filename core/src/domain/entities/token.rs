//! JWT claims issued at login.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default access token lifetime (1 hour)
pub const DEFAULT_TOKEN_VALIDITY_SECONDS: i64 = 3600;

/// Default JWT issuer
pub const JWT_ISSUER: &str = "shopping-cart";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (customer email)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for `subject` valid for `validity_seconds` from now
    pub fn new(subject: impl Into<String>, issuer: impl Into<String>, validity_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(validity_seconds);

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.into(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
