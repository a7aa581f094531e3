//! Customer entity representing a registered shopper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Email, Nickname};

/// Customer entity as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Database identifier
    pub id: i64,

    /// Login email, unique across customers
    pub email: String,

    /// Display name
    pub nickname: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when the customer signed up
    pub created_at: DateTime<Utc>,

    /// Timestamp when the customer was last updated
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Changes the nickname
    pub fn change_nickname(&mut self, nickname: Nickname) {
        self.nickname = nickname.into_inner();
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn change_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}

/// A validated customer that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub email: Email,
    pub nickname: Nickname,
    pub password_hash: String,
}

impl NewCustomer {
    pub fn new(email: Email, nickname: Nickname, password_hash: String) -> Self {
        Self {
            email,
            nickname,
            password_hash,
        }
    }

    /// Builds the persisted entity once the database assigned an id
    pub fn into_customer(self, id: i64) -> Customer {
        let now = Utc::now();
        Customer {
            id,
            email: self.email.into_inner(),
            nickname: self.nickname.into_inner(),
            password_hash: self.password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
