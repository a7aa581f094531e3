use serde::{Deserialize, Serialize};
use sc_shared::validation::is_valid_nickname;

use crate::errors::ValidationError;

/// Display name, 1 to 10 characters after trimming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nickname(String);

impl Nickname {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if is_valid_nickname(raw) {
            Ok(Self(raw.trim().to_string()))
        } else {
            Err(ValidationError::InvalidNickname)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
