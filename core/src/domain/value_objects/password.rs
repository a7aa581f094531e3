use std::fmt;

use sc_shared::validation::is_valid_password;

use crate::errors::ValidationError;

/// A plaintext password that satisfies the password policy.
///
/// Only lives for the duration of a request; it is hashed before storage and
/// its `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct RawPassword(String);

impl RawPassword {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if is_valid_password(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidPassword)
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPassword(***)")
    }
}
