use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use sc_core::domain::entities::Customer;
use sc_core::services::auth::LoginResult;
use sc_shared::validation::is_valid_password;

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if is_valid_password(password) {
        Ok(())
    } else {
        let mut error = ValidationError::new("password_policy");
        error.message = Some(
            "Password must be 8-20 characters and contain a letter, a digit and a special character"
                .into(),
        );
        Err(error)
    }
}

/// Surrounding whitespace is dropped before the email is validated
fn trim_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmailCheckQuery {
    #[serde(deserialize_with = "trim_string")]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailCheckResponse {
    pub unique: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    #[serde(deserialize_with = "trim_string")]
    #[validate(
        email(message = "Invalid email format"),
        length(max = 64, message = "Email is too long")
    )]
    pub email: String,
    #[validate(length(min = 1, max = 10, message = "Nickname must be between 1 and 10 characters"))]
    pub nickname: String,
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(deserialize_with = "trim_string")]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub nickname: String,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            access_token: result.access_token,
            nickname: result.nickname,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordCheckRequest {
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 10, message = "Nickname must be between 1 and 10 characters"))]
    pub nickname: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

/// Public view of a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub email: String,
    pub nickname: String,
}

impl From<Customer> for MemberResponse {
    fn from(customer: Customer) -> Self {
        Self {
            email: customer.email,
            nickname: customer.nickname,
        }
    }
}
