//! Common validation utilities for customer input

use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_MAX_LENGTH: usize = 64;
pub const NICKNAME_MIN_LENGTH: usize = 1;
pub const NICKNAME_MAX_LENGTH: usize = 10;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 20;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static LETTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]").expect("letter pattern is valid"));

static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("digit pattern is valid"));

static SPECIAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9\s]").expect("special pattern is valid"));

/// Email shape check (length bounded, one `@`, dotted domain with a TLD)
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.len() <= EMAIL_MAX_LENGTH && EMAIL_REGEX.is_match(email)
}

/// Nickname is 1..=10 characters after trimming
pub fn is_valid_nickname(nickname: &str) -> bool {
    let count = nickname.trim().chars().count();
    (NICKNAME_MIN_LENGTH..=NICKNAME_MAX_LENGTH).contains(&count)
}

/// Password is 8..=20 characters with at least one letter, digit and special character.
/// Whitespace is not allowed.
pub fn is_valid_password(password: &str) -> bool {
    let count = password.chars().count();
    (PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&count)
        && !password.chars().any(char::is_whitespace)
        && LETTER_REGEX.is_match(password)
        && DIGIT_REGEX.is_match(password)
        && SPECIAL_REGEX.is_match(password)
}

/// Mask an email for logging: `jane.doe@example.com` -> `ja***@example.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let visible: String = local.chars().take(2).collect();
            format!("{}***@{}", visible, domain)
        }
        None => String::from("***"),
    }
}
