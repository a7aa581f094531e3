//! Token service module for JWT management
//!
//! Issues HS256 access tokens whose subject is the customer email and
//! verifies them on every protected request.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
