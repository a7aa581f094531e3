//! Authentication service module
//!
//! Email and password login issuing JWT access tokens, and resolution of a
//! bearer token back to the customer email.

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, LoginResult};
