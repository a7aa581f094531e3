//! Customer account service: signup, profile, password and deletion.

mod service;

#[cfg(test)]
mod tests;

pub use service::{CustomerService, SignUpCommand};
