//! Cart service module
//!
//! Reads a customer's cart and mutates it while keeping every held quantity
//! within the product's stock.

mod service;

#[cfg(test)]
mod tests;

pub use service::CartService;
