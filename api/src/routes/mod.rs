//! Route handlers grouped by resource

pub mod carts;
pub mod health;
pub mod members;
pub mod products;
