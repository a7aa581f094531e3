//! Domain entities representing core business objects.

pub mod cart;
pub mod cart_item;
pub mod customer;
pub mod product;
pub mod token;

// Re-export commonly used types
pub use cart::Cart;
pub use cart_item::CartItem;
pub use customer::{Customer, NewCustomer};
pub use product::Product;
pub use token::{Claims, DEFAULT_TOKEN_VALIDITY_SECONDS, JWT_ISSUER};
