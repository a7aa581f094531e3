//! Business services containing domain logic and use cases.

pub mod auth;
pub mod cart;
pub mod customer;
pub mod password;
pub mod product;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, LoginResult};
pub use cart::CartService;
pub use customer::{CustomerService, SignUpCommand};
pub use password::PasswordHasher;
pub use product::ProductService;
pub use token::{TokenService, TokenServiceConfig};
