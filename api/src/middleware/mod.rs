pub mod auth;
pub mod cors;
pub mod security;

pub use auth::{AuthContext, JwtAuth, TokenAuthenticator};
pub use cors::create_cors;
pub use security::SecurityMiddleware;
