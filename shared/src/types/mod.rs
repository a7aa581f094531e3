//! Type definitions module
//!
//! - `pagination` - Pagination for list endpoints
//! - `response` - Health check response

pub mod pagination;
pub mod response;

pub use pagination::{PaginatedResponse, Pagination, MAX_LIMIT};
pub use response::HealthResponse;
