//! MySQL repository implementations

mod cart_item_repository_impl;
mod customer_repository_impl;
mod product_repository_impl;

pub use cart_item_repository_impl::MySqlCartItemRepository;
pub use customer_repository_impl::MySqlCustomerRepository;
pub use product_repository_impl::MySqlProductRepository;

use sc_core::errors::DomainError;

/// Map an SQLx failure to a domain database error with context
pub(crate) fn database_error(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!("{}: {}", context, e);
    DomainError::database(format!("{}: {}", context, e))
}

/// Whether the error is a unique-key or foreign-key violation
pub(crate) fn is_constraint_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => db.is_unique_violation() || db.is_foreign_key_violation(),
        _ => false,
    }
}
