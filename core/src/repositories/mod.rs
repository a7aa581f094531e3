pub mod cart_item;
pub mod customer;
pub mod product;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;


pub use cart_item::CartItemRepository;
pub use customer::CustomerRepository;
pub use product::ProductRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockStore;
