//! Cart service implementation

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{Cart, Product};
use crate::domain::value_objects::Quantity;
use crate::errors::{CartError, CustomerError, DomainError, DomainResult};
use crate::repositories::{CartItemRepository, CustomerRepository, ProductRepository};

/// Service for reading and changing customer carts
pub struct CartService<C, P, I>
where
    C: CustomerRepository,
    P: ProductRepository,
    I: CartItemRepository,
{
    customer_repository: Arc<C>,
    product_repository: Arc<P>,
    cart_item_repository: Arc<I>,
}

impl<C, P, I> CartService<C, P, I>
where
    C: CustomerRepository,
    P: ProductRepository,
    I: CartItemRepository,
{
    pub fn new(
        customer_repository: Arc<C>,
        product_repository: Arc<P>,
        cart_item_repository: Arc<I>,
    ) -> Self {
        Self {
            customer_repository,
            product_repository,
            cart_item_repository,
        }
    }

    /// Every cart line of the customer, in the order the items were added
    pub async fn find_carts(&self, email: &str) -> DomainResult<Vec<Cart>> {
        let customer_id = self.customer_id(email).await?;
        let items = self
            .cart_item_repository
            .find_all_by_customer_id(customer_id)
            .await?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<i64> = items.iter().map(|item| item.product_id).collect();
        let mut products: HashMap<i64, Product> = self
            .product_repository
            .find_by_ids(&product_ids)
            .await?
            .into_iter()
            .map(|product| (product.id, product))
            .collect();

        Ok(items
            .into_iter()
            .filter_map(|item| {
                products
                    .remove(&item.product_id)
                    .map(|product| Cart::new(product, item.quantity))
            })
            .collect())
    }

    /// Put `quantity` units of a product in the cart
    ///
    /// When the product is already in the cart the quantities are summed
    /// by a single guarded increment, so concurrent adds never overwrite
    /// each other and the sum never exceeds stock.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The cart now holds the product
    /// * `Err(CartError::ProductNotFound)` - Unknown product
    /// * `Err(CartError::InsufficientStock)` - The resulting quantity exceeds stock
    /// * `Err(CartError::InvalidProduct)` - The row could not be inserted
    pub async fn add_cart_item(&self, email: &str, product_id: i64, quantity: i32) -> DomainResult<()> {
        let quantity = Quantity::new(quantity)?;
        let customer_id = self.customer_id(email).await?;
        let product = self.product(product_id).await?;

        match self
            .cart_item_repository
            .find_by_customer_and_product(customer_id, product_id)
            .await?
        {
            Some(existing) => {
                quantity
                    .checked_add(existing.quantity)
                    .filter(|&total| product.can_supply(total))
                    .ok_or_else(|| insufficient_stock(&product))?;

                self.merge(customer_id, &product, quantity).await
            }
            None => {
                if !product.can_supply(quantity.value()) {
                    return Err(insufficient_stock(&product).into());
                }

                match self
                    .cart_item_repository
                    .save(customer_id, product_id, quantity.value())
                    .await
                {
                    Ok(id) => {
                        debug!("Cart item {} created for product {}", id, product_id);
                        Ok(())
                    }
                    Err(DomainError::Cart(CartError::InvalidProduct)) => {
                        // Lost the insert race to another add of the same product
                        if self.cart_item_repository.exists(customer_id, product_id).await? {
                            self.merge(customer_id, &product, quantity).await
                        } else {
                            Err(CartError::InvalidProduct.into())
                        }
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }

    /// Set the quantity of a product already in the cart
    pub async fn update_cart_item(
        &self,
        email: &str,
        product_id: i64,
        quantity: i32,
    ) -> DomainResult<()> {
        let quantity = Quantity::new(quantity)?;
        let customer_id = self.customer_id(email).await?;
        let product = self.product(product_id).await?;

        if !self.cart_item_repository.exists(customer_id, product_id).await? {
            return Err(CartError::ItemNotInCart.into());
        }
        if !product.can_supply(quantity.value()) {
            return Err(insufficient_stock(&product).into());
        }

        if !self
            .cart_item_repository
            .update_quantity(customer_id, product_id, quantity.value())
            .await?
        {
            return Err(CartError::ItemNotInCart.into());
        }
        Ok(())
    }

    /// Remove the single cart row holding `product_id`
    pub async fn delete_cart_item(&self, email: &str, product_id: i64) -> DomainResult<()> {
        let customer_id = self.customer_id(email).await?;
        let item = self
            .cart_item_repository
            .find_by_customer_and_product(customer_id, product_id)
            .await?
            .ok_or(CartError::ItemNotInCart)?;

        if !self.cart_item_repository.delete(item.id).await? {
            return Err(CartError::ItemNotInCart.into());
        }
        Ok(())
    }

    async fn merge(&self, customer_id: i64, product: &Product, quantity: Quantity) -> DomainResult<()> {
        if self
            .cart_item_repository
            .add_quantity(customer_id, product.id, quantity.value())
            .await?
        {
            debug!("Added {} to cart item for product {}", quantity.value(), product.id);
            return Ok(());
        }

        // Stock or the stored quantity moved since the first read
        let current = self.product(product.id).await?;
        Err(insufficient_stock(&current).into())
    }

    async fn customer_id(&self, email: &str) -> DomainResult<i64> {
        self.customer_repository
            .find_id_by_email(email)
            .await?
            .ok_or_else(|| CustomerError::CustomerNotFound.into())
    }

    async fn product(&self, product_id: i64) -> DomainResult<Product> {
        self.product_repository
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| CartError::ProductNotFound.into())
    }
}

fn insufficient_stock(product: &Product) -> CartError {
    warn!(
        "Requested quantity exceeds stock {} of product {}",
        product.stock, product.id
    );
    CartError::InsufficientStock {
        stock: product.stock,
    }
}
