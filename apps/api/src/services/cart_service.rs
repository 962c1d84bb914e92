//! # Cart Service
//!
//! Orchestrates a cart change across the store:
//!
//! ```text
//! add_item(cart_id, product_id, qty)
//!     │
//!     ├── validate_quantity(qty)     ── fails → InvalidInput, nothing read
//!     ├── store.products().get()     ── fails → NotFound
//!     ├── store.carts().get()        ── fails → NotFound
//!     ├── cart.add_item(&product)    ── pure, on a local copy
//!     └── store.carts().update()     ── write back
//! ```
//!
//! Each store call is atomic on its own; the sequence is not. Two concurrent
//! adds to the same cart can race and the later write wins.

use tracing::{info, warn};

use tienda_core::validation::validate_quantity;
use tienda_core::Cart;
use tienda_store::Store;

use crate::error::ApiResult;

/// Cart operations.
#[derive(Debug, Clone)]
pub struct CartService {
    store: Store,
}

impl CartService {
    pub fn new(store: Store) -> Self {
        CartService { store }
    }

    /// Stores a new empty cart.
    pub fn create_empty(&self) -> Cart {
        let cart = self.store.carts().insert(Cart::new(String::new()));
        info!(cart_id = %cart.id, "Cart created");
        cart
    }

    pub fn get(&self, cart_id: &str) -> ApiResult<Cart> {
        Ok(self.store.carts().get(cart_id)?)
    }

    /// Adds `quantity` of a product, merging with an existing line.
    pub fn add_item(&self, cart_id: &str, product_id: &str, quantity: i64) -> ApiResult<Cart> {
        validate_quantity(quantity)?;

        let product = self.store.products().get(product_id)?;
        let mut cart = self.store.carts().get(cart_id)?;

        cart.add_item(&product, quantity)?;
        let cart = self.store.carts().update(cart_id, cart)?;

        info!(
            cart_id = %cart_id,
            product_id = %product_id,
            quantity,
            line_quantity = cart.item(product_id).map_or(0, |i| i.quantity),
            total = %cart.total,
            "Item added to cart"
        );
        Ok(cart)
    }

    /// Removes a product's line from the cart.
    pub fn remove_item(&self, cart_id: &str, product_id: &str) -> ApiResult<Cart> {
        let mut cart = self.store.carts().get(cart_id)?;

        cart.remove_item(product_id)?;
        let cart = self.store.carts().update(cart_id, cart)?;

        info!(cart_id = %cart_id, product_id = %product_id, total = %cart.total, "Item removed from cart");
        Ok(cart)
    }

    /// Archives the cart as an order, then deletes it.
    ///
    /// If the delete fails after the archive (a concurrent checkout or
    /// delete got there first) the order stays archived and the checkout
    /// still succeeds.
    pub fn checkout(&self, cart_id: &str) -> ApiResult<Cart> {
        let cart = self.store.carts().get(cart_id)?;

        self.store.orders().archive(&cart);
        self.finish_checkout(&cart);

        Ok(cart)
    }

    /// Removes a cart whose order is already archived. A missing cart is
    /// only logged.
    fn finish_checkout(&self, cart: &Cart) {
        if let Err(err) = self.store.carts().delete(&cart.id) {
            warn!(cart_id = %cart.id, error = %err, "Cart already gone after archiving order");
        }

        info!(
            cart_id = %cart.id,
            lines = cart.items.len(),
            units = cart.total_quantity(),
            total = %cart.total,
            orders = self.store.orders().count(),
            "Checkout complete"
        );
    }

    /// Discards a cart without archiving it.
    pub fn delete(&self, cart_id: &str) -> ApiResult<()> {
        self.store.carts().delete(cart_id)?;
        info!(cart_id = %cart_id, "Cart deleted");
        Ok(())
    }
}
