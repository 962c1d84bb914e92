//! # Cart Repository
//!
//! Active carts only. A checked-out cart moves to the
//! [`OrderRepository`](super::order::OrderRepository) and is removed here.

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::new_id;
use crate::store::Store;
use tienda_core::Cart;

/// Repository for active carts.
#[derive(Debug, Clone)]
pub struct CartRepository {
    store: Store,
}

impl CartRepository {
    /// Creates a new CartRepository.
    pub fn new(store: Store) -> Self {
        CartRepository { store }
    }

    /// Stores a cart under a fresh id. Any id on `cart` is replaced.
    pub fn insert(&self, mut cart: Cart) -> Cart {
        cart.id = new_id();

        self.store.lock().carts.insert(cart.id.clone(), cart.clone());

        debug!(id = %cart.id, items = cart.items.len(), "Inserted cart");
        cart
    }

    /// Gets a cart by id.
    pub fn get(&self, id: &str) -> StoreResult<Cart> {
        self.store
            .lock()
            .carts
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Cart", id))
    }

    /// Replaces an existing cart, keeping its id.
    pub fn update(&self, id: &str, mut cart: Cart) -> StoreResult<Cart> {
        let mut data = self.store.lock();
        let slot = data
            .carts
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("Cart", id))?;

        cart.id = id.to_string();
        *slot = cart.clone();
        drop(data);

        debug!(id = %id, items = cart.items.len(), total = %cart.total, "Updated cart");
        Ok(cart)
    }

    /// Deletes a cart.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        self.store
            .lock()
            .carts
            .remove(id)
            .map(|_| debug!(id = %id, "Deleted cart"))
            .ok_or_else(|| StoreError::not_found("Cart", id))
    }
}
