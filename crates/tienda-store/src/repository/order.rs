//! # Order Repository
//!
//! Completed orders: cart snapshots appended at checkout and never changed
//! afterwards.

use tracing::debug;

use crate::store::Store;
use tienda_core::Cart;

/// Repository for the append-only order history.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    store: Store,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(store: Store) -> Self {
        OrderRepository { store }
    }

    /// Appends a copy of `cart`. Always succeeds.
    pub fn archive(&self, cart: &Cart) {
        let mut data = self.store.lock();
        data.orders.push(cart.clone());
        let count = data.orders.len();
        drop(data);

        debug!(cart_id = %cart.id, total = %cart.total, orders = count, "Archived order");
    }

    /// Returns a copy of every archived order, oldest first.
    pub fn list(&self) -> Vec<Cart> {
        self.store.lock().orders.clone()
    }

    pub fn count(&self) -> usize {
        self.store.lock().orders.len()
    }
}
