//! # Store Handle
//!
//! One mutex guards all four collections. Every repository call locks it
//! once, does its work without awaiting or calling back into the store,
//! and releases it.
//!
//! ## Why One Lock?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Store { inner: Arc<Mutex<StoreData>> }                                 │
//! │                                                                         │
//! │   products: HashMap<id, Product>                                       │
//! │   carts:    HashMap<id, Cart>                                          │
//! │   users:    HashMap<username, User>                                    │
//! │   orders:   Vec<Cart>            (append-only)                         │
//! │                                                                         │
//! │  Handler A ──lock──► insert cart ──unlock                              │
//! │  Handler B ─────────wait────────► get product ──unlock                 │
//! │                                                                         │
//! │  Each call is atomic. A sequence of calls (read product, read cart,    │
//! │  write cart) is not.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tienda_core::{Cart, Product, User};

use crate::repository::cart::CartRepository;
use crate::repository::order::OrderRepository;
use crate::repository::product::ProductRepository;
use crate::repository::user::UserRepository;

/// The collections behind the lock.
#[derive(Debug, Default)]
pub(crate) struct StoreData {
    pub(crate) products: HashMap<String, Product>,
    pub(crate) carts: HashMap<String, Cart>,
    /// Keyed by username, the unique lookup key.
    pub(crate) users: HashMap<String, User>,
    pub(crate) orders: Vec<Cart>,
}

/// Snapshot of collection sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    pub products: usize,
    pub carts: usize,
    pub users: usize,
    pub orders: usize,
}

/// Shared handle passed to whatever needs storage access.
///
/// Cloning is cheap and every clone sees the same data.
///
/// ## Usage in Handlers
/// ```rust,ignore
/// async fn get_product(
///     State(state): State<AppState>,
///     Path(id): Path<String>,
/// ) -> Result<Json<Product>, ApiError> {
///     Ok(Json(state.store.products().get(&id)?))
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<StoreData>>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store::default()
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Returns the cart repository.
    pub fn carts(&self) -> CartRepository {
        CartRepository::new(self.clone())
    }

    /// Returns the user repository.
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.clone())
    }

    /// Returns the completed-order repository.
    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.clone())
    }

    /// Collection sizes, read under a single lock acquisition.
    pub fn stats(&self) -> StoreStats {
        let data = self.lock();
        StoreStats {
            products: data.products.len(),
            carts: data.carts.len(),
            users: data.users.len(),
            orders: data.orders.len(),
        }
    }

    /// Acquires the store lock.
    ///
    /// A panic while holding the guard cannot leave a map half-written
    /// (every mutation is a single insert, remove or push), so a poisoned
    /// lock is taken over rather than propagated.
    pub(crate) fn lock(&self) -> MutexGuard<'_, StoreData> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
