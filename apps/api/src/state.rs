//! Shared application state.

use tienda_store::Store;

use crate::password::prepare_dummy_hash;
use crate::services::{CartService, ProductService, ReportService, UserService};

/// State handed to every handler. Cloning shares the same store.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    /// Wraps `store` and prepares the login dummy hash.
    pub fn new(store: Store) -> Self {
        prepare_dummy_hash();
        AppState { store }
    }

    pub fn products(&self) -> ProductService {
        ProductService::new(self.store.clone())
    }

    pub fn carts(&self) -> CartService {
        CartService::new(self.store.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.store.clone())
    }

    pub fn reports(&self) -> ReportService {
        ReportService::new(self.store.clone())
    }
}
