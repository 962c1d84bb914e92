//! # Product Repository
//!
//! ## Key Operations
//! - CRUD by id
//! - Batch insert under one lock acquisition
//! - Deterministic listing (name, then id)

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::repository::new_id;
use crate::store::Store;
use tienda_core::{NewProduct, Product};

/// Repository for product operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.products();
///
/// let product = repo.insert(draft);
/// let same = repo.get(&product.id)?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    store: Store,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(store: Store) -> Self {
        ProductRepository { store }
    }

    /// Lists every product, sorted by name and then id.
    pub fn list(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.store.lock().products.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        debug!(count = products.len(), "Listed products");
        products
    }

    /// Gets a product by id.
    pub fn get(&self, id: &str) -> StoreResult<Product> {
        self.store
            .lock()
            .products
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("Product", id))
    }

    /// Stores a product under a fresh id and returns the stored copy.
    pub fn insert(&self, draft: NewProduct) -> Product {
        let product = draft.into_product(new_id());

        self.store
            .lock()
            .products
            .insert(product.id.clone(), product.clone());

        debug!(id = %product.id, name = %product.name, "Inserted product");
        product
    }

    /// Stores several products, each under its own fresh id.
    ///
    /// All of them become visible at once: the lock is held for the whole
    /// batch. Output order matches input order.
    pub fn insert_batch(&self, drafts: Vec<NewProduct>) -> Vec<Product> {
        let products: Vec<Product> = drafts
            .into_iter()
            .map(|draft| draft.into_product(new_id()))
            .collect();

        let mut data = self.store.lock();
        for product in &products {
            data.products.insert(product.id.clone(), product.clone());
        }
        drop(data);

        debug!(count = products.len(), "Inserted product batch");
        products
    }

    /// Replaces every field of an existing product except its id.
    pub fn update(&self, id: &str, draft: NewProduct) -> StoreResult<Product> {
        let mut data = self.store.lock();
        let slot = data
            .products
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("Product", id))?;

        *slot = draft.into_product(id.to_string());
        let updated = slot.clone();
        drop(data);

        debug!(id = %id, "Updated product");
        Ok(updated)
    }

    /// Deletes a product.
    ///
    /// Carts and archived orders that reference it keep their lines.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        self.store
            .lock()
            .products
            .remove(id)
            .map(|_| debug!(id = %id, "Deleted product"))
            .ok_or_else(|| StoreError::not_found("Product", id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
