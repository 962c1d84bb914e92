//! Product catalogue service.

use tracing::info;

use tienda_core::validation::validate_new_product;
use tienda_core::{NewProduct, Product};
use tienda_store::Store;

use crate::error::ApiResult;

/// Validates product input and forwards it to the store.
#[derive(Debug, Clone)]
pub struct ProductService {
    store: Store,
}

impl ProductService {
    pub fn new(store: Store) -> Self {
        ProductService { store }
    }

    pub fn list(&self) -> Vec<Product> {
        self.store.products().list()
    }

    pub fn get(&self, id: &str) -> ApiResult<Product> {
        Ok(self.store.products().get(id)?)
    }

    pub fn create(&self, draft: NewProduct) -> ApiResult<Product> {
        validate_new_product(&draft)?;

        let product = self.store.products().insert(draft);
        info!(id = %product.id, name = %product.name, price = %product.price, "Product created");
        Ok(product)
    }

    /// Creates every product or none: the whole batch is validated first.
    pub fn create_batch(&self, drafts: Vec<NewProduct>) -> ApiResult<Vec<Product>> {
        for draft in &drafts {
            validate_new_product(draft)?;
        }

        let products = self.store.products().insert_batch(drafts);
        info!(count = products.len(), "Product batch created");
        Ok(products)
    }

    pub fn update(&self, id: &str, draft: NewProduct) -> ApiResult<Product> {
        validate_new_product(&draft)?;
        Ok(self.store.products().update(id, draft)?)
    }

    pub fn delete(&self, id: &str) -> ApiResult<()> {
        self.store.products().delete(id)?;
        info!(id = %id, "Product deleted");
        Ok(())
    }
}
