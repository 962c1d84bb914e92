//! # Cart Logic
//!
//! Pure cart mutations. Every method either applies its change and
//! recomputes `total`, or returns an error with the cart untouched.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add_item(P1, 2)   items: [P1 x2 @10.00]             total: 20.00      │
//! │        │                                                                │
//! │  add_item(P1, 3)   items: [P1 x5 @10.00]             total: 50.00      │
//! │        │           (merged, price kept from first add)                 │
//! │        │                                                                │
//! │  remove_item(P1)   items: []                          total:  0.00      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Cart, CartItem, Product};
use crate::validation::{validate_cart_size, validate_quantity};
use crate::MAX_ITEM_QUANTITY;

impl CartItem {
    /// Creates a cart line from a product, freezing its current price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            quantity,
            price: product.price,
        }
    }

    /// Unit price × quantity, or `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.price.checked_mul_quantity(self.quantity)
    }
}

impl Cart {
    /// Creates an empty cart with total zero.
    pub fn new(id: String) -> Self {
        Cart {
            id,
            items: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - Quantity must be in 1..=999, checked before anything else
    /// - Product already in cart: quantity increases, original price kept
    /// - Product not in cart: appended at the product's current price
    /// - A total that would overflow is rejected with the cart unchanged
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        let mut items = self.items.clone();
        if let Some(item) = items.iter_mut().find(|i| i.product_id == product.id) {
            let merged = item.quantity + quantity;
            if merged > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: merged,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            item.quantity = merged;
        } else {
            validate_cart_size(items.len()).map_err(|_| CoreError::CartTooLarge {
                max: crate::MAX_CART_ITEMS,
            })?;
            items.push(CartItem::from_product(product, quantity));
        }

        self.commit(items)
    }

    /// Removes the line for `product_id` and returns it.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<CartItem> {
        let position = self
            .items
            .iter()
            .position(|i| i.product_id == product_id)
            .ok_or_else(|| CoreError::ProductNotInCart(product_id.to_string()))?;

        let mut items = self.items.clone();
        let removed = items.remove(position);
        self.commit(items)?;
        Ok(removed)
    }

    /// Σ price × quantity over the current items, or `None` on overflow.
    pub fn compute_total(&self) -> Option<Money> {
        let lines = self
            .items
            .iter()
            .map(CartItem::line_total)
            .collect::<Option<Vec<_>>>()?;
        Money::checked_sum(lines)
    }

    /// Overwrites `total` with the recomputed sum. On overflow `total` is
    /// left as it was.
    pub fn recalculate_total(&mut self) -> CoreResult<()> {
        self.total = self.compute_total().ok_or(CoreError::TotalOverflow)?;
        Ok(())
    }

    /// Returns the line for `product_id`, if any.
    pub fn item(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the lines and total together, or neither.
    fn commit(&mut self, items: Vec<CartItem>) -> CoreResult<()> {
        let previous = std::mem::replace(&mut self.items, items);
        if let Err(err) = self.recalculate_total() {
            self.items = previous;
            return Err(err);
        }
        Ok(())
    }
}
