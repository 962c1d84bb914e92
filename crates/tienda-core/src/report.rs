//! # Sales Report
//!
//! Aggregates archived orders into per-product quantities sold.
//!
//! ```text
//! orders ──► tally_quantities ──► { product_id → Σ quantity }
//!                                        │
//!                       lookup(product_id) (missing → skipped)
//!                                        │
//!                                        ▼
//!                     rank: quantity_sold desc, product id asc
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{Cart, Product, TopSellingEntry};

/// Sums quantities per product id across every item of every order.
pub fn tally_quantities(orders: &[Cart]) -> HashMap<String, i64> {
    let mut counts: HashMap<String, i64> = HashMap::new();
    for item in orders.iter().flat_map(|order| order.items.iter()) {
        *counts.entry(item.product_id.clone()).or_insert(0) += item.quantity;
    }
    counts
}

/// Builds the top-selling report.
///
/// `lookup` resolves a product id to the current product. Products that no
/// longer exist are left out without error, as are zero counts.
pub fn top_selling<F>(orders: &[Cart], mut lookup: F) -> Vec<TopSellingEntry>
where
    F: FnMut(&str) -> Option<Product>,
{
    let entries = tally_quantities(orders)
        .into_iter()
        .filter(|(_, quantity)| *quantity != 0)
        .filter_map(|(product_id, quantity_sold)| {
            lookup(&product_id).map(|product| TopSellingEntry {
                product,
                quantity_sold,
            })
        })
        .collect();

    rank(entries)
}

/// Sorts by quantity sold, highest first; ties by product id ascending.
pub fn rank(mut entries: Vec<TopSellingEntry>) -> Vec<TopSellingEntry> {
    entries.sort_by(|a, b| match b.quantity_sold.cmp(&a.quantity_sold) {
        Ordering::Equal => a.product.id.cmp(&b.product.id),
        other => other,
    });
    entries
}
