//! Sales reports.

use tienda_core::report;
use tienda_core::TopSellingEntry;
use tienda_store::Store;

/// Reports computed from archived orders.
#[derive(Debug, Clone)]
pub struct ReportService {
    store: Store,
}

impl ReportService {
    pub fn new(store: Store) -> Self {
        ReportService { store }
    }

    /// Products ranked by total quantity sold.
    ///
    /// The order list is copied out first; product lookups then take the
    /// lock one at a time.
    pub fn top_selling(&self) -> Vec<TopSellingEntry> {
        let orders = self.store.orders().list();
        let products = self.store.products();

        report::top_selling(&orders, |id| products.get(id).ok())
    }
}
