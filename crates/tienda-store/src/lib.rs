//! # tienda-store: In-Memory Data Store for Tienda
//!
//! The single authoritative holder of products, carts, users and completed
//! orders for the lifetime of the process.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tienda Data Flow                                 │
//! │                                                                         │
//! │  axum handler (add_to_cart)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartService ──► tienda-core (Cart::add_item)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  tienda-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────────────────────┐  │   │
//! │  │   │    Store      │    │           Repositories             │  │   │
//! │  │   │  (store.rs)   │    │                                    │  │   │
//! │  │   │               │◄───│ ProductRepository  CartRepository  │  │   │
//! │  │   │ Arc<Mutex<    │    │ UserRepository     OrderRepository │  │   │
//! │  │   │   StoreData>> │    │                                    │  │   │
//! │  │   └───────────────┘    └────────────────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The shared handle and its lock
//! - [`error`] - Store error types
//! - [`repository`] - Per-collection operations
//!
//! ## Usage
//!
//! ```rust
//! use tienda_core::{Money, NewProduct};
//! use tienda_store::Store;
//!
//! let store = Store::new();
//! let product = store.products().insert(NewProduct {
//!     name: "Tea".to_string(),
//!     description: String::new(),
//!     price: Money::from_cents(350),
//!     stock: 10,
//! });
//!
//! assert_eq!(store.products().get(&product.id).unwrap(), product);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreStats};

// Repository re-exports for convenience
pub use repository::cart::CartRepository;
pub use repository::order::OrderRepository;
pub use repository::product::ProductRepository;
pub use repository::user::UserRepository;
