//! # Repository Module
//!
//! Per-collection operations over the shared [`Store`](crate::Store).
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Handles                                   │
//! │                                                                         │
//! │  Service                                                               │
//! │       │                                                                 │
//! │       │  store.carts().get(&cart_id)                                   │
//! │       ▼                                                                 │
//! │  CartRepository ── holds a Store clone ── same Arc<Mutex<..>>          │
//! │  ├── insert(&self, cart)                                               │
//! │  ├── get(&self, id)                                                    │
//! │  ├── update(&self, id, cart)                                           │
//! │  └── delete(&self, id)                                                 │
//! │                                                                         │
//! │  Every method takes the lock once and returns owned copies; nothing   │
//! │  handed out borrows from the store.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and batch insert
//! - [`CartRepository`](cart::CartRepository) - Active carts
//! - [`UserRepository`](user::UserRepository) - Users keyed by username
//! - [`OrderRepository`](order::OrderRepository) - Append-only completed orders

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

/// Generates a fresh store id.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
