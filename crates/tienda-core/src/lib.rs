//! # tienda-core: Pure Business Logic for Tienda
//!
//! Domain types and the rules that operate on them. Nothing in this crate
//! locks, blocks or performs I/O; the store and the API build on top of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tienda Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/api (axum routes + services)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            tienda-store (one Mutex, four collections)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tienda-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  report   │  │   │
//! │  │   │  Product  │  │   Money   │  │ add/remove│  │  tally +  │  │   │
//! │  │   │ Cart User │  │  (cents)  │  │  totals   │  │  ranking  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Cart, User, report entries)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart mutation and total computation
//! - [`report`] - Top-selling aggregation over archived orders
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use tienda_core::{Cart, Money, NewProduct};
//!
//! let product = NewProduct {
//!     name: "Coffee".to_string(),
//!     description: String::new(),
//!     price: Money::from_cents(1000),
//!     stock: 5,
//! }
//! .into_product("p-1".to_string());
//!
//! let mut cart = Cart::new("c-1".to_string());
//! cart.add_item(&product, 2).unwrap();
//! assert_eq!(cart.total, Money::from_cents(2000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct products allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single product in a cart.
///
/// Catches fat-fingered quantities (1000 instead of 10) before they
/// end up in an archived order.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest accepted unit price, in cents (10,000,000.00).
///
/// `MAX_PRICE_CENTS × MAX_ITEM_QUANTITY × MAX_CART_ITEMS` stays well inside
/// `i64`, so a cart built from validated products cannot overflow its total.
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;
