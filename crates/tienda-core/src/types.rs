//! # Domain Types
//!
//! Core domain types used throughout Tienda.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Cart       │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  items[]        │   │  username (key) │       │
//! │  │  price (Money)  │   │  total (derived)│   │  password_hash  │       │
//! │  │  stock          │   └────────┬────────┘   └─────────────────┘       │
//! │  └─────────────────┘            │                                       │
//! │                        ┌────────▼────────┐   ┌─────────────────┐       │
//! │                        │    CartItem     │   │ TopSellingEntry │       │
//! │                        │  product_id     │   │  product        │       │
//! │                        │  quantity > 0   │   │  quantity_sold  │       │
//! │                        │  price (frozen) │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A completed order is a [`Cart`] snapshot; there is no separate order type.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4), assigned by the store.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-form description shown on the product card.
    pub description: String,

    /// Current price. Carts freeze this value when an item is first added.
    #[ts(type = "number")]
    pub price: Money,

    /// Units on hand. Informational only; sales do not decrement it.
    pub stock: i64,
}

/// Product fields supplied by a client on create or update.
///
/// Any `id` in the request body is ignored: ids belong to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[ts(type = "number")]
    pub price: Money,

    #[serde(default)]
    pub stock: i64,
}

impl NewProduct {
    /// Attaches a store-assigned id.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A line in a cart.
///
/// `price` is a snapshot of the product price at the moment the product
/// was first added; later product updates do not reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub quantity: i64,
    #[ts(type = "number")]
    pub price: Money,
}

/// A shopping cart. Also the shape of a completed order.
///
/// ## Invariants
/// - Items are unique by `product_id`
/// - Every quantity is > 0
/// - `total` equals Σ price × quantity over `items`
///
/// Mutate through the methods in [`crate::cart`]; they keep all three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    pub id: String,
    pub items: Vec<CartItem>,
    #[ts(type = "number")]
    pub total: Money,
}

// =============================================================================
// User
// =============================================================================

/// A registered user.
///
/// The password hash never leaves the process: it is skipped on
/// serialization.
#[derive(Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip)]
    #[ts(skip)]
    pub password_hash: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Fields needed to insert a user. The store assigns id and timestamp.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Username/password pair from a register or login request.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Report
// =============================================================================

/// One row of the top-selling report.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct TopSellingEntry {
    pub product: Product,
    pub quantity_sold: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_ignores_client_id() {
        let draft: NewProduct = serde_json::from_str(
            r#"{"id": "client-chosen", "name": "Tea", "price": 3.5}"#,
        )
        .unwrap();
        let product = draft.into_product("store-id".to_string());

        assert_eq!(product.id, "store-id");
        assert_eq!(product.price.cents(), 350);
        assert_eq!(product.description, "");
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_cart_item_wire_names() {
        let item = CartItem {
            product_id: "p-1".to_string(),
            quantity: 2,
            price: Money::from_cents(1000),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["productId"], "p-1");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["price"], 10.0);
    }

    #[test]
    fn test_user_serialization_hides_password_hash() {
        let user = User {
            id: "u-1".to_string(),
            username: "ana".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"username\":\"ana\""));
        assert!(!format!("{user:?}").contains("argon2"));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            username: "ana".to_string(),
            password: "hunter22".to_string(),
        };
        assert!(!format!("{credentials:?}").contains("hunter22"));
    }

    #[test]
    fn test_report_entry_wire_name() {
        let entry = TopSellingEntry {
            product: NewProduct {
                name: "Tea".to_string(),
                description: String::new(),
                price: Money::from_cents(100),
                stock: 1,
            }
            .into_product("p-1".to_string()),
            quantity_sold: 7,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["quantity_sold"], 7);
        assert_eq!(json["product"]["id"], "p-1");
    }
}
