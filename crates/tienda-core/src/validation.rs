//! # Validation Module
//!
//! Input validation for Tienda.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum Json)                                   │
//! │  └── Shape checks: body parses, fields have the right types            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Business rules: positive quantities, non-blank names, ...         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── Unique usernames                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tienda_core::validation::{validate_quantity, validate_username};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(0).is_err());
//! assert!(validate_username("ana").is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::NewProduct;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted username.
pub const MAX_USERNAME_LEN: usize = 50;

/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 6;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be blank
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a username.
///
/// ## Rules
/// - Must not be blank
/// - At most [`MAX_USERNAME_LEN`] characters
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: MAX_USERNAME_LEN,
        });
    }

    Ok(())
}

/// Validates a password at registration.
///
/// Only the length is checked; the value itself is never trimmed or
/// altered before hashing.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity being added to a cart.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## Flow
/// ```text
/// POST /api/cart/{id}/add { quantity: 5 }
///       │
///       ▼
/// validate_quantity(5) ← THIS FUNCTION
///       │
///       ├── qty <= 0?  → InvalidInput, cart untouched
///       ├── qty > 999? → InvalidInput, cart untouched
///       └── OK → look up product and cart
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Zero is allowed (free items)
/// - Must not be negative
/// - At most [`MAX_PRICE_CENTS`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS / 100,
        });
    }

    Ok(())
}

/// Validates a stock level.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates every client-supplied product field.
pub fn validate_new_product(product: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price(product.price)?;
    validate_stock(product.stock)?;
    Ok(())
}

/// Validates that one more distinct product fits in a cart.
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
