//! # Error Types
//!
//! Domain failures raised by tienda-core.
//!
//! ## Where They Go
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ValidationError ──► CoreError::Validation ──┐                         │
//! │  (bad field)                                 │                         │
//! │                                              ├──► ApiError ──► 400/404 │
//! │  CoreError (cart rule broken) ───────────────┘                         │
//! │                                                                         │
//! │  StoreError (tienda-store) ─────────────────────► ApiError ──► 404/409 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Cart Rules
// =============================================================================

/// A cart operation broke a domain rule.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Removal targeted a product with no line in the cart.
    #[error("Product {0} is not in the cart")]
    ProductNotInCart(String),

    /// Adding one more distinct product would exceed the cart limit.
    #[error("A cart holds at most {max} different products")]
    CartTooLarge { max: usize },

    /// Merging quantities would exceed the per-line limit.
    #[error("Quantity {requested} is above the per-item limit of {max}")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// The cart total would not fit in the money type.
    #[error("Cart total exceeds the largest supported amount")]
    TotalOverflow,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Field Validation
// =============================================================================

/// A single field failed validation. Raised before any state changes.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Required { field: String },

    #[error("{field} needs at least {min} characters")]
    TooShort { field: String, min: usize },

    #[error("{field} allows at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("{field} must be from {min} to {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    #[error("{field} cannot be negative")]
    Negative { field: String },
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_rule_messages() {
        let err = CoreError::QuantityTooLarge {
            requested: 1200,
            max: 999,
        };
        assert_eq!(err.to_string(), "Quantity 1200 is above the per-item limit of 999");

        let err = CoreError::ProductNotInCart("p-1".to_string());
        assert_eq!(err.to_string(), "Product p-1 is not in the cart");
    }

    #[test]
    fn test_field_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be greater than zero");

        let err = ValidationError::TooShort {
            field: "password".to_string(),
            min: 6,
        };
        assert_eq!(err.to_string(), "password needs at least 6 characters");
    }

    #[test]
    fn test_wrapped_validation_keeps_message() {
        let core_err: CoreError = ValidationError::Negative {
            field: "price".to_string(),
        }
        .into();

        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "price cannot be negative");
    }
}
