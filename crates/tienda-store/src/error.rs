//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Missing key / taken username                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Names the entity and the offending key     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (apps/api) ← 404 / 409 JSON response                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - Unknown product or cart id
    /// - Unknown username on lookup
    /// - Cart already checked out or deleted
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique key already taken.
    ///
    /// ## When This Occurs
    /// - Registering a username that exists
    #[error("{field} '{value}' is already taken")]
    Duplicate { field: String, value: String },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a Duplicate error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::not_found("Product", "p-1").to_string(),
            "Product not found: p-1"
        );
        assert_eq!(
            StoreError::duplicate("username", "ana").to_string(),
            "username 'ana' is already taken"
        );
    }
}
