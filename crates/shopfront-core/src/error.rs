//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  └── CoreError        - Cart rule violations                           │
//! │                                                                         │
//! │  shopfront-store errors (separate crate)                               │
//! │  └── StoreError       - Snapshot slot failures                         │
//! │                                                                         │
//! │  shopfront-catalog errors (separate crate)                             │
//! │  └── CatalogError     - Remote lookup failures                         │
//! │                                                                         │
//! │  shopfront-cart (manager)                                              │
//! │  └── CartError        - Composes the above; resolved into a Notice,   │
//! │                         never returned to the consumer                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message upstream

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule violations.
///
/// These errors represent business rule failures inside a cart mutation.
/// The manager catches them and translates each into a user notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Requested quantity exceeds what the seller holds.
    ///
    /// ## When This Occurs
    /// - Adding one more unit than the stock record covers
    /// - Setting an entry's amount above the stock record
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        available: i64,
        requested: i64,
    },

    /// The targeted product has no entry in the cart.
    ///
    /// ## When This Occurs
    /// - Removing an id that was never added (or already removed)
    #[error("Product {product_id} is not in the cart")]
    NotInCart { product_id: ProductId },

    /// The requested amount is below the minimum of 1.
    ///
    /// ## When This Occurs
    /// - Setting an entry's amount to zero or a negative value. The
    ///   manager filters these before any lookup; this variant keeps the
    ///   `amount >= 1` entry invariant safe for direct callers too.
    #[error("Invalid amount {requested} for product {product_id}: must be at least 1")]
    InvalidAmount {
        product_id: ProductId,
        requested: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: 7,
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 7: available 3, requested 5"
        );

        let err = CoreError::NotInCart { product_id: 7 };
        assert_eq!(err.to_string(), "Product 7 is not in the cart");

        let err = CoreError::InvalidAmount {
            product_id: 7,
            requested: -3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid amount -3 for product 7: must be at least 1"
        );
    }
}
