//! # Cart Manager Error Types
//!
//! Internal error type composing the three failure sources a mutation can
//! hit: the remote lookup, the cart rules, and the snapshot store.
//!
//! ## Design Note
//! Callers of the manager never see these errors. Mutations return `()`
//! and every failure is reported through the [`Notifier`] side-channel as
//! a [`Notice`]; the typed variants exist for the internal `try_*` paths
//! and for logging.
//!
//! [`Notifier`]: crate::notify::Notifier
//! [`Notice`]: crate::notify::Notice

use thiserror::Error;

use shopfront_catalog::CatalogError;
use shopfront_core::CoreError;
use shopfront_store::StoreError;

/// Errors a cart mutation can hit before it commits.
#[derive(Debug, Error)]
pub enum CartError {
    /// A remote product or stock lookup failed.
    #[error("Lookup failed: {0}")]
    Lookup(#[from] CatalogError),

    /// A cart rule rejected the mutation (stock bound, missing line).
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// The snapshot slot could not be read.
    #[error("Snapshot store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for internal manager operations.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
