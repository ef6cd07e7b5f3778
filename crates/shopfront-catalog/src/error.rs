//! # Catalog Error Types
//!
//! Error types for remote lookup failures.
//!
//! ## Design Note
//! The cart manager does not distinguish a missing product from a network
//! failure: every lookup failure collapses into one generic per-operation
//! notice at the manager boundary. The typed variants here exist for
//! logging and diagnostics only.

use thiserror::Error;

use shopfront_core::ProductId;

/// Remote lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (connect, timeout, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog has no record for this id (404).
    #[error("Product {product_id} not found in catalog")]
    NotFound { product_id: ProductId },

    /// The catalog answered with a status we don't handle.
    #[error("Catalog returned unexpected status {status}")]
    UnexpectedStatus { status: reqwest::StatusCode },

    /// The returned record is keyed by a different id than requested.
    ///
    /// ## When This Occurs
    /// - Upstream data corruption or a misrouted response. The record is
    ///   never committed; the manager treats it as a failed lookup.
    #[error("Catalog returned record for id {received}, requested {requested}")]
    IdMismatch {
        requested: ProductId,
        received: ProductId,
    },
}

/// Result type for catalog lookups.
pub type CatalogResult<T> = Result<T, CatalogError>;
