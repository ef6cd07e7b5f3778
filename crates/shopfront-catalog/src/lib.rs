//! # shopfront-catalog: Remote Lookups for Shopfront
//!
//! The cart manager validates every mutation against the seller's
//! catalog. This crate provides that access: two key lookups over HTTP,
//! behind a trait so the manager (and its tests) never touch the wire
//! directly.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Catalog Lookups                                   │
//! │                                                                         │
//! │  Cart Manager                                                          │
//! │       │                                                                 │
//! │       │  product_by_id(1)          stock_by_id(1)                      │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Catalog trait (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   HttpCatalog ──► GET {base}/products/{id} ──► Product JSON    │   │
//! │  │               ──► GET {base}/stock/{id}    ──► Stock JSON      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Failure modes: HTTP/transport error, 404, unexpected status,          │
//! │  record id not matching the requested id. No retry - the manager       │
//! │  reports a single per-operation failure and moves on.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopfront_catalog::{Catalog, CatalogConfig, HttpCatalog};
//!
//! let catalog = HttpCatalog::new(CatalogConfig::new("http://localhost:3333"))?;
//!
//! let stock = catalog.stock_by_id(1).await?;
//! let product = catalog.product_by_id(1).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{CatalogConfig, HttpCatalog};
pub use error::{CatalogError, CatalogResult};

use async_trait::async_trait;
use shopfront_core::{Product, ProductId, Stock};

/// Remote catalog lookups.
///
/// ## Why a Trait?
/// The manager holds a `dyn Catalog` so tests can script lookups without
/// a network, and alternative transports can slot in without touching
/// cart logic. [`HttpCatalog`] is the production implementation.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetches the catalog record for a product.
    async fn product_by_id(&self, product_id: ProductId) -> CatalogResult<Product>;

    /// Fetches the seller's stock record for a product.
    async fn stock_by_id(&self, product_id: ProductId) -> CatalogResult<Stock>;
}
