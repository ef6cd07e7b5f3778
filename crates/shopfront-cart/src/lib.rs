//! # shopfront-cart: The Cart Manager
//!
//! The stateful heart of Shopfront. One [`CartManager`] owns the
//! in-memory cart, validates every mutation against the remote catalog,
//! writes committed state through to a durable snapshot slot, and reports
//! failures over a notice side-channel instead of returned errors.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         shopfront-cart                                  │
//! │                                                                         │
//! │   Consumer                                                              │
//! │      │  add / remove / set_amount        items / totals                 │
//! │      ▼                                                                  │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    CartManager                                  │   │
//! │  │                                                                 │   │
//! │  │  Mutex<Cart> ◄── bounded mutations (shopfront-core)            │   │
//! │  │       │                                                         │   │
//! │  │       ├──► Catalog        stock + product lookups first         │   │
//! │  │       ├──► SnapshotStore  write-through after every commit      │   │
//! │  │       └──► Notifier       one Notice per failed operation       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Failures never reach the caller as errors; the cart and its           │
//! │  snapshot stay untouched and a Notice goes out instead.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shopfront_cart::{CartManager, LogNotifier};
//! use shopfront_catalog::{CatalogConfig, HttpCatalog};
//! use shopfront_store::{SnapshotStore, StoreConfig};
//!
//! let catalog = Arc::new(HttpCatalog::new(CatalogConfig::new("http://localhost:3333"))?);
//! let store = SnapshotStore::new(StoreConfig::new("shopfront.db")).await?;
//! let manager = CartManager::open(catalog, store, Arc::new(LogNotifier)).await?;
//!
//! manager.add(1).await;
//! println!("{} item(s)", manager.totals().item_count);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod manager;
pub mod notify;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CartError, CartResult};
pub use manager::{CartManager, CART_SLOT_KEY};
pub use notify::{ChannelNotifier, LogNotifier, Notice, Notifier};

// Domain types, re-exported so consumers only depend on this crate
pub use shopfront_core::{Cart, CartItem, CartTotals, Product, ProductId, Stock};
