//! # shopfront-store: Durable Snapshot Slot for Shopfront
//!
//! This crate provides the durable local storage behind the cart manager.
//! It uses SQLite for local storage with sqlx for async operations, and
//! exposes a deliberately small surface: named key-value slots with
//! `get` / `set` / `contains`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shopfront Data Flow                                │
//! │                                                                         │
//! │  Cart Manager (shopfront-cart)                                         │
//! │       │                                                                 │
//! │       │  set("cart", serialized cart)  ← on every successful mutation  │
//! │       │  get("cart")                   ← once, at startup              │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shopfront-store (THIS CRATE)                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ SnapshotStore │    │  Migrations   │    │  StoreError  │  │   │
//! │  │   │   (slot.rs)   │    │  (embedded)   │    │  (error.rs)  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (WAL mode)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`slot`] - Pool configuration and the key-value slot operations
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopfront_store::{SnapshotStore, StoreConfig};
//!
//! let store = SnapshotStore::new(StoreConfig::new("path/to/shopfront.db")).await?;
//!
//! store.set("cart", "[]").await?;
//! assert!(store.contains("cart").await?);
//! let payload = store.get("cart").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod slot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use slot::{SnapshotStore, StoreConfig};
