//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! This crate is the **heart** of the Shopfront cart manager. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront Frontend                          │   │
//! │  │    Product Grid ──► Cart Badge ──► Cart Page ──► Checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopfront-cart (Cart Manager)                │   │
//! │  │    add, remove, set_amount, read views                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopfront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌───────────┐      ┌───────────┐          │   │
//! │  │   │   types   │      │   cart    │      │   error   │          │   │
//! │  │   │  Product  │      │   Cart    │      │ CoreError │          │   │
//! │  │   │   Stock   │      │ CartItem  │      │           │          │   │
//! │  │   └───────────┘      └───────────┘      └───────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog-side types (Product, Stock)
//! - [`cart`] - The cart itself and its stock-bounded mutations
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every mutation is deterministic given cart + stock
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64), no floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shopfront_core::{Cart, Product, Stock};
//!
//! let product = Product {
//!     id: 1,
//!     title: "Trail Sneaker".to_string(),
//!     price_cents: 17_999,
//!     image: "sneaker.jpg".to_string(),
//! };
//! let stock = Stock { id: 1, amount: 5 };
//!
//! let mut cart = Cart::default();
//! cart.add_one(&product, &stock).unwrap();
//!
//! assert_eq!(cart.total_quantity(), 1);
//! assert_eq!(cart.subtotal_cents(), 17_999);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Cart` instead of
// `use shopfront_core::cart::Cart`

pub use cart::{AmountChange, Cart, CartItem, CartTotals};
pub use error::{CoreError, CoreResult};
pub use types::{Product, ProductId, Stock};
