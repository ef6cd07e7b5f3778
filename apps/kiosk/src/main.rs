//! # Shopfront Kiosk
//!
//! Terminal client for the cart manager. Each invocation performs one
//! operation against the cart and prints the resulting state; the cart
//! persists between invocations through the snapshot database.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Kiosk Client                                    │
//! │                                                                         │
//! │  shopfront-kiosk add 1 ───► CartManager ───► Storefront API (HTTP)    │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                           SQLite snapshot                               │
//! │                                                                         │
//! │  Failed operations print a notice line; the exit code stays 0          │
//! │  because the cart itself is always in a valid state.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shopfront_cart::{CartManager, ChannelNotifier, Notice, ProductId};
use shopfront_catalog::{CatalogConfig, HttpCatalog};
use shopfront_store::{SnapshotStore, StoreConfig};

use crate::config::KioskConfig;

// =============================================================================
// CLI Definition
// =============================================================================

#[derive(Parser)]
#[command(name = "shopfront-kiosk", about = "Shopfront cart from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the cart contents and totals.
    Show,

    /// Add one unit of a product to the cart.
    Add {
        /// Catalog product id.
        product_id: ProductId,
    },

    /// Remove a product from the cart entirely.
    Remove {
        /// Catalog product id.
        product_id: ProductId,
    },

    /// Set the quantity of a product already in the cart.
    Set {
        /// Catalog product id.
        product_id: ProductId,

        /// New quantity. Zero is ignored.
        amount: i64,
    },
}

// =============================================================================
// Entry Point
// =============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default to warnings only; RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = KioskConfig::load()?;

    info!(api_url = %config.api_url, db = %config.database_path.display(), "Kiosk starting");

    let catalog = Arc::new(HttpCatalog::new(CatalogConfig::new(&config.api_url))?);
    let store = SnapshotStore::new(StoreConfig::new(&config.database_path)).await?;

    let (notifier, mut notices) = ChannelNotifier::channel();
    let manager = CartManager::open(catalog, store, Arc::new(notifier)).await?;

    match cli.command {
        Command::Show => {}
        Command::Add { product_id } => manager.add(product_id).await,
        Command::Remove { product_id } => manager.remove(product_id).await,
        Command::Set { product_id, amount } => manager.set_amount(product_id, amount).await,
    }

    while let Ok(notice) = notices.try_recv() {
        print_notice(notice);
    }

    print_cart(&manager);
    Ok(())
}

// =============================================================================
// Output
// =============================================================================

fn print_notice(notice: Notice) {
    eprintln!("! {}", notice.message());
}

fn print_cart(manager: &CartManager) {
    let items = manager.items();

    if items.is_empty() {
        println!("Cart is empty.");
        return;
    }

    println!("{:>6}  {:<32} {:>6} {:>12}", "id", "product", "qty", "total");
    for item in &items {
        println!(
            "{:>6}  {:<32} {:>6} {:>12}",
            item.product_id,
            item.title,
            item.amount,
            format_cents(item.line_total_cents()),
        );
    }

    let totals = manager.totals();
    println!(
        "\n{} item(s), {} unit(s), subtotal {}",
        totals.item_count,
        totals.total_quantity,
        format_cents(totals.subtotal_cents),
    );
}

/// Formats an integer cent amount as a decimal money string.
fn format_cents(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, (cents % 100).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(17_999), "$179.99");
        assert_eq!(format_cents(100), "$1.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(0), "$0.00");
    }
}
