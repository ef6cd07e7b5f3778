//! # HTTP Catalog Client
//!
//! The production [`Catalog`] implementation: plain JSON-over-HTTP key
//! lookups against the storefront API.
//!
//! ## Endpoints
//! ```text
//! GET {base}/products/{id}  →  { "id", "title", "priceCents", "image" }
//! GET {base}/stock/{id}     →  { "id", "amount" }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::Catalog;
use shopfront_core::{Product, ProductId, Stock};

// =============================================================================
// Configuration
// =============================================================================

/// HTTP catalog configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the storefront API, e.g. `http://localhost:3333`.
    pub base_url: String,

    /// Per-request timeout.
    /// Default: 10 seconds
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        CatalogConfig {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// =============================================================================
// HTTP Catalog
// =============================================================================

/// Catalog client over plain HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    /// Creates a new HTTP catalog client.
    ///
    /// ## Returns
    /// * `Ok(HttpCatalog)` - Ready-to-use client
    /// * `Err(CatalogError::Http)` - Client construction failed
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(HttpCatalog {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Performs one key lookup and decodes the JSON record.
    ///
    /// ## Status Mapping
    /// - 200 → decoded record
    /// - 404 → `CatalogError::NotFound`
    /// - anything else → `CatalogError::UnexpectedStatus`
    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &str,
        product_id: ProductId,
    ) -> CatalogResult<T> {
        let url = format!("{}/{}/{}", self.base_url, resource, product_id);

        debug!(url = %url, "Catalog lookup");

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<T>().await?),
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound { product_id }),
            status => Err(CatalogError::UnexpectedStatus { status }),
        }
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn product_by_id(&self, product_id: ProductId) -> CatalogResult<Product> {
        let product: Product = self.fetch("products", product_id).await?;

        // A record keyed by the wrong id is never committed
        if product.id != product_id {
            return Err(CatalogError::IdMismatch {
                requested: product_id,
                received: product.id,
            });
        }

        Ok(product)
    }

    async fn stock_by_id(&self, product_id: ProductId) -> CatalogResult<Stock> {
        let stock: Stock = self.fetch("stock", product_id).await?;

        if stock.id != product_id {
            return Err(CatalogError::IdMismatch {
                requested: product_id,
                received: stock.id,
            });
        }

        Ok(stock)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
