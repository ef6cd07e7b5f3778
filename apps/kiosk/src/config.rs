//! # Kiosk Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.
//!
//! ## Variables
//! - `SHOPFRONT_API_URL` - Storefront API base URL
//!   (default: `http://localhost:3333`)
//! - `SHOPFRONT_DB_PATH` - Snapshot database file
//!   (default: platform data directory, e.g. `~/.local/share/shopfront/`)

use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Kiosk configuration.
#[derive(Debug, Clone)]
pub struct KioskConfig {
    /// Base URL of the storefront API.
    pub api_url: String,

    /// Path to the snapshot SQLite database.
    pub database_path: PathBuf,
}

impl KioskConfig {
    /// Loads configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let api_url =
            env::var("SHOPFRONT_API_URL").unwrap_or_else(|_| "http://localhost:3333".to_string());

        let database_path = match env::var("SHOPFRONT_DB_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_database_path()?,
        };

        if let Some(parent) = database_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::DataDir(e.to_string()))?;
        }

        Ok(KioskConfig {
            api_url,
            database_path,
        })
    }
}

/// Resolves the platform-specific default database location.
fn default_database_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("com", "shopfront", "shopfront")
        .ok_or_else(|| ConfigError::DataDir("no home directory".to_string()))?;

    Ok(dirs.data_dir().join("shopfront.db"))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not prepare data directory: {0}")]
    DataDir(String),
}
