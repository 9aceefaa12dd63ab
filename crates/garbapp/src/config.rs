//! # Configuration
//!
//! Garb configuration is managed by [`confique`], which handles layered loading
//! from TOML files, environment variables and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Explicit file**: `--config <path>`; must exist when given.
//! 2. **Environment variables**: `GARB_CATALOG`, `GARB_DEFAULT_MAX_PRICE`.
//! 3. **Working directory**: `./garb.toml`.
//! 4. **User config**: OS-appropriate config directory (via `directories` crate).
//! 5. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `catalog` | `inventory.txt` | Path of the inventory file |
//! | `default_max_price` | `100.00` | Upper price bound when a search gives none |

use crate::error::{GarbError, Result};
use crate::model::Price;
use crate::query::DEFAULT_MAX_PRICE;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "garb.toml";

/// Configuration for garb, stored in `garb.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GarbConfig {
    /// Path of the inventory file to load at startup.
    #[config(default = "inventory.txt", env = "GARB_CATALOG")]
    pub catalog: PathBuf,

    /// Upper end of the price range when a search does not set one (e.g. "100.00").
    #[config(default = "100.00", env = "GARB_DEFAULT_MAX_PRICE")]
    pub default_max_price: Price,
}

impl Default for GarbConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("inventory.txt"),
            default_max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl GarbConfig {
    /// Resolve configuration from all layers.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = GarbConfig::builder();
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(GarbError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            builder = builder.file(path);
        }
        builder = builder.env().file(CONFIG_FILE);
        if let Some(dirs) = ProjectDirs::from("com", "garb", "garb") {
            builder = builder.file(dirs.config_dir().join(CONFIG_FILE));
        }
        Ok(builder.load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GarbConfig::default();
        assert_eq!(config.catalog, PathBuf::from("inventory.txt"));
        assert_eq!(config.default_max_price, Price::from_cents(10_000));
    }

    #[test]
    fn test_numeric_max_price_in_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "default_max_price = 250").unwrap();

        let config = GarbConfig::resolve(Some(file.path())).unwrap();
        assert_eq!(config.default_max_price, Price::from_cents(25_000));
    }

    #[test]
    fn test_bad_max_price_fails_at_resolve() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "default_max_price = \"lots\"").unwrap();

        let result = GarbConfig::resolve(Some(file.path()));
        assert!(matches!(result, Err(GarbError::Config(_))));
    }

    #[test]
    fn test_explicit_file_is_read() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "catalog = \"stock/shirts.txt\"").unwrap();
        writeln!(file, "default_max_price = \"80.00\"").unwrap();

        let config = GarbConfig::resolve(Some(file.path())).unwrap();
        assert_eq!(config.catalog, PathBuf::from("stock/shirts.txt"));
        assert_eq!(config.default_max_price, Price::from_cents(8000));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = GarbConfig::resolve(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(GarbError::Config(_))));
    }
}
