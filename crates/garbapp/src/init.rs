//! # Startup
//!
//! A client starts garb in two steps, both done by [`initialize`]:
//!
//! 1. **Resolve configuration** through [`GarbConfig::resolve`] (explicit
//!    `--config` file, environment, `./garb.toml`, user config dir, defaults).
//! 2. **Load the catalog** named by the configuration, or by the caller's
//!    override (the CLI's `--catalog` flag), which wins over every layer.
//!
//! The catalog is loaded once and is read-only for the rest of the session.
//! A load failure is fatal: no partially loaded catalog is ever handed out.
//!
//! Relative catalog paths are resolved against the current working directory.

use crate::api::GarbApi;
use crate::config::GarbConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything a client needs after startup.
#[derive(Debug, Clone)]
pub struct GarbContext {
    pub api: GarbApi,
    pub config: GarbConfig,
}

pub fn initialize(config_path: Option<&Path>, catalog_override: Option<PathBuf>) -> Result<GarbContext> {
    let mut config = GarbConfig::resolve(config_path)?;
    if let Some(catalog) = catalog_override {
        config.catalog = catalog;
    }
    debug!(
        catalog = %config.catalog.display(),
        default_max_price = %config.default_max_price,
        "configuration resolved"
    );

    let api = GarbApi::open(&config)?;
    Ok(GarbContext { api, config })
}
