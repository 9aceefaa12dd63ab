//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all garb operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the loaded [`Catalog`] and the resolved price default
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., kind names to [`AttributeKind`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting. The only file
//!   read is the catalog load in [`GarbApi::open`]
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Testing Strategy
//!
//! API tests should verify:
//! - Correct command is called for each method
//! - Arguments are passed/transformed correctly
//!
//! API tests should **not** verify command logic (tested in command modules).

use crate::attributes::AttributeKind;
use crate::catalog::{self, Catalog};
use crate::commands::{self, CmdResult, SearchForm, SortKey};
use crate::config::GarbConfig;
use crate::error::Result;
use crate::matcher;
use crate::model::{GarmentRecord, Price};
use crate::query::{QuerySpec, DEFAULT_MAX_PRICE};

/// The main API facade for garb operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
#[derive(Debug, Clone)]
pub struct GarbApi {
    catalog: Catalog,
    default_max_price: Price,
}

impl GarbApi {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            default_max_price: DEFAULT_MAX_PRICE,
        }
    }

    /// Load the configured catalog file.
    pub fn open(config: &GarbConfig) -> Result<Self> {
        let catalog = catalog::load_path(&config.catalog)?;
        Ok(Self::new(catalog).with_default_max_price(config.default_max_price))
    }

    pub fn with_default_max_price(mut self, price: Price) -> Self {
        self.default_max_price = price;
        self
    }

    pub fn search(&self, form: &SearchForm, sort: SortKey) -> Result<CmdResult> {
        commands::search::run(&self.catalog, form, sort, self.default_max_price)
    }

    /// Run an already-built query, in catalog order.
    pub fn find(&self, query: &QuerySpec) -> Vec<&GarmentRecord> {
        matcher::find(&self.catalog, query)
    }

    pub fn brands(&self) -> Result<CmdResult> {
        commands::brands::run(&self.catalog)
    }

    pub fn values(&self, kind: &str) -> Result<CmdResult> {
        let kind: AttributeKind = kind.parse()?;
        commands::values::run(&self.catalog, kind)
    }

    pub fn check(&self) -> Result<CmdResult> {
        commands::check::run(&self.catalog)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn default_max_price(&self) -> Price {
        self.default_max_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Category;
    use crate::catalog::fixtures::{two_item_catalog, INVENTORY};
    use crate::error::GarbError;
    use std::fs;

    fn api() -> GarbApi {
        GarbApi::new(two_item_catalog())
    }

    #[test]
    fn test_search_dispatch() {
        let result = api()
            .search(&SearchForm::new("Hoodie"), SortKey::Catalog)
            .unwrap();
        assert_eq!(result.listed_garments.len(), 1);
        assert_eq!(result.listed_garments[0].product_code(), 2002);
    }

    #[test]
    fn test_search_uses_configured_default_max() {
        let api = api().with_default_max_price(Price::from_cents(3000));
        let result = api
            .search(&SearchForm::new("Hoodie"), SortKey::Catalog)
            .unwrap();
        assert!(result.listed_garments.is_empty());
    }

    #[test]
    fn test_find_dispatch() {
        let query = QuerySpec::builder(Category::TShirt).build().unwrap();
        let api = api();
        let hits = api.find(&query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Crew Tee");
    }

    #[test]
    fn test_values_parses_kind_name() {
        let result = api().values("sleeve-type").unwrap();
        assert_eq!(result.values.len(), 4);
        assert!(matches!(
            api().values("colour"),
            Err(GarbError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_brands_and_check_dispatch() {
        assert_eq!(api().brands().unwrap().values, vec!["Acme", "Zeta"]);
        assert_eq!(api().check().unwrap().summary.unwrap().garments, 2);
    }

    #[test]
    fn test_open_loads_configured_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");
        fs::write(&path, INVENTORY).unwrap();

        let config = GarbConfig {
            catalog: path,
            default_max_price: Price::from_cents(7500),
        };
        let api = GarbApi::open(&config).unwrap();
        assert_eq!(api.catalog().len(), 2);
        assert_eq!(api.default_max_price(), Price::from_cents(7500));
    }

    #[test]
    fn test_open_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let config = GarbConfig {
            catalog: dir.path().join("nope.txt"),
            ..Default::default()
        };
        assert!(matches!(
            GarbApi::open(&config),
            Err(GarbError::CatalogUnavailable { .. })
        ));
    }
}
