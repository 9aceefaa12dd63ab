//! # Catalog
//!
//! The catalog is the full set of garment records loaded at startup, plus the
//! de-duplicated listing of every brand seen during the load.
//!
//! ## Lifecycle
//!
//! A catalog is populated exactly once, by [`loader`], and is read-only
//! afterwards. [`Catalog::insert`] exists for the loader and for test
//! fixtures; nothing in the search path mutates a catalog.
//!
//! ## Ordering
//!
//! Records are kept in load order. Searches return hits in that order; any
//! other ordering is the caller's job.

pub mod loader;

pub use loader::{load, load_path, load_str};

use crate::model::GarmentRecord;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    garments: Vec<GarmentRecord>,
    brands: BTreeSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, folding its brand into the brand listing.
    pub fn insert(&mut self, garment: GarmentRecord) {
        if !self.brands.contains(garment.brand()) {
            self.brands.insert(garment.brand().to_string());
        }
        self.garments.push(garment);
    }

    pub fn garments(&self) -> &[GarmentRecord] {
        &self.garments
    }

    /// Every brand seen during load, sorted. Used to offer brand choices;
    /// the match engine does not consult it.
    pub fn brands(&self) -> &BTreeSet<String> {
        &self.brands
    }

    /// First record with the given product code.
    pub fn get(&self, product_code: u64) -> Option<&GarmentRecord> {
        self.garments
            .iter()
            .find(|g| g.product_code() == product_code)
    }

    pub fn len(&self) -> usize {
        self.garments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }
}

impl FromIterator<GarmentRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = GarmentRecord>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for garment in iter {
            catalog.insert(garment);
        }
        catalog
    }
}
