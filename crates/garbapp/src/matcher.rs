//! # Match Engine
//!
//! Evaluates a [`QuerySpec`] against every record in a [`Catalog`]. A record
//! matches when:
//!
//! - every constrained attribute is present in its bag and admitted by the
//!   constraint (see [`Constraint::admits`](crate::attributes::Constraint::admits)).
//!   A constraint on an attribute the record does not carry is a non-match,
//!   never a wildcard;
//! - its price lies within the query's inclusive price range.
//!
//! Unconstrained attributes are not looked at.
//!
//! The scan is linear and pure. Hits come back in catalog order; callers that
//! want another order sort the result themselves.

use crate::catalog::Catalog;
use crate::model::GarmentRecord;
use crate::query::QuerySpec;
use tracing::debug;

/// All records in `catalog` satisfying `query`, in catalog order.
pub fn find<'a>(catalog: &'a Catalog, query: &QuerySpec) -> Vec<&'a GarmentRecord> {
    let hits: Vec<&GarmentRecord> = catalog
        .garments()
        .iter()
        .filter(|garment| matches(garment, query))
        .collect();
    debug!(
        constraints = query.constraints().len(),
        scanned = catalog.len(),
        hits = hits.len(),
        "search finished"
    );
    hits
}

pub fn matches(garment: &GarmentRecord, query: &QuerySpec) -> bool {
    query.price().contains(garment.price())
        && query.constraints().iter().all(|(kind, constraint)| {
            garment
                .attr(*kind)
                .is_some_and(|facet| constraint.admits(facet))
        })
}
