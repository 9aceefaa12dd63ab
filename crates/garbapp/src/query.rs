//! # Search Queries
//!
//! A [`QuerySpec`] is a sparse set of required attribute constraints plus an
//! inclusive price range. Absence of a key means "don't care"; every present
//! key must be satisfied.
//!
//! Queries are only built through [`QueryBuilder`], which is started from a
//! category, so a query reaching the match engine always constrains
//! CATEGORY and always has `min <= max`.
//!
//! ```ignore
//! let query = QuerySpec::builder(Category::TShirt)
//!     .sizes([Size::M, Size::L])
//!     .require(Neckline::Crew)
//!     .max_price(Price::from_cents(3000))
//!     .build()?;
//! ```

use crate::attributes::{AttrValue, AttributeKind, Category, Constraint, Size};
use crate::error::{GarbError, Result};
use crate::model::Price;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Upper end of the price range when the caller does not supply one.
pub const DEFAULT_MAX_PRICE: Price = Price::from_cents(10_000);

/// An inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    min: Price,
    max: Price,
}

impl PriceRange {
    pub fn new(min: Price, max: Price) -> Result<Self> {
        if min > max {
            return Err(GarbError::InvalidQuery(format!(
                "minimum price {} is above maximum price {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// `0.00 ..= max`
    pub fn up_to(max: Price) -> Self {
        Self {
            min: Price::ZERO,
            max,
        }
    }

    pub fn min(&self) -> Price {
        self.min
    }

    pub fn max(&self) -> Price {
        self.max
    }

    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::up_to(DEFAULT_MAX_PRICE)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} - ${}", self.min, self.max)
    }
}

/// One search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySpec {
    constraints: BTreeMap<AttributeKind, Constraint>,
    price: PriceRange,
}

impl QuerySpec {
    pub fn builder(category: Category) -> QueryBuilder {
        QueryBuilder::new(category)
    }

    pub fn constraints(&self) -> &BTreeMap<AttributeKind, Constraint> {
        &self.constraints
    }

    pub fn constraint(&self, kind: AttributeKind) -> Option<&Constraint> {
        self.constraints.get(&kind)
    }

    pub fn category(&self) -> Option<Category> {
        match self.constraints.get(&AttributeKind::Category) {
            Some(Constraint::Exact(value)) => value.as_category(),
            _ => None,
        }
    }

    pub fn price(&self) -> PriceRange {
        self.price
    }
}

/// Builder for [`QuerySpec`].
///
/// Setters record; `build()` validates. Setting the same kind twice keeps
/// the last constraint.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    constraints: BTreeMap<AttributeKind, Constraint>,
    min_price: Price,
    max_price: Price,
    errors: Vec<String>,
}

impl QueryBuilder {
    pub fn new(category: Category) -> Self {
        let mut constraints = BTreeMap::new();
        constraints.insert(
            AttributeKind::Category,
            Constraint::Exact(category.into()),
        );
        Self {
            constraints,
            min_price: Price::ZERO,
            max_price: DEFAULT_MAX_PRICE,
            errors: Vec::new(),
        }
    }

    /// Require the garment to hold exactly this value.
    pub fn require(mut self, value: impl Into<AttrValue>) -> Self {
        let value = value.into();
        self.constraints
            .insert(value.kind(), Constraint::Exact(value));
        self
    }

    /// Require the garment to hold at least one of `values`.
    pub fn any_of(mut self, kind: AttributeKind, values: impl IntoIterator<Item = AttrValue>) -> Self {
        let values: BTreeSet<AttrValue> = values.into_iter().collect();
        if values.is_empty() {
            self.errors
                .push(format!("no acceptable {} values given", kind));
        }
        if let Some(stray) = values.iter().find(|v| v.kind() != kind) {
            self.errors.push(format!(
                "'{}' is a {}, not a {}",
                stray,
                stray.kind(),
                kind
            ));
        }
        self.constraints.insert(kind, Constraint::AnyOf(values));
        self
    }

    /// Accept garments stocked in at least one of these sizes.
    pub fn sizes(self, sizes: impl IntoIterator<Item = Size>) -> Self {
        self.any_of(AttributeKind::Size, sizes.into_iter().map(AttrValue::from))
    }

    /// Accept garments made by any of these brands.
    pub fn brands<S: Into<String>>(self, brands: impl IntoIterator<Item = S>) -> Self {
        self.any_of(
            AttributeKind::Brand,
            brands.into_iter().map(AttrValue::brand),
        )
    }

    pub fn min_price(mut self, price: Price) -> Self {
        self.min_price = price;
        self
    }

    pub fn max_price(mut self, price: Price) -> Self {
        self.max_price = price;
        self
    }

    pub fn price_range(mut self, range: PriceRange) -> Self {
        self.min_price = range.min();
        self.max_price = range.max();
        self
    }

    pub fn build(self) -> Result<QuerySpec> {
        if let Some(first) = self.errors.into_iter().next() {
            return Err(GarbError::InvalidQuery(first));
        }
        if !matches!(
            self.constraints.get(&AttributeKind::Category),
            Some(Constraint::Exact(AttrValue::Category(_)))
        ) {
            return Err(GarbError::InvalidQuery(
                "a query must require exactly one category".to_string(),
            ));
        }
        let price = PriceRange::new(self.min_price, self.max_price)?;
        Ok(QuerySpec {
            constraints: self.constraints,
            price,
        })
    }
}
