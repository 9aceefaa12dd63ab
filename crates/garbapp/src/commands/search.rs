//! # Search Command
//!
//! Turns a filled-in [`SearchForm`] into a [`QuerySpec`], runs the match
//! engine and orders the hits.
//!
//! ## Form Semantics
//!
//! Every form field is plain text, as a presentation layer collects it:
//!
//! - `category` is required. An empty or `NA` category is rejected.
//! - An empty (or `NA`) single-value field means "don't care", as does an
//!   empty size or brand list.
//! - Category-specific fields (neckline, sleeve type, hoodie style, pocket
//!   type) are only read for their own category. A filled field for another
//!   category is ignored with a warning.
//! - An empty minimum price is `0.00`; an empty maximum price is the
//!   configured default (`100.00` out of the box).
//!
//! Hits are ordered by [`SortKey`]; the default keeps catalog order.

use crate::attributes::{self, AttributeKind, Category, Size};
use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GarbError, Result};
use crate::matcher;
use crate::model::{GarmentRecord, Price};
use crate::query::QuerySpec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The textual search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub category: String,
    pub sizes: Vec<String>,
    pub brands: Vec<String>,
    pub material: String,
    pub neckline: String,
    pub sleeve_type: String,
    pub hoodie_style: String,
    pub pocket_type: String,
    pub min_price: String,
    pub max_price: String,
}

impl SearchForm {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..Default::default()
        }
    }

    /// Fill the single-value field for `kind`. Category, brand and size are
    /// not single-value form fields and are left alone.
    pub fn with_field(mut self, kind: AttributeKind, text: impl Into<String>) -> Self {
        let text = text.into();
        match kind {
            AttributeKind::Material => self.material = text,
            AttributeKind::Neckline => self.neckline = text,
            AttributeKind::SleeveType => self.sleeve_type = text,
            AttributeKind::HoodieStyle => self.hoodie_style = text,
            AttributeKind::PocketType => self.pocket_type = text,
            AttributeKind::Category | AttributeKind::Brand | AttributeKind::Size => {}
        }
        self
    }

    pub fn with_sizes<S: Into<String>>(mut self, sizes: impl IntoIterator<Item = S>) -> Self {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_brands<S: Into<String>>(mut self, brands: impl IntoIterator<Item = S>) -> Self {
        self.brands = brands.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price_range(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.min_price = min.into();
        self.max_price = max.into();
        self
    }

    fn single_fields(&self) -> [(AttributeKind, &str); 5] {
        [
            (AttributeKind::Material, self.material.as_str()),
            (AttributeKind::Neckline, self.neckline.as_str()),
            (AttributeKind::SleeveType, self.sleeve_type.as_str()),
            (AttributeKind::HoodieStyle, self.hoodie_style.as_str()),
            (AttributeKind::PocketType, self.pocket_type.as_str()),
        ]
    }

    /// The chosen category. Required.
    pub fn category(&self) -> Result<Category> {
        if is_blank(&self.category) {
            return Err(GarbError::InvalidQuery(
                "choose a garment category".to_string(),
            ));
        }
        attributes::decode_closed(&self.category)
    }

    /// Filled fields that do not apply to the chosen category.
    pub fn ignored_kinds(&self) -> Result<Vec<AttributeKind>> {
        let category = self.category()?;
        Ok(self
            .single_fields()
            .into_iter()
            .filter(|(kind, text)| !is_blank(text) && !kind.spec().applies(category))
            .map(|(kind, _)| kind)
            .collect())
    }

    /// Build the query this form describes.
    pub fn to_query(&self, default_max_price: Price) -> Result<QuerySpec> {
        let category = self.category()?;
        let mut builder = QuerySpec::builder(category);

        let sizes = self
            .sizes
            .iter()
            .filter(|text| !is_blank(text))
            .map(|text| attributes::decode_closed::<Size>(text))
            .collect::<Result<Vec<_>>>()?;
        if !sizes.is_empty() {
            builder = builder.sizes(sizes);
        }

        let brands: Vec<&str> = self
            .brands
            .iter()
            .filter(|text| !is_blank(text))
            .map(|text| text.trim())
            .collect();
        if !brands.is_empty() {
            builder = builder.brands(brands);
        }

        for (kind, text) in self.single_fields() {
            if is_blank(text) || !kind.spec().applies(category) {
                continue;
            }
            builder = builder.require(attributes::decode(kind, text)?);
        }

        let min = parse_price_or(&self.min_price, Price::ZERO)?;
        let max = parse_price_or(&self.max_price, default_max_price)?;
        builder.min_price(min).max_price(max).build()
    }
}

/// Empty, whitespace or the `NA` sentinel.
fn is_blank(text: &str) -> bool {
    text.trim().is_empty() || attributes::is_not_applicable(text)
}

fn parse_price_or(text: &str, default: Price) -> Result<Price> {
    if text.trim().is_empty() {
        Ok(default)
    } else {
        text.parse()
    }
}

/// Order of the listed hits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Catalog (load) order.
    #[default]
    Catalog,
    Name,
    Price,
    Code,
}

impl SortKey {
    pub const ALL: &'static [SortKey] = &[SortKey::Catalog, SortKey::Name, SortKey::Price, SortKey::Code];

    /// Stable sort; ties keep catalog order.
    pub fn sort(self, garments: &mut [&GarmentRecord]) {
        match self {
            SortKey::Catalog => {}
            SortKey::Name => garments.sort_by(|a, b| a.name().cmp(b.name())),
            SortKey::Price => garments.sort_by_key(|g| g.price()),
            SortKey::Code => garments.sort_by_key(|g| g.product_code()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Catalog => "catalog",
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Code => "code",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = GarbError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        SortKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| GarbError::InvalidQuery(format!("unknown sort order '{}'", s)))
    }
}

pub fn run(
    catalog: &Catalog,
    form: &SearchForm,
    sort: SortKey,
    default_max_price: Price,
) -> Result<CmdResult> {
    let query = form.to_query(default_max_price)?;
    let mut result = CmdResult::default();

    if let Some(category) = query.category() {
        for kind in form.ignored_kinds()? {
            result.add_message(CmdMessage::warning(format!(
                "{} does not apply to {}; ignored",
                kind, category
            )));
        }
    }

    let mut hits = matcher::find(catalog, &query);
    sort.sort(&mut hits);

    if hits.is_empty() {
        result.add_message(CmdMessage::info("No garments match your search"));
    } else {
        let noun = if hits.len() == 1 { "garment" } else { "garments" };
        result.add_message(CmdMessage::info(format!(
            "{} {} in {}",
            hits.len(),
            noun,
            query.price()
        )));
    }

    Ok(result.with_listed_garments(hits.into_iter().cloned().collect()))
}
