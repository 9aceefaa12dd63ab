//! Attribute specifications and registry.
//!
//! This module defines the schema for garment attributes: which facets exist,
//! whether an item carries one value or a set of them, and which garment
//! category each facet applies to.

use super::normalize;
use super::value::Category;
use crate::error::{GarbError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The closed set of filterable garment facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeKind {
    Category,
    Brand,
    Material,
    Size,
    Neckline,
    SleeveType,
    HoodieStyle,
    PocketType,
}

impl AttributeKind {
    pub const ALL: &'static [AttributeKind] = &[
        AttributeKind::Category,
        AttributeKind::Brand,
        AttributeKind::Material,
        AttributeKind::Size,
        AttributeKind::Neckline,
        AttributeKind::SleeveType,
        AttributeKind::HoodieStyle,
        AttributeKind::PocketType,
    ];

    /// The registry entry for this kind.
    pub fn spec(self) -> &'static AttributeSpec {
        // Every kind has exactly one entry in ATTRIBUTES, in declaration order.
        &ATTRIBUTES[self as usize]
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

impl FromStr for AttributeKind {
    type Err = GarbError;

    /// Accepts the display name in any case, with spaces, hyphens or
    /// underscores between words (`sleeve type`, `SLEEVE_TYPE`, `sleeve-type`).
    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        ATTRIBUTES
            .iter()
            .find(|spec| normalize(spec.name) == wanted)
            .map(|spec| spec.kind)
            .ok_or_else(|| GarbError::InvalidQuery(format!("unknown attribute '{}'", s)))
    }
}

/// How many values of an attribute a single garment carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Exactly one value (e.g. material)
    Single,
    /// A non-empty set of values (e.g. the sizes an item is stocked in)
    Set,
}

/// Specification for a single attribute kind.
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    pub kind: AttributeKind,

    /// Human-readable name, also accepted when parsing a kind from text
    pub name: &'static str,

    pub shape: Shape,

    /// The only category carrying this attribute; `None` means every garment has it.
    pub applies_to: Option<Category>,

    /// Whether the legal values are a fixed list. Brands are open: any
    /// non-empty text is a brand, and the selectable ones come from the catalog.
    pub closed: bool,
}

impl AttributeSpec {
    const fn new(kind: AttributeKind, name: &'static str) -> Self {
        Self {
            kind,
            name,
            shape: Shape::Single,
            applies_to: None,
            closed: true,
        }
    }

    const fn set_valued(mut self) -> Self {
        self.shape = Shape::Set;
        self
    }

    const fn only_for(mut self, category: Category) -> Self {
        self.applies_to = Some(category);
        self
    }

    const fn open(mut self) -> Self {
        self.closed = false;
        self
    }

    /// Whether garments of `category` carry this attribute.
    pub fn applies(&self, category: Category) -> bool {
        self.applies_to.map_or(true, |only| only == category)
    }
}

/// Registry of all garment attributes, in `AttributeKind` declaration order.
pub const ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new(AttributeKind::Category, "category"),
    AttributeSpec::new(AttributeKind::Brand, "brand").open(),
    AttributeSpec::new(AttributeKind::Material, "material"),
    AttributeSpec::new(AttributeKind::Size, "size").set_valued(),
    AttributeSpec::new(AttributeKind::Neckline, "neckline").only_for(Category::TShirt),
    AttributeSpec::new(AttributeKind::SleeveType, "sleeve type").only_for(Category::TShirt),
    AttributeSpec::new(AttributeKind::HoodieStyle, "hoodie style").only_for(Category::Hoodie),
    AttributeSpec::new(AttributeKind::PocketType, "pocket type").only_for(Category::Hoodie),
];

/// Attribute kinds carried by garments of the given category.
pub fn kinds_for(category: Category) -> impl Iterator<Item = AttributeKind> {
    ATTRIBUTES
        .iter()
        .filter(move |spec| spec.applies(category))
        .map(|spec| spec.kind)
}
