//! # Attribute Taxonomy
//!
//! This module provides a unified abstraction for garment attributes.
//! Instead of handling each facet (material, neckline, size, etc.) ad-hoc,
//! the taxonomy provides:
//!
//! - **Kinds**: the closed set of filterable facets ([`AttributeKind`])
//! - **Specifications**: shape and applicability of each kind ([`ATTRIBUTES`])
//! - **Values**: one closed enum per kind, wrapped by [`AttrValue`]
//! - **Decoding**: a single, table-driven text → value routine ([`decode`])
//! - **Constraints**: shape-aware comparison for queries ([`Constraint`])
//!
//! ## Text Normalization
//!
//! Decoding is case-insensitive and treats spaces, hyphens and underscores
//! alike: `wool blend`, `Wool-Blend` and `WOOL_BLEND` are the same material.
//!
//! ## The `NA` Sentinel
//!
//! Inventory rows mark category-inapplicable fields with `NA`. The sentinel
//! is never a value of a closed kind: [`decode_field`] maps it to `None`,
//! and [`decode`] rejects it like any other unknown text. Brands are open
//! text and taken verbatim, so a brand literally called `NA` is a brand.
//!
//! ## Usage
//!
//! ```ignore
//! let material = decode(AttributeKind::Material, "wool-blend")?;
//! let neckline = decode_field(AttributeKind::Neckline, "NA")?; // None
//! let all_sizes = values_for(AttributeKind::Size);
//! ```

mod filter;
mod spec;
mod value;

pub use filter::Constraint;
pub use spec::{kinds_for, AttributeKind, AttributeSpec, Shape, ATTRIBUTES};
pub use value::{
    AttrValue, Category, Facet, HoodieStyle, Material, Neckline, PocketType, Size, SleeveType,
};

use crate::error::{GarbError, Result};

/// Source-text marker for "this attribute does not apply to this item".
pub const NOT_APPLICABLE: &str = "NA";

/// A value enum with a fixed list of members and their textual spellings.
pub trait ClosedDomain: Copy + Sized + 'static {
    const KIND: AttributeKind;

    fn all() -> &'static [Self];

    /// Display label; its normalized form is the canonical token.
    fn label(self) -> &'static str;

    /// Extra spellings accepted on input.
    fn aliases(self) -> &'static [&'static str];
}

/// Canonical form used for all text comparisons.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

pub fn is_not_applicable(raw: &str) -> bool {
    normalize(raw) == NOT_APPLICABLE
}

/// Decode text into a member of a closed domain.
pub fn decode_closed<T: ClosedDomain>(raw: &str) -> Result<T> {
    let wanted = normalize(raw);
    T::all()
        .iter()
        .copied()
        .find(|v| {
            normalize(v.label()) == wanted || v.aliases().iter().any(|a| normalize(a) == wanted)
        })
        .ok_or_else(|| unknown(T::KIND, raw))
}

/// Decode text into a value of the given kind.
///
/// Closed kinds must match one of their values and reject the `NA`
/// sentinel; brands accept any non-blank text verbatim.
pub fn decode(kind: AttributeKind, raw: &str) -> Result<AttrValue> {
    match kind {
        AttributeKind::Brand => decode_brand(raw),
        _ if is_not_applicable(raw) => Err(unknown(kind, raw)),
        AttributeKind::Category => decode_closed::<Category>(raw).map(AttrValue::from),
        AttributeKind::Material => decode_closed::<Material>(raw).map(AttrValue::from),
        AttributeKind::Size => decode_closed::<Size>(raw).map(AttrValue::from),
        AttributeKind::Neckline => decode_closed::<Neckline>(raw).map(AttrValue::from),
        AttributeKind::SleeveType => decode_closed::<SleeveType>(raw).map(AttrValue::from),
        AttributeKind::HoodieStyle => decode_closed::<HoodieStyle>(raw).map(AttrValue::from),
        AttributeKind::PocketType => decode_closed::<PocketType>(raw).map(AttrValue::from),
    }
}

/// Like [`decode`], but the `NA` sentinel decodes to `None` for closed kinds.
pub fn decode_field(kind: AttributeKind, raw: &str) -> Result<Option<AttrValue>> {
    if kind.spec().closed && is_not_applicable(raw) {
        return Ok(None);
    }
    decode(kind, raw).map(Some)
}

/// All legal values of a kind, in declaration order.
///
/// Brands are an open domain and yield nothing here; use the catalog's
/// brand listing to populate brand choices.
pub fn values_for(kind: AttributeKind) -> Vec<AttrValue> {
    fn all<T: ClosedDomain + Into<AttrValue>>() -> Vec<AttrValue> {
        T::all().iter().map(|v| (*v).into()).collect()
    }

    match kind {
        AttributeKind::Category => all::<Category>(),
        AttributeKind::Brand => Vec::new(),
        AttributeKind::Material => all::<Material>(),
        AttributeKind::Size => all::<Size>(),
        AttributeKind::Neckline => all::<Neckline>(),
        AttributeKind::SleeveType => all::<SleeveType>(),
        AttributeKind::HoodieStyle => all::<HoodieStyle>(),
        AttributeKind::PocketType => all::<PocketType>(),
    }
}

fn decode_brand(raw: &str) -> Result<AttrValue> {
    if raw.trim().is_empty() {
        return Err(unknown(AttributeKind::Brand, raw));
    }
    Ok(AttrValue::brand(raw))
}

fn unknown(kind: AttributeKind, raw: &str) -> GarbError {
    GarbError::UnknownAttributeText {
        kind,
        text: raw.to_string(),
    }
}
