//! # Domain Model: Garment Records and Prices
//!
//! This module defines the core data structures for garb: [`GarmentRecord`],
//! [`Price`] and [`ProductRef`].
//!
//! ## The Attribute Bag
//!
//! Besides its identity fields (name, product code, price, description), a
//! garment carries a bag mapping [`AttributeKind`] to a [`Facet`]:
//!
//! | Kind | Facet | Present on |
//! |------|-------|------------|
//! | category, brand, material | single value | every garment |
//! | size | set of values | every garment (at least one size) |
//! | neckline, sleeve type | single value | T-shirts, when known |
//! | hoodie style, pocket type | single value | hoodies, when known |
//!
//! Inapplicability is modelled by the key being absent. There is no stored
//! "not applicable" value, so a query constraining neckline can never match
//! a hoodie.
//!
//! ## Construction
//!
//! Records are built once through [`GarmentBuilder`], which enforces the bag
//! invariants, and are immutable afterwards.

use crate::attributes::{AttrValue, AttributeKind, Category, Facet, Material, Size};
use crate::error::{GarbError, Result};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// A non-negative amount of money, held as whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl FromStr for Price {
    type Err = GarbError;

    /// Parses `25`, `25.5`, `25.00`, `.99` or `10.`. Either side of the
    /// point may be empty, not both; at most two fractional digits are
    /// accepted. Signs and exponents are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GarbError::InvalidPrice(s.to_string());
        let text = s.trim();
        let (whole, frac) = text.split_once('.').unwrap_or((text, ""));

        let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty())
            || !digits_only(whole)
            || !digits_only(frac)
            || frac.len() > 2
        {
            return Err(invalid());
        }

        let whole: u64 = match whole {
            "" => 0,
            digits => digits.parse().map_err(|_| invalid())?,
        };
        let cents: u64 = match frac {
            "" => 0,
            digits => format!("{:0<2}", digits).parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Price)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

/// Accepts price text (`"25.00"`) or a plain number, validated like [`FromStr`].
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct PriceVisitor;

        impl Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative amount with at most two decimals")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Price, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Price, E> {
                v.checked_mul(100)
                    .map(Price)
                    .ok_or_else(|| E::custom(GarbError::InvalidPrice(v.to_string())))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Price, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom(GarbError::InvalidPrice(v.to_string())))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Price, E> {
                self.visit_str(&v.to_string())
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

/// The identity of a garment, as handed to the order workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRef {
    pub name: String,
    pub product_code: u64,
}

impl fmt::Display for ProductRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.product_code)
    }
}

/// One sellable catalog item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GarmentRecord {
    name: String,
    product_code: u64,
    price: Price,
    description: String,
    #[serde(skip)]
    category: Category,
    attributes: BTreeMap<AttributeKind, Facet>,
}

impl GarmentRecord {
    pub fn builder(
        category: Category,
        name: impl Into<String>,
        product_code: u64,
        price: Price,
    ) -> GarmentBuilder {
        GarmentBuilder {
            category,
            name: name.into(),
            product_code,
            price,
            description: String::new(),
            brand: None,
            material: None,
            sizes: BTreeSet::new(),
            extras: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_code(&self) -> u64 {
        self.product_code
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn brand(&self) -> &str {
        self.attributes
            .get(&AttributeKind::Brand)
            .and_then(|facet| match facet {
                Facet::One(v) => v.as_brand(),
                Facet::Many(_) => None,
            })
            .unwrap_or_default()
    }

    pub fn sizes(&self) -> impl Iterator<Item = Size> + '_ {
        self.attributes
            .get(&AttributeKind::Size)
            .into_iter()
            .flat_map(|facet| facet.values())
            .filter_map(AttrValue::as_size)
    }

    /// Look up one entry of the attribute bag. `None` means the attribute
    /// does not apply to this garment (or was not recorded).
    pub fn attr(&self, kind: AttributeKind) -> Option<&Facet> {
        self.attributes.get(&kind)
    }

    pub fn attributes(&self) -> &BTreeMap<AttributeKind, Facet> {
        &self.attributes
    }

    pub fn product_ref(&self) -> ProductRef {
        ProductRef {
            name: self.name.clone(),
            product_code: self.product_code,
        }
    }
}

/// Builder for [`GarmentRecord`].
///
/// `build()` checks the bag invariants: non-empty name and brand, a material,
/// at least one size, and category-specific attributes only for their category.
#[derive(Debug, Clone)]
pub struct GarmentBuilder {
    category: Category,
    name: String,
    product_code: u64,
    price: Price,
    description: String,
    brand: Option<String>,
    material: Option<Material>,
    sizes: BTreeSet<Size>,
    extras: Vec<AttrValue>,
}

impl GarmentBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    pub fn sizes(mut self, sizes: impl IntoIterator<Item = Size>) -> Self {
        self.sizes.extend(sizes);
        self
    }

    /// Add a category-specific attribute (neckline, sleeve type, hoodie style, pocket type).
    pub fn attr(mut self, value: impl Into<AttrValue>) -> Self {
        self.extras.push(value.into());
        self
    }

    pub fn build(self) -> Result<GarmentRecord> {
        if self.name.trim().is_empty() {
            return Err(GarbError::InvalidGarment("name cannot be empty".to_string()));
        }
        let brand = self
            .brand
            .filter(|b| !b.trim().is_empty())
            .ok_or_else(|| GarbError::InvalidGarment(format!("'{}' has no brand", self.name)))?;
        let material = self
            .material
            .ok_or_else(|| GarbError::InvalidGarment(format!("'{}' has no material", self.name)))?;
        if self.sizes.is_empty() {
            return Err(GarbError::InvalidGarment(format!("'{}' is not stocked in any size", self.name)));
        }

        let mut attributes = BTreeMap::new();
        attributes.insert(AttributeKind::Category, Facet::One(self.category.into()));
        attributes.insert(AttributeKind::Brand, Facet::One(AttrValue::Brand(brand)));
        attributes.insert(AttributeKind::Material, Facet::One(material.into()));
        attributes.insert(
            AttributeKind::Size,
            Facet::Many(self.sizes.into_iter().map(AttrValue::from).collect()),
        );

        for value in self.extras {
            let spec = value.kind().spec();
            if spec.applies_to.is_none() {
                return Err(GarbError::InvalidGarment(format!(
                    "{} is not a category-specific attribute",
                    spec.kind
                )));
            }
            if !spec.applies(self.category) {
                return Err(GarbError::InvalidGarment(format!(
                    "{} does not apply to {}",
                    spec.kind, self.category
                )));
            }
            attributes.insert(spec.kind, Facet::One(value));
        }

        Ok(GarmentRecord {
            name: self.name,
            product_code: self.product_code,
            price: self.price,
            description: self.description,
            category: self.category,
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{HoodieStyle, Neckline, SleeveType};

    fn tee() -> GarmentBuilder {
        GarmentRecord::builder(Category::TShirt, "Crew Tee", 1001, Price::from_cents(2500))
            .brand("Acme")
            .material(Material::Cotton)
            .sizes([Size::S, Size::M])
    }

    #[test]
    fn price_parses_whole_and_fractional_amounts() {
        assert_eq!("25".parse::<Price>().unwrap(), Price::from_cents(2500));
        assert_eq!("25.5".parse::<Price>().unwrap(), Price::from_cents(2550));
        assert_eq!("25.05".parse::<Price>().unwrap(), Price::from_cents(2505));
        assert_eq!(" 0.99 ".parse::<Price>().unwrap(), Price::from_cents(99));
        assert_eq!(".99".parse::<Price>().unwrap(), Price::from_cents(99));
        assert_eq!(".5".parse::<Price>().unwrap(), Price::from_cents(50));
        assert_eq!("10.".parse::<Price>().unwrap(), Price::from_cents(1000));
    }

    #[test]
    fn price_rejects_bad_text() {
        for bad in ["", ".", " . ", "-1", "+3", "abc", "1..5", "1.-5", "19.999", "1.234", "1e3", "1,00", "99999999999999999999"] {
            assert!(bad.parse::<Price>().is_err(), "{bad}");
        }
    }

    #[test]
    fn price_deserializes_from_text_or_number() {
        let price: Price = serde_json::from_str("\"19.5\"").unwrap();
        assert_eq!(price, Price::from_cents(1950));
        let price: Price = serde_json::from_str("40").unwrap();
        assert_eq!(price, Price::from_cents(4000));
        let price: Price = serde_json::from_str("12.25").unwrap();
        assert_eq!(price, Price::from_cents(1225));

        assert!(serde_json::from_str::<Price>("-5").is_err());
        assert!(serde_json::from_str::<Price>("\"1.999\"").is_err());
    }

    #[test]
    fn price_displays_two_decimals() {
        assert_eq!(Price::from_cents(2500).to_string(), "25.00");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn builder_assembles_the_bag() {
        let record = tee()
            .attr(Neckline::Crew)
            .attr(SleeveType::Short)
            .description("A classic")
            .build()
            .unwrap();

        assert_eq!(record.category(), Category::TShirt);
        assert_eq!(record.brand(), "Acme");
        assert_eq!(record.sizes().collect::<Vec<_>>(), vec![Size::S, Size::M]);
        assert_eq!(
            record.attr(AttributeKind::Neckline),
            Some(&Facet::One(Neckline::Crew.into()))
        );
        assert!(record.attr(AttributeKind::HoodieStyle).is_none());
        assert_eq!(record.attributes().len(), 6);
    }

    #[test]
    fn builder_rejects_inapplicable_attribute() {
        let err = tee().attr(HoodieStyle::Pullover).build().unwrap_err();
        assert!(matches!(err, GarbError::InvalidGarment(_)));
    }

    #[test]
    fn builder_rejects_core_kinds_as_extras() {
        assert!(tee().attr(Material::Polyester).build().is_err());
    }

    #[test]
    fn builder_requires_sizes_and_brand() {
        let no_sizes = GarmentRecord::builder(Category::Hoodie, "Hood", 1, Price::ZERO)
            .brand("Zeta")
            .material(Material::Cotton)
            .build();
        assert!(no_sizes.is_err());

        let blank_brand = tee().brand("  ").build();
        assert!(blank_brand.is_err());
    }

    #[test]
    fn product_ref_carries_identity() {
        let record = tee().build().unwrap();
        let product = record.product_ref();
        assert_eq!(product.name, "Crew Tee");
        assert_eq!(product.product_code, 1001);
        assert_eq!(product.to_string(), "Crew Tee (1001)");
    }
}
