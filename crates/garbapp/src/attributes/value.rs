//! Attribute value types.
//!
//! Each closed attribute kind gets its own enum, declared through
//! `closed_domain!` so the label and alias tables that drive decoding live
//! next to the variants. [`AttrValue`] wraps any of them (plus open brand
//! text) and [`Facet`] is the record-side bag entry.

use super::spec::AttributeKind;
use super::{decode_closed, ClosedDomain};
use crate::error::{GarbError, Result};
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

macro_rules! closed_domain {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:ident {
            $( $variant:ident => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl ClosedDomain for $name {
            const KIND: AttributeKind = AttributeKind::$kind;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn label(self) -> &'static str {
                $name::label(self)
            }

            fn aliases(self) -> &'static [&'static str] {
                match self {
                    $($name::$variant => &[$($alias),*]),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = GarbError;

            fn from_str(s: &str) -> Result<Self> {
                decode_closed(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl From<$name> for AttrValue {
            fn from(value: $name) -> Self {
                AttrValue::$kind(value)
            }
        }
    };
}

closed_domain! {
    /// Top-level garment kind; decides which extra attributes apply.
    Category => Category {
        TShirt => "T-Shirt" | "TShirt" | "Tee",
        Hoodie => "Hoodie",
    }
}

closed_domain! {
    Material => Material {
        Cotton => "Cotton",
        Polyester => "Polyester",
        WoolBlend => "Wool Blend",
    }
}

closed_domain! {
    /// Sizes run XS to 4XL; the repeated-X spellings are accepted on input.
    Size => Size {
        XS => "XS",
        S => "S",
        M => "M",
        L => "L",
        XL => "XL",
        XXL => "2XL" | "XXL",
        XXXL => "3XL" | "XXXL",
        XXXXL => "4XL" | "XXXXL",
    }
}

closed_domain! {
    Neckline => Neckline {
        Crew => "Crew",
        VNeck => "V-Neck",
        Scoop => "Scoop",
        Henley => "Henley",
    }
}

closed_domain! {
    SleeveType => SleeveType {
        Short => "Short",
        Long => "Long",
        ThreeQuarter => "Three Quarter",
        Sleeveless => "Sleeveless",
    }
}

closed_domain! {
    HoodieStyle => HoodieStyle {
        Pullover => "Pullover",
        ZipUp => "Zip-Up",
    }
}

closed_domain! {
    PocketType => PocketType {
        Kangaroo => "Kangaroo",
        Zippered => "Zippered",
        Split => "Split",
    }
}

/// Runtime representation of an attribute value of any kind.
///
/// Used both as a stored property and as a query constraint value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Category(Category),
    /// Brand names are open text, compared verbatim.
    Brand(String),
    Material(Material),
    Size(Size),
    Neckline(Neckline),
    SleeveType(SleeveType),
    HoodieStyle(HoodieStyle),
    PocketType(PocketType),
}

impl AttrValue {
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttrValue::Category(_) => AttributeKind::Category,
            AttrValue::Brand(_) => AttributeKind::Brand,
            AttrValue::Material(_) => AttributeKind::Material,
            AttrValue::Size(_) => AttributeKind::Size,
            AttrValue::Neckline(_) => AttributeKind::Neckline,
            AttrValue::SleeveType(_) => AttributeKind::SleeveType,
            AttrValue::HoodieStyle(_) => AttributeKind::HoodieStyle,
            AttrValue::PocketType(_) => AttributeKind::PocketType,
        }
    }

    pub fn brand(name: impl Into<String>) -> Self {
        AttrValue::Brand(name.into())
    }

    pub fn as_category(&self) -> Option<Category> {
        match self {
            AttrValue::Category(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_brand(&self) -> Option<&str> {
        match self {
            AttrValue::Brand(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_size(&self) -> Option<Size> {
        match self {
            AttrValue::Size(s) => Some(*s),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Category(v) => write!(f, "{}", v),
            AttrValue::Brand(v) => f.write_str(v),
            AttrValue::Material(v) => write!(f, "{}", v),
            AttrValue::Size(v) => write!(f, "{}", v),
            AttrValue::Neckline(v) => write!(f, "{}", v),
            AttrValue::SleeveType(v) => write!(f, "{}", v),
            AttrValue::HoodieStyle(v) => write!(f, "{}", v),
            AttrValue::PocketType(v) => write!(f, "{}", v),
        }
    }
}

/// An entry in a garment's attribute bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Facet {
    One(AttrValue),
    Many(BTreeSet<AttrValue>),
}

impl Facet {
    /// Whether the facet holds `value`, as its single value or as a set member.
    pub fn holds(&self, value: &AttrValue) -> bool {
        match self {
            Facet::One(v) => v == value,
            Facet::Many(set) => set.contains(value),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &AttrValue> + '_ {
        let (one, many) = match self {
            Facet::One(v) => (Some(v), None),
            Facet::Many(set) => (None, Some(set.iter())),
        };
        one.into_iter().chain(many.into_iter().flatten())
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::One(v) => write!(f, "{}", v),
            Facet::Many(set) => {
                let labels: Vec<String> = set.iter().map(|v| v.to_string()).collect();
                f.write_str(&labels.join(", "))
            }
        }
    }
}
