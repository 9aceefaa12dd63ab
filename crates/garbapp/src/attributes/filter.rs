//! Attribute constraints.
//!
//! A query holds one [`Constraint`] per attribute kind it cares about.
//! Instead of per-attribute comparison code, `Constraint::admits` expresses
//! the comparison once for every kind, driven by the shape of both sides.

use super::{AttrValue, Facet};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A required value, or a set of acceptable values, for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Constraint {
    /// The garment must hold exactly this value.
    Exact(AttrValue),
    /// The garment must hold at least one of these values.
    AnyOf(BTreeSet<AttrValue>),
}

impl Constraint {
    /// Check whether a garment's facet satisfies this constraint.
    ///
    /// - `Exact` against a single value is equality; against a set it is membership.
    /// - `AnyOf` needs a non-empty intersection: a garment stocked in {S, M}
    ///   is admitted by {M, L}, not by {XL}.
    pub fn admits(&self, facet: &Facet) -> bool {
        match self {
            Constraint::Exact(wanted) => facet.holds(wanted),
            Constraint::AnyOf(acceptable) => match facet {
                Facet::One(v) => acceptable.contains(v),
                Facet::Many(held) => !held.is_disjoint(acceptable),
            },
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Exact(v) => write!(f, "{}", v),
            Constraint::AnyOf(set) => {
                let labels: Vec<String> = set.iter().map(|v| v.to_string()).collect();
                write!(f, "any of {}", labels.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{Category, Material, Size};

    fn sizes(list: &[Size]) -> BTreeSet<AttrValue> {
        list.iter().map(|s| AttrValue::from(*s)).collect()
    }

    #[test]
    fn exact_matches_equal_single_value() {
        let c = Constraint::Exact(Material::Cotton.into());
        assert!(c.admits(&Facet::One(Material::Cotton.into())));
        assert!(!c.admits(&Facet::One(Material::Polyester.into())));
    }

    #[test]
    fn exact_against_set_is_membership() {
        let c = Constraint::Exact(Size::M.into());
        assert!(c.admits(&Facet::Many(sizes(&[Size::S, Size::M]))));
        assert!(!c.admits(&Facet::Many(sizes(&[Size::L]))));
    }

    #[test]
    fn any_of_needs_one_shared_size() {
        let stocked = Facet::Many(sizes(&[Size::S, Size::M]));
        assert!(Constraint::AnyOf(sizes(&[Size::M, Size::L])).admits(&stocked));
        assert!(!Constraint::AnyOf(sizes(&[Size::XL])).admits(&stocked));
    }

    #[test]
    fn any_of_against_single_value() {
        let c = Constraint::AnyOf(
            [AttrValue::brand("Acme"), AttrValue::brand("Zeta")]
                .into_iter()
                .collect(),
        );
        assert!(c.admits(&Facet::One(AttrValue::brand("Zeta"))));
        assert!(!c.admits(&Facet::One(AttrValue::brand("Other"))));
    }

    #[test]
    fn empty_any_of_admits_nothing() {
        let c = Constraint::AnyOf(BTreeSet::new());
        assert!(!c.admits(&Facet::Many(sizes(&[Size::S]))));
        assert!(!c.admits(&Facet::One(Material::Cotton.into())));
    }

    #[test]
    fn value_of_other_kind_never_matches() {
        let c = Constraint::Exact(Category::Hoodie.into());
        assert!(!c.admits(&Facet::One(Material::Cotton.into())));
    }

    #[test]
    fn displays_readably() {
        assert_eq!(Constraint::Exact(Size::M.into()).to_string(), "M");
        assert_eq!(
            Constraint::AnyOf(sizes(&[Size::L, Size::S])).to_string(),
            "any of S, L"
        );
    }
}
