//! # Check Command
//!
//! Summarizes a loaded catalog: record and brand counts, records per
//! category, and product codes shared by more than one record. Loading has
//! already validated every line, so `check` only reports; it never fails on
//! a catalog that loaded.

use crate::attributes::Category;
use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub garments: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub garments: usize,
    pub brands: usize,
    pub per_category: Vec<CategoryCount>,
    /// Product codes carried by more than one record.
    pub duplicate_codes: Vec<u64>,
}

impl CatalogSummary {
    pub fn of(catalog: &Catalog) -> Self {
        let per_category = Category::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                garments: catalog
                    .garments()
                    .iter()
                    .filter(|g| g.category() == category)
                    .count(),
            })
            .collect();

        let mut codes: BTreeMap<u64, usize> = BTreeMap::new();
        for garment in catalog.garments() {
            *codes.entry(garment.product_code()).or_default() += 1;
        }
        let duplicate_codes = codes
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(code, _)| code)
            .collect();

        Self {
            garments: catalog.len(),
            brands: catalog.brands().len(),
            per_category,
            duplicate_codes,
        }
    }
}

pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let summary = CatalogSummary::of(catalog);
    let mut result = CmdResult::default();

    if summary.garments == 0 {
        result.add_message(CmdMessage::warning("The catalog is empty"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Catalog OK: {} garments from {} brands",
            summary.garments, summary.brands
        )));
    }
    for code in &summary.duplicate_codes {
        result.add_message(CmdMessage::warning(format!(
            "Product code {} is used by more than one garment",
            code
        )));
    }

    Ok(result.with_summary(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{crew_tee, two_item_catalog};
    use crate::commands::MessageLevel;

    #[test]
    fn test_summary_counts() {
        let summary = CatalogSummary::of(&two_item_catalog());
        assert_eq!(summary.garments, 2);
        assert_eq!(summary.brands, 2);
        assert_eq!(
            summary.per_category,
            vec![
                CategoryCount {
                    category: Category::TShirt,
                    garments: 1
                },
                CategoryCount {
                    category: Category::Hoodie,
                    garments: 1
                },
            ]
        );
        assert!(summary.duplicate_codes.is_empty());
    }

    #[test]
    fn test_check_reports_success() {
        let result = run(&two_item_catalog()).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.summary.is_some());
    }

    #[test]
    fn test_duplicate_codes_are_warned() {
        let mut catalog = two_item_catalog();
        catalog.insert(crew_tee());
        let result = run(&catalog).unwrap();
        assert_eq!(result.summary.as_ref().unwrap().duplicate_codes, vec![1001]);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
    }

    #[test]
    fn test_empty_catalog_warns() {
        let result = run(&Catalog::new()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.summary.unwrap().garments, 0);
    }
}
