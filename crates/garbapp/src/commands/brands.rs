use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Every brand seen while loading the catalog, sorted.
pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let brands: Vec<String> = catalog.brands().iter().cloned().collect();
    let mut result = CmdResult::default();
    if brands.is_empty() {
        result.add_message(CmdMessage::info("The catalog has no brands"));
    }
    Ok(result.with_values(brands))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::two_item_catalog;

    #[test]
    fn test_lists_brands_sorted() {
        let result = run(&two_item_catalog()).unwrap();
        assert_eq!(result.values, vec!["Acme", "Zeta"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let result = run(&Catalog::new()).unwrap();
        assert!(result.values.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
