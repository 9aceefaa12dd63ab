//! Legal values of one attribute kind, as offered to a user picking filters.
//!
//! Closed kinds list their taxonomy values in declaration order. BRAND is
//! open, so its values come from the loaded catalog.

use crate::attributes::{self, AttributeKind};
use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(catalog: &Catalog, kind: AttributeKind) -> Result<CmdResult> {
    let values: Vec<String> = match kind {
        AttributeKind::Brand => catalog.brands().iter().cloned().collect(),
        _ => attributes::values_for(kind)
            .iter()
            .map(ToString::to_string)
            .collect(),
    };

    let mut result = CmdResult::default();
    if let Some(category) = kind.spec().applies_to {
        result.add_message(CmdMessage::info(format!(
            "{} applies to {} only",
            kind, category
        )));
    }
    Ok(result.with_values(values))
}
