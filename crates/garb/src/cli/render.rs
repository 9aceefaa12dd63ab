//! # Rendering Module
//!
//! Turns a [`CmdResult`] into the text the CLI prints.
//!
//! ## Output Modes
//!
//! - `Text`: human-oriented blocks, styled through [`styles`](super::styles)
//! - `Json`: the `CmdResult` serialized as is, for scripts
//!
//! ## The Item Block
//!
//! Each listed garment renders as one block:
//!
//! ```text
//! Crew Tee
//! ────────
//!   Soft, everyday crew neck tee
//!   Product code  1001
//!   Brand         Acme
//!   Material      Cotton
//!   Sizes         S, M
//!   Neckline      Crew
//!   Sleeve type   Short
//!   Price         $25.00
//! ```
//!
//! Only the attributes the garment carries are shown, so a hoodie block has
//! hoodie style and pocket type where a shirt has neckline and sleeve type.
//! Labels are aligned by display width (`unicode-width`).

use super::styles;
use garbapp::attributes::{AttributeKind, Shape};
use garbapp::commands::{CatalogSummary, CmdMessage, CmdResult};
use garbapp::model::GarmentRecord;
use unicode_width::UnicodeWidthStr;

const INDENT: &str = "  ";
const RULE: &str = "─";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

pub fn render(result: &CmdResult, mode: OutputMode) -> serde_json::Result<String> {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(result).map(|json| json + "\n"),
        OutputMode::Text => Ok(render_text(result)),
    }
}

fn render_text(result: &CmdResult) -> String {
    let mut sections: Vec<String> = Vec::new();

    if !result.listed_garments.is_empty() {
        let blocks: Vec<String> = result.listed_garments.iter().map(render_garment).collect();
        sections.push(blocks.join("\n"));
    }
    if !result.values.is_empty() {
        sections.push(render_values(&result.values));
    }
    if let Some(summary) = &result.summary {
        sections.push(render_summary(summary));
    }
    if !result.messages.is_empty() {
        sections.push(render_messages(&result.messages));
    }

    sections.join("\n")
}

/// One garment as an item information block.
pub fn render_garment(garment: &GarmentRecord) -> String {
    let mut rows: Vec<(String, String)> = vec![(
        "Product code".to_string(),
        styles::code().apply_to(garment.product_code()).to_string(),
    )];
    for (kind, facet) in garment.attributes() {
        if *kind == AttributeKind::Category {
            continue;
        }
        rows.push((feature_label(*kind), facet.to_string()));
    }
    rows.push((
        "Price".to_string(),
        styles::price()
            .apply_to(format!("${}", garment.price()))
            .to_string(),
    ));

    let name = garment.name();
    let mut out = format!(
        "{}\n{}\n",
        styles::title().apply_to(name),
        RULE.repeat(name.width())
    );
    if !garment.description().is_empty() {
        out.push_str(&format!(
            "{INDENT}{}\n",
            styles::caption().apply_to(garment.description())
        ));
    }
    out.push_str(&aligned_rows(&rows));
    out
}

/// "Sleeve type", "Sizes".
fn feature_label(kind: AttributeKind) -> String {
    let spec = kind.spec();
    let mut chars = spec.name.chars();
    let mut label: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    if spec.shape == Shape::Set {
        label.push('s');
    }
    label
}

fn aligned_rows(rows: &[(String, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| {
            let padding = " ".repeat(width - label.width() + 2);
            format!(
                "{INDENT}{}{}{}\n",
                styles::label().apply_to(label),
                padding,
                value
            )
        })
        .collect()
}

fn render_values(values: &[String]) -> String {
    values.iter().map(|value| format!("{value}\n")).collect()
}

fn render_summary(summary: &CatalogSummary) -> String {
    let mut rows = vec![
        ("Garments".to_string(), summary.garments.to_string()),
        ("Brands".to_string(), summary.brands.to_string()),
    ];
    for count in &summary.per_category {
        rows.push((count.category.to_string(), count.garments.to_string()));
    }
    aligned_rows(&rows)
}

fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            format!(
                "{}\n",
                styles::message(message.level).apply_to(&message.content)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use garbapp::attributes::{Category, HoodieStyle, Material, Neckline, PocketType, Size, SleeveType};
    use garbapp::model::Price;

    fn plain() {
        console::set_colors_enabled(false);
    }

    fn tee() -> GarmentRecord {
        GarmentRecord::builder(Category::TShirt, "Crew Tee", 1001, Price::from_cents(2500))
            .brand("Acme")
            .material(Material::Cotton)
            .sizes([Size::S, Size::M])
            .attr(Neckline::Crew)
            .attr(SleeveType::Short)
            .description("Soft, everyday crew neck tee")
            .build()
            .unwrap()
    }

    fn hoodie() -> GarmentRecord {
        GarmentRecord::builder(Category::Hoodie, "Campus Hoodie", 2002, Price::from_cents(6000))
            .brand("Zeta")
            .material(Material::WoolBlend)
            .sizes([Size::M, Size::L])
            .attr(HoodieStyle::Pullover)
            .attr(PocketType::Kangaroo)
            .build()
            .unwrap()
    }

    #[test]
    fn test_garment_block() {
        plain();
        let expected = "\
Crew Tee
────────
  Soft, everyday crew neck tee
  Product code  1001
  Brand         Acme
  Material      Cotton
  Sizes         S, M
  Neckline      Crew
  Sleeve type   Short
  Price         $25.00
";
        assert_eq!(render_garment(&tee()), expected);
    }

    #[test]
    fn test_hoodie_block_shows_hoodie_features() {
        plain();
        let block = render_garment(&hoodie());
        assert!(block.contains("Hoodie style  Pullover"));
        assert!(block.contains("Pocket type   Kangaroo"));
        assert!(!block.contains("Neckline"));
        assert!(block.contains("$60.00"));
    }

    #[test]
    fn test_feature_labels() {
        assert_eq!(feature_label(AttributeKind::SleeveType), "Sleeve type");
        assert_eq!(feature_label(AttributeKind::Size), "Sizes");
        assert_eq!(feature_label(AttributeKind::Brand), "Brand");
    }

    #[test]
    fn test_text_sections() {
        plain();
        let mut result =
            CmdResult::default().with_values(vec!["Acme".to_string(), "Zeta".to_string()]);
        result.add_message(CmdMessage::warning("careful"));

        let out = render(&result, OutputMode::Text).unwrap();
        assert_eq!(out, "Acme\nZeta\n\ncareful\n");
    }

    #[test]
    fn test_summary() {
        plain();
        let summary = CatalogSummary {
            garments: 3,
            brands: 2,
            per_category: vec![],
            duplicate_codes: vec![],
        };
        let out = render(&CmdResult::default().with_summary(summary), OutputMode::Text).unwrap();
        assert_eq!(out, "  Garments  3\n  Brands    2\n");
    }

    #[test]
    fn test_json_mode() {
        let result = CmdResult::default().with_listed_garments(vec![tee()]);
        let out = render(&result, OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["listed_garments"][0]["name"], "Crew Tee");
        assert_eq!(value["listed_garments"][0]["price"], 25.0);
        assert!(value["messages"].as_array().unwrap().is_empty());
    }
}
