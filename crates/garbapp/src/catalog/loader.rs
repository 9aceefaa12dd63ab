//! Inventory file parsing.
//!
//! The inventory is UTF-8 text. The first line is a header and is skipped;
//! every other non-blank line describes one garment:
//!
//! ```text
//! CATEGORY,Name,ProductCode,Price,Brand,Material,Neckline,SleeveType,PocketType,HoodieStyle[Size1,Size2][free text description]
//! ```
//!
//! The ten scalar fields come before the first `[`. The first bracketed
//! segment lists sizes, the second holds the description; commas inside the
//! description are text, only `]` ends it. Fields that do not apply to the
//! garment's category hold the `NA` sentinel.
//!
//! Loading is all-or-nothing: the first field that fails to decode aborts the
//! load with [`GarbError::MalformedCatalogLine`], naming the file line number
//! (the header is line 1) and the field. No partial catalog is ever returned.

use super::Catalog;
use crate::attributes::{decode, decode_closed, decode_field, AttributeKind, Category, Material, Size};
use crate::error::{GarbError, Result};
use crate::model::{GarmentRecord, Price};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Scalar field names, in column order.
const FIELDS: [&str; 10] = [
    "category",
    "name",
    "product code",
    "price",
    "brand",
    "material",
    "neckline",
    "sleeve type",
    "pocket type",
    "hoodie style",
];

/// Columns holding category-specific attributes.
const CATEGORY_SPECIFIC: [(usize, AttributeKind); 4] = [
    (6, AttributeKind::Neckline),
    (7, AttributeKind::SleeveType),
    (8, AttributeKind::PocketType),
    (9, AttributeKind::HoodieStyle),
];

/// Read and parse an inventory file.
pub fn load_path(path: &Path) -> Result<Catalog> {
    debug!(path = %path.display(), "reading catalog");
    let text = fs::read_to_string(path).map_err(|source| GarbError::CatalogUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&text)
}

pub fn load_str(text: &str) -> Result<Catalog> {
    load(text.lines())
}

/// Parse inventory lines, the first of which is a header.
pub fn load<I, S>(lines: I) -> Result<Catalog>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut catalog = Catalog::new();
    for (index, line) in lines.into_iter().enumerate().skip(1) {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        catalog.insert(parse_line(index + 1, line)?);
    }
    info!(
        garments = catalog.len(),
        brands = catalog.brands().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// The three segments of an inventory line, before any decoding.
struct RawLine<'a> {
    scalars: Vec<&'a str>,
    sizes: &'a str,
    description: &'a str,
}

fn split_line(line: &str) -> std::result::Result<RawLine<'_>, (&'static str, String)> {
    let (scalars, rest) = line
        .split_once('[')
        .ok_or(("sizes", "missing '[' before the size list".to_string()))?;
    let (sizes, rest) = rest
        .split_once(']')
        .ok_or(("sizes", "size list is not closed with ']'".to_string()))?;
    let rest = rest
        .trim_start()
        .strip_prefix('[')
        .ok_or(("description", "missing '[' before the description".to_string()))?;
    let (description, trailing) = rest
        .split_once(']')
        .ok_or(("description", "description is not closed with ']'".to_string()))?;
    if !trailing.trim().is_empty() {
        return Err((
            "description",
            format!("unexpected text after the description: '{}'", trailing.trim()),
        ));
    }

    let scalars: Vec<&str> = scalars.split(',').collect();
    if scalars.len() != FIELDS.len() {
        return Err((
            "fields",
            format!(
                "expected {} comma-separated fields before '[', found {}",
                FIELDS.len(),
                scalars.len()
            ),
        ));
    }

    Ok(RawLine {
        scalars,
        sizes,
        description,
    })
}

fn parse_line(line_no: usize, line: &str) -> Result<GarmentRecord> {
    let malformed = |field: &'static str, reason: String| GarbError::MalformedCatalogLine {
        line: line_no,
        field,
        reason,
    };

    let raw = split_line(line).map_err(|(field, reason)| malformed(field, reason))?;
    let field = |pos: usize| raw.scalars[pos];

    let category: Category =
        decode_closed(field(0)).map_err(|e| malformed(FIELDS[0], e.to_string()))?;

    let name = field(1);
    if name.trim().is_empty() {
        return Err(malformed(FIELDS[1], "name cannot be empty".to_string()));
    }

    let product_code: u64 = field(2).trim().parse().map_err(|_| {
        malformed(
            FIELDS[2],
            format!("'{}' is not a non-negative integer", field(2)),
        )
    })?;

    let price: Price = field(3)
        .parse()
        .map_err(|e: GarbError| malformed(FIELDS[3], e.to_string()))?;

    let brand = decode(AttributeKind::Brand, field(4))
        .map_err(|e| malformed(FIELDS[4], e.to_string()))?;

    let material: Material =
        decode_closed(field(5)).map_err(|e| malformed(FIELDS[5], e.to_string()))?;

    let sizes = raw
        .sizes
        .split(',')
        .map(decode_closed::<Size>)
        .collect::<Result<Vec<_>>>()
        .map_err(|e| malformed("sizes", e.to_string()))?;

    let mut builder = GarmentRecord::builder(category, name, product_code, price)
        .brand(brand.to_string())
        .material(material)
        .sizes(sizes)
        .description(raw.description);

    for (pos, kind) in CATEGORY_SPECIFIC {
        let Some(value) =
            decode_field(kind, field(pos)).map_err(|e| malformed(FIELDS[pos], e.to_string()))?
        else {
            continue;
        };
        if kind.spec().applies(category) {
            builder = builder.attr(value);
        } else {
            warn!(
                line = line_no,
                field = FIELDS[pos],
                value = %value,
                category = %category,
                "ignoring attribute that does not apply to this category"
            );
        }
    }

    builder
        .build()
        .map_err(|e| malformed("garment", e.to_string()))
}
