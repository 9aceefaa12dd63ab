use crate::attributes::AttributeKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GarbError {
    #[error("Catalog unavailable at {}: {source}", path.display())]
    CatalogUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog line {line}, field `{field}`: {reason}")]
    MalformedCatalogLine {
        line: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Unknown {kind} value: '{text}'")]
    UnknownAttributeText { kind: AttributeKind, text: String },

    #[error("Invalid garment: {0}")]
    InvalidGarment(String),

    #[error("Invalid price '{0}': expected a non-negative amount with at most two decimals")]
    InvalidPrice(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<confique::Error> for GarbError {
    fn from(e: confique::Error) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GarbError>;
