//! # Command Layer
//!
//! This module contains the **core business logic** of garb. Each command lives in its
//! own submodule and implements pure Rust functions over a loaded [`Catalog`](crate::catalog::Catalog).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Turn a textual [`search::SearchForm`] into a validated query
//! - Run the match engine and order its hits
//! - Return structured `CmdResult` with listed garments, values and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any I/O**: No stdout, stderr, file formatting, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. This struct carries:
//! - `listed_garments`: Garments to display, in the requested order
//! - `values`: Plain value listings (brands, legal values of a kind)
//! - `summary`: Catalog statistics (for `check`)
//! - `messages`: Structured messages with levels (info, success, warning, error)
//!
//! ## Command Modules
//!
//! - [`search`]: Form-driven attribute search
//! - [`brands`]: Brand listing of the loaded catalog
//! - [`values`]: Legal values of one attribute kind
//! - [`check`]: Catalog summary and consistency report

use crate::model::GarmentRecord;
use serde::Serialize;

pub mod brands;
pub mod check;
pub mod search;
pub mod values;

pub use check::{CatalogSummary, CategoryCount};
pub use search::{SearchForm, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_garments: Vec<GarmentRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CatalogSummary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_garments(mut self, garments: Vec<GarmentRecord>) -> Self {
        self.listed_garments = garments;
        self
    }

    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    pub fn with_summary(mut self, summary: CatalogSummary) -> Self {
        self.summary = Some(summary);
        self
    }
}
