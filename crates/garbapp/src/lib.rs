//! # Garb Architecture
//!
//! Garb is a **UI-agnostic garment catalog library**: it loads a plain text
//! inventory of T-shirts and hoodies and answers attribute-based searches over
//! it. The `garb` binary is one client of this library, not the application.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/garb)                                    │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the loaded catalog       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Search forms, listings, catalog checks                   │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (attributes, model, catalog, query, matcher)          │
//! │  - Taxonomy, records, loader, query specs, match engine     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns regular
//! Rust types. It never writes to stdout/stderr and never exits the process.
//! Diagnostics go through `tracing`; the client decides where they end up.
//!
//! ## The Attribute Bag
//!
//! Every garment carries a map from [`attributes::AttributeKind`] to a value
//! (or a set of values, for sizes). A key is present only when the attribute
//! applies to the garment's category, so a neckline filter can never match a
//! hoodie. Queries are the mirror image: a sparse map of required values plus
//! an inclusive price range. See [`matcher`] for the comparison rules.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`attributes`]: Attribute kinds, value enums, decoding and constraints
//! - [`model`]: `GarmentRecord` and `Price`
//! - [`catalog`]: The loaded catalog and the inventory file loader
//! - [`query`]: `QuerySpec` and its builder
//! - [`matcher`]: The match engine
//! - [`config`]: Configuration management
//! - [`init`]: Startup (configuration + catalog load)
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod matcher;
pub mod model;
pub mod query;
