//! # CLI Behavior
//!
//! This is **one possible UI client** for garb, not the application itself.
//! For the overall architecture, see the `garbapp` crate documentation.
//!
//! ## Commands
//!
//! - `garb search --category <C> [filters]`: attribute search. Every filter
//!   is optional; sizes and brands accept several values and match when the
//!   garment has at least one of them. Filters that do not apply to the
//!   chosen category are ignored with a warning.
//! - `garb brands`: the brands found in the catalog.
//! - `garb values <kind>`: the legal values of an attribute, for building filters.
//! - `garb check`: load the catalog and print a summary.
//!
//! The catalog is loaded once per invocation. A malformed inventory stops the
//! program with the line number and field at fault.
//!
//! ## Module Structure
//!
//! - `commands`: Startup, logging and dispatch to the API
//! - `render`: Output formatting (item blocks, listings, JSON)
//! - `setup`: Argument parsing via clap, help text
//! - `styles`: Terminal styling

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
