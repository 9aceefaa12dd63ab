//! # Garb CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/garbapp/`: core library with UI-agnostic business logic
//! - `crates/garb/`: this CLI tool, depends on the `garbapp` library
//!
//! Everything from `garbapp::api` inward is UI agnostic: functions take normal
//! Rust values, return normal Rust types, and never assume terminal I/O. The
//! CLI layer is therefore responsible for **all** user-facing concerns:
//! argument parsing, logging setup, context initialization, dispatch, error
//! reporting and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
