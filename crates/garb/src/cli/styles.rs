//! Styles for the garb CLI.
//!
//! Renderers refer to styles by what the text *is* (a garment name, a
//! caption, a price), never by color. The visual values live here only.
//!
//! `console` drops the escape codes when stdout is not a terminal or when
//! `NO_COLOR` is set, so piped output and tests see plain text.

use console::Style;
use garbapp::commands::MessageLevel;

pub fn title() -> Style {
    Style::new().bold()
}

pub fn caption() -> Style {
    Style::new().italic().color256(245)
}

pub fn label() -> Style {
    Style::new().color256(245)
}

pub fn code() -> Style {
    Style::new().color256(172)
}

pub fn price() -> Style {
    Style::new().green().bold()
}

pub fn message(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::new().color256(245),
        MessageLevel::Success => Style::new().green(),
        MessageLevel::Warning => Style::new().yellow().bold(),
    }
}
