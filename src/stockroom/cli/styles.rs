//! Styles for the stockroom shell.
//!
//! Templates refer to styles by semantic name only (`heading`, `money`,
//! `low`, ...) through the `style` filter. What each name looks like is decided
//! here, once, so the visual side can change without touching templates.
//!
//! A name with no registered style renders with a `(!?)` prefix, which makes
//! typos in templates show up immediately.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Semantic style names used by the templates.
pub mod names {
    pub const HEADING: &str = "heading";
    pub const HEADER: &str = "header";
    pub const RULE: &str = "rule";
    pub const FRAME: &str = "frame";
    pub const MONEY: &str = "money";
    pub const VALUE: &str = "value";
    pub const LOW: &str = "low";
    pub const MUTED: &str = "muted";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// A registry of named styles.
#[derive(Clone, Default)]
pub struct Styles {
    styles: HashMap<String, Style>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style. Returns self for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style, emitting ANSI codes.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Plain-text mode: text passes through untouched, but unknown names are
    /// still flagged.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}

pub static STOCKROOM_THEME: Lazy<Styles> = Lazy::new(|| {
    Styles::new()
        .add(names::HEADING, Style::new().bold().cyan())
        .add(names::HEADER, Style::new().bold())
        .add(names::RULE, Style::new().dim())
        .add(names::FRAME, Style::new().cyan())
        .add(names::MONEY, Style::new().green())
        .add(names::VALUE, Style::new().bold())
        .add(names::LOW, Style::new().red().bold())
        .add(names::MUTED, Style::new().dim().italic())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red())
});
