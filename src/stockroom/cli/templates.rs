//! # CLI Templates
//!
//! Output is rendered from minijinja templates kept in stand-alone files under
//! `templates/`, included here as string constants.
//!
//! Whitespace is controlled explicitly with `-%}`: every line break in the
//! output comes from a visible line in the template. Column widths and
//! truncation are worked out in Rust before the data reaches a template;
//! templates only pick styles and decide what to show.

pub const MENU_TEMPLATE: &str = include_str!("templates/menu.tmp");
pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const CATEGORIES_TEMPLATE: &str = include_str!("templates/categories.tmp");
pub const SUMMARY_TEMPLATE: &str = include_str!("templates/summary.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");

/// Template names as registered with the renderer.
pub const ALL: [(&str, &str); 5] = [
    ("menu", MENU_TEMPLATE),
    ("table", TABLE_TEMPLATE),
    ("categories", CATEGORIES_TEMPLATE),
    ("summary", SUMMARY_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
];
