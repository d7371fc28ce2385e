//! # Rendering
//!
//! Turns API results into terminal text through the templates in
//! [`templates`](super::templates), with styles from [`styles`](super::styles).
//!
//! Layout math (column widths, unicode-aware truncation, padding) stays in Rust.
//! Templates get pre-formatted lines plus semantic flags (`low`, message
//! level) and choose styles from those.

use super::styles::{names, Styles, STOCKROOM_THEME};
use super::templates;
use chrono::{DateTime, Utc};
use minijinja::{Environment, Value};
use rust_decimal::Decimal;
use serde::Serialize;
use stockroom::api::{CmdMessage, MessageLevel, ValuationSummary};
use stockroom::config::ShellConfig;
use stockroom::model::{Category, Product};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 20;
const QUANTITY_WIDTH: usize = 10;
const PRICE_WIDTH: usize = 11;
const REORDER_WIDTH: usize = 12;
const LEAD_TIME_WIDTH: usize = 10;
const FULL_RULE_WIDTH: usize = 90;
const LOW_STOCK_RULE_WIDTH: usize = 60;
const MENU_INNER_WIDTH: usize = 33;

#[derive(Serialize)]
struct RowData {
    line: String,
    low: bool,
}

#[derive(Serialize)]
struct TableData {
    title: String,
    header: String,
    rule: String,
    rows: Vec<RowData>,
    marker: String,
    footer: String,
    empty_message: String,
}

#[derive(Serialize)]
struct MenuData {
    top: String,
    title: String,
    middle: String,
    entries: Vec<String>,
    bottom: String,
}

#[derive(Serialize)]
struct CategoryEntry {
    number: usize,
    label: &'static str,
}

#[derive(Serialize)]
struct CategoriesData {
    categories: Vec<CategoryEntry>,
}

#[derive(Serialize)]
struct SummaryData {
    unique_products: usize,
    total_units: u64,
    total_value: String,
    low_stock_count: usize,
    low_stock_style: &'static str,
}

#[derive(Serialize)]
struct MessageData {
    icon: &'static str,
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders shell output with pre-registered templates.
pub struct Renderer {
    env: Environment<'static>,
    currency_symbol: String,
    low_stock_marker: String,
}

impl Renderer {
    pub fn new(config: &ShellConfig, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        register_style_filter(&mut env, STOCKROOM_THEME.clone(), use_color);
        for (name, source) in templates::ALL {
            if let Err(e) = env.add_template(name, source) {
                tracing::error!(template = name, error = %e, "template failed to compile");
            }
        }

        Self {
            env,
            currency_symbol: config.currency_symbol.clone(),
            low_stock_marker: config.low_stock_marker.clone(),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    /// `<symbol><amount with two decimals>`
    pub fn money(&self, value: Decimal) -> String {
        format!("{}{:.2}", self.currency_symbol, value.round_dp(2))
    }

    pub fn menu(&self, entries: &[(u8, &str)]) -> String {
        let horizontal = "─".repeat(MENU_INNER_WIDTH);
        let data = MenuData {
            top: format!("┌{}┐", horizontal),
            title: pad_to_width("   STOCKROOM INVENTORY MANAGER", MENU_INNER_WIDTH),
            middle: format!("├{}┤", horizontal),
            entries: entries
                .iter()
                .map(|(key, label)| pad_to_width(&format!(" {}. {}", key, label), MENU_INNER_WIDTH))
                .collect(),
            bottom: format!("└{}┘", horizontal),
        };
        self.render("menu", &data)
    }

    /// Full product table. `title` is printed only when there are rows.
    pub fn products(&self, title: &str, products: &[Product], empty_message: &str) -> String {
        let data = TableData {
            title: if products.is_empty() {
                String::new()
            } else {
                title.to_string()
            },
            header: full_header(),
            rule: "-".repeat(FULL_RULE_WIDTH),
            rows: products.iter().map(|p| self.full_row(p)).collect(),
            marker: self.low_stock_marker.clone(),
            footer: String::new(),
            empty_message: empty_message.to_string(),
        };
        self.render("table", &data)
    }

    /// A single search hit, with how long ago it was added.
    pub fn product_found(&self, product: &Product) -> String {
        let data = TableData {
            title: "=== Product Found ===".to_string(),
            header: full_header(),
            rule: "-".repeat(FULL_RULE_WIDTH),
            rows: vec![self.full_row(product)],
            marker: self.low_stock_marker.clone(),
            footer: format!("Added {}", format_time_ago(product.created_at(), Utc::now())),
            empty_message: String::new(),
        };
        self.render("table", &data)
    }

    pub fn low_stock(&self, products: &[Product]) -> String {
        let header = [
            cell("ID", ID_WIDTH),
            cell("Name", NAME_WIDTH),
            cell("Quantity", QUANTITY_WIDTH),
            cell("Reorder Lvl", REORDER_WIDTH),
            "Lead Time".to_string(),
        ]
        .concat();
        let rows = products
            .iter()
            .map(|p| RowData {
                line: [
                    cell(&p.id().to_string(), ID_WIDTH),
                    name_cell(p.name()),
                    cell(&p.quantity().to_string(), QUANTITY_WIDTH),
                    cell(&p.reorder_level().to_string(), REORDER_WIDTH),
                    format!("{} days", p.lead_time_days()),
                ]
                .concat(),
                low: false,
            })
            .collect();

        let data = TableData {
            title: "=== Low Stock Alerts ===".to_string(),
            header,
            rule: "-".repeat(LOW_STOCK_RULE_WIDTH),
            rows,
            marker: String::new(),
            footer: String::new(),
            empty_message: "All products are adequately stocked!".to_string(),
        };
        self.render("table", &data)
    }

    pub fn category_listing(&self, category: Category, products: &[Product]) -> String {
        let data = TableData {
            title: format!("=== Products in {} ===", category),
            header: full_header(),
            rule: "-".repeat(FULL_RULE_WIDTH),
            rows: products.iter().map(|p| self.full_row(p)).collect(),
            marker: self.low_stock_marker.clone(),
            footer: String::new(),
            empty_message: "No products in this category!".to_string(),
        };
        self.render("table", &data)
    }

    pub fn categories(&self, categories: &[Category]) -> String {
        let data = CategoriesData {
            categories: categories
                .iter()
                .map(|c| CategoryEntry {
                    number: c.choice(),
                    label: c.label(),
                })
                .collect(),
        };
        self.render("categories", &data)
    }

    pub fn summary(&self, summary: &ValuationSummary) -> String {
        let data = SummaryData {
            unique_products: summary.unique_products,
            total_units: summary.total_units,
            total_value: self.money(summary.total_value),
            low_stock_count: summary.low_stock_count,
            low_stock_style: if summary.low_stock_count > 0 {
                names::LOW
            } else {
                names::VALUE
            },
        };
        self.render("summary", &data)
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| {
                    let (icon, style) = match msg.level {
                        MessageLevel::Info => ("", names::INFO),
                        MessageLevel::Success => ("✓ ", names::SUCCESS),
                        MessageLevel::Warning => ("! ", names::WARNING),
                        MessageLevel::Error => ("✗ ", names::ERROR),
                    };
                    MessageData {
                        icon,
                        content: msg.content.clone(),
                        style,
                    }
                })
                .collect(),
        };
        self.render("messages", &data)
    }

    fn full_row(&self, p: &Product) -> RowData {
        RowData {
            line: [
                cell(&p.id().to_string(), ID_WIDTH),
                name_cell(p.name()),
                cell(&p.quantity().to_string(), QUANTITY_WIDTH),
                cell(&self.money(p.price()), PRICE_WIDTH),
                cell(&p.reorder_level().to_string(), REORDER_WIDTH),
                cell(&p.lead_time_days().to_string(), LEAD_TIME_WIDTH),
                p.category().label().to_string(),
            ]
            .concat(),
            low: p.is_low_stock(),
        }
    }
}

/// Registers the `style` filter on a minijinja environment.
fn register_style_filter(env: &mut Environment<'static>, styles: Styles, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            styles.apply(&name, &text)
        } else {
            styles.apply_plain(&name, &text)
        }
    });
}

fn full_header() -> String {
    [
        cell("ID", ID_WIDTH),
        cell("Name", NAME_WIDTH),
        cell("Quantity", QUANTITY_WIDTH),
        cell("Price", PRICE_WIDTH),
        cell("Reorder Lvl", REORDER_WIDTH),
        cell("Lead Time", LEAD_TIME_WIDTH),
        "Category".to_string(),
    ]
    .concat()
}

/// Pads `text` to `width`. Wider text is kept whole and followed by a single
/// space, so numbers and amounts are never cut.
fn cell(text: &str, width: usize) -> String {
    if text.width() >= width {
        format!("{} ", text)
    } else {
        pad_to_width(text, width)
    }
}

/// Names are the one column that gets shortened to fit.
fn name_cell(name: &str) -> String {
    pad_to_width(&truncate_to_width(name, NAME_WIDTH - 1), NAME_WIDTH)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
