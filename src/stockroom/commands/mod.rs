use rust_decimal::Decimal;

pub mod alerts;
pub mod category;
pub mod create;
pub mod delete;
pub mod find;
pub mod list;
pub mod search;
pub mod stock;
pub mod update;
pub mod valuation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Field values for a product about to be created.
///
/// `category_choice` is the raw 1-indexed selection; anything out of range
/// lands in the default category.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    pub reorder_level: u32,
    pub lead_time_days: u32,
    pub category_choice: i64,
}

/// Partial overwrite of a product's mutable fields. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub quantity: Option<u32>,
    pub price: Option<Decimal>,
    pub reorder_level: Option<u32>,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn reorder_level(mut self, level: u32) -> Self {
        self.reorder_level = Some(level);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.price.is_none() && self.reorder_level.is_none()
    }
}
