use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::{Product, ProductId};
use crate::store::DataStore;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDirection {
    Add,
    Remove,
}

impl StockDirection {
    /// Parses the add/remove selector: `a`/`add` or `r`/`remove`, any case.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "a" | "add" => Some(StockDirection::Add),
            "r" | "remove" => Some(StockDirection::Remove),
            _ => None,
        }
    }
}

impl fmt::Display for StockDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockDirection::Add => f.write_str("add"),
            StockDirection::Remove => f.write_str("remove"),
        }
    }
}

/// Result of a stock adjustment. Every variant except `NotFound` carries the
/// product as it stands after the call.
#[derive(Debug, Clone, PartialEq)]
pub enum StockOutcome {
    Applied {
        direction: StockDirection,
        previous: u32,
        product: Product,
    },
    InsufficientStock {
        requested: u32,
        product: Product,
    },
    NotFound(ProductId),
    InvalidOperation {
        selector: String,
        product: Product,
    },
}

impl StockOutcome {
    pub fn product(&self) -> Option<&Product> {
        match self {
            StockOutcome::Applied { product, .. }
            | StockOutcome::InsufficientStock { product, .. }
            | StockOutcome::InvalidOperation { product, .. } => Some(product),
            StockOutcome::NotFound(_) => None,
        }
    }

    pub fn message(&self) -> CmdMessage {
        match self {
            StockOutcome::Applied {
                direction: StockDirection::Add,
                ..
            } => CmdMessage::success("Stock added successfully!"),
            StockOutcome::Applied {
                direction: StockDirection::Remove,
                ..
            } => CmdMessage::success("Stock removed successfully!"),
            StockOutcome::InsufficientStock { .. } => CmdMessage::error("Insufficient stock!"),
            StockOutcome::NotFound(_) => CmdMessage::error("Product not found!"),
            StockOutcome::InvalidOperation { .. } => CmdMessage::error("Invalid operation!"),
        }
    }
}

pub fn run<S: DataStore>(
    store: &mut S,
    id: ProductId,
    selector: &str,
    amount: u32,
) -> Result<StockOutcome> {
    let Some(product) = store.get_product_mut(id) else {
        tracing::debug!(%id, "stock adjustment on missing product");
        return Ok(StockOutcome::NotFound(id));
    };

    let Some(direction) = StockDirection::from_selector(selector) else {
        tracing::debug!(%id, selector, "unrecognised stock operation");
        return Ok(StockOutcome::InvalidOperation {
            selector: selector.to_string(),
            product: product.clone(),
        });
    };

    let previous = product.quantity();
    match direction {
        StockDirection::Add => product.add_stock(amount)?,
        StockDirection::Remove => {
            if !product.remove_stock(amount) {
                tracing::info!(%id, amount, available = previous, "insufficient stock");
                return Ok(StockOutcome::InsufficientStock {
                    requested: amount,
                    product: product.clone(),
                });
            }
        }
    }

    tracing::info!(%id, %direction, amount, quantity = product.quantity(), "stock adjusted");
    Ok(StockOutcome::Applied {
        direction,
        previous,
        product: product.clone(),
    })
}
