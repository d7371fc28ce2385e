use crate::store::DataStore;
use rust_decimal::Decimal;

/// Aggregate figures over every product in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValuationSummary {
    pub unique_products: usize,
    pub total_units: u64,
    pub total_value: Decimal,
    pub low_stock_count: usize,
}

pub fn run<S: DataStore>(store: &S) -> ValuationSummary {
    let summary = store
        .list_products()
        .into_iter()
        .fold(ValuationSummary::default(), |mut acc, p| {
            acc.unique_products += 1;
            acc.total_units += u64::from(p.quantity());
            acc.total_value = acc.total_value.saturating_add(p.stock_value());
            if p.is_low_stock() {
                acc.low_stock_count += 1;
            }
            acc
        });
    tracing::debug!(
        products = summary.unique_products,
        units = summary.total_units,
        value = %summary.total_value,
        "valuation summary"
    );
    if summary.total_value == Decimal::MAX {
        tracing::warn!("inventory value saturated at the decimal maximum");
    }
    summary
}
