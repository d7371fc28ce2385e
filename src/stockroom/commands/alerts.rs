use crate::model::Product;
use crate::store::DataStore;

/// Products at or below their reorder level, ascending by id.
pub fn run<S: DataStore>(store: &S) -> Vec<Product> {
    let low: Vec<Product> = store
        .list_products()
        .into_iter()
        .filter(|p| p.is_low_stock())
        .cloned()
        .collect();
    tracing::debug!(count = low.len(), "low stock scan");
    low
}
