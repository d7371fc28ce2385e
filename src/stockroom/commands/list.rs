use crate::model::Product;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Vec<Product> {
    let products: Vec<Product> = store.list_products().into_iter().cloned().collect();
    tracing::debug!(count = products.len(), "listed products");
    products
}
