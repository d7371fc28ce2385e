use crate::model::Product;
use crate::store::DataStore;

/// Case-insensitive substring match on name or category label, ascending by
/// id. A blank term matches everything.
pub fn run<S: DataStore>(store: &S, term: &str) -> Vec<Product> {
    let term_lower = term.trim().to_lowercase();

    let matches: Vec<Product> = store
        .list_products()
        .into_iter()
        .filter(|p| {
            p.name().to_lowercase().contains(&term_lower)
                || p.category().label().to_lowercase().contains(&term_lower)
        })
        .cloned()
        .collect();
    tracing::debug!(term, count = matches.len(), "product search");
    matches
}
