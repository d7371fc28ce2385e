use crate::model::{Category, Product};
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryListing {
    Listed {
        category: Category,
        products: Vec<Product>,
    },
    /// The selection was outside `1..=Category::ALL.len()`. Unlike creation,
    /// filtering never falls back to the default category.
    InvalidCategory(i64),
}

pub fn run<S: DataStore>(store: &S, choice: i64) -> CategoryListing {
    let Some(category) = Category::from_choice(choice) else {
        tracing::debug!(choice, "invalid category selection");
        return CategoryListing::InvalidCategory(choice);
    };

    let products: Vec<Product> = store
        .list_products()
        .into_iter()
        .filter(|p| p.category() == category)
        .cloned()
        .collect();
    tracing::debug!(%category, count = products.len(), "category listing");

    CategoryListing::Listed { category, products }
}
