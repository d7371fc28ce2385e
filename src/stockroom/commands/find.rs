use crate::model::{Product, ProductId};
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Product),
    NotFound(ProductId),
}

impl Lookup {
    pub fn product(&self) -> Option<&Product> {
        match self {
            Lookup::Found(product) => Some(product),
            Lookup::NotFound(_) => None,
        }
    }
}

pub fn run<S: DataStore>(store: &S, id: ProductId) -> Lookup {
    match store.get_product(id) {
        Some(product) => Lookup::Found(product.clone()),
        None => {
            tracing::debug!(%id, "product not found");
            Lookup::NotFound(id)
        }
    }
}
