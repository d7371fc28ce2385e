use crate::commands::CmdMessage;
use crate::model::{Product, ProductId};
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Deletion {
    Deleted(Product),
    NotFound(ProductId),
}

impl Deletion {
    pub fn message(&self) -> CmdMessage {
        match self {
            Deletion::Deleted(_) => CmdMessage::success("Product deleted successfully!"),
            Deletion::NotFound(_) => CmdMessage::error("Product not found!"),
        }
    }
}

/// Removes the product unconditionally. Its id is retired for good.
pub fn run<S: DataStore>(store: &mut S, id: ProductId) -> Deletion {
    match store.delete_product(id) {
        Some(product) => {
            tracing::info!(%id, product = product.name(), "product deleted");
            Deletion::Deleted(product)
        }
        None => {
            tracing::debug!(%id, "delete on missing product");
            Deletion::NotFound(id)
        }
    }
}
