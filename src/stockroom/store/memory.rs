use super::DataStore;
use crate::error::{Result, StockError};
use crate::model::{Product, ProductId};
use std::collections::BTreeMap;

/// In-memory product storage. Does NOT persist data.
#[derive(Debug)]
pub struct InMemoryStore {
    products: BTreeMap<ProductId, Product>,
    next_id: Option<ProductId>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            products: BTreeMap::new(),
            next_id: Some(ProductId::FIRST),
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl DataStore for InMemoryStore {
    fn allocate_id(&mut self) -> Result<ProductId> {
        // `None` once u32::MAX has been handed out
        let id = self.next_id.ok_or(StockError::IdSpaceExhausted)?;
        self.next_id = id.next();
        Ok(id)
    }

    fn save_product(&mut self, product: Product) {
        self.products.insert(product.id(), product);
    }

    fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    fn get_product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(&id)
    }

    fn list_products(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    fn delete_product(&mut self, id: ProductId) -> Option<Product> {
        self.products.remove(&id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Category;
    use rust_decimal::Decimal;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds a product with the price given in cents.
        pub fn with_product(
            mut self,
            name: &str,
            quantity: u32,
            price_cents: i64,
            reorder_level: u32,
            category: Category,
        ) -> Self {
            let id = self.store.allocate_id().unwrap();
            let product = Product::new(
                id,
                name.to_string(),
                quantity,
                Decimal::new(price_cents, 2),
                reorder_level,
                3,
                category,
            );
            self.store.save_product(product);
            self
        }

        pub fn with_products(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_product(
                    &format!("Product {}", i + 1),
                    10,
                    100,
                    2,
                    Category::Other,
                );
            }
            self
        }
    }
}
