//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the command layer and wherever
//! products live. Commands only ever talk to the trait, so business logic can
//! be exercised against any backend.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. Products live in a
//!   `BTreeMap` for the lifetime of the process and are gone at exit.
//!
//! ## Identifier Allocation
//!
//! The store owns the id allocator. Ids start at [`ProductId::FIRST`], grow by
//! one per allocation and are never handed out twice, even after the product
//! holding them is deleted.

use crate::error::Result;
use crate::model::{Product, ProductId};

pub mod memory;

/// Abstract interface for product storage.
pub trait DataStore {
    /// Reserve the next unused id.
    fn allocate_id(&mut self) -> Result<ProductId>;

    /// Insert or replace a product under its own id.
    fn save_product(&mut self, product: Product);

    fn get_product(&self, id: ProductId) -> Option<&Product>;

    fn get_product_mut(&mut self, id: ProductId) -> Option<&mut Product>;

    /// All products, ascending by id.
    fn list_products(&self) -> Vec<&Product>;

    /// Remove a product, returning it if it existed.
    fn delete_product(&mut self, id: ProductId) -> Option<Product>;
}
