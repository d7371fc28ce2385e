//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every inventory operation, whatever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Returns structured types**: outcome enums for the expected cases
//!   (not found, insufficient stock, invalid category), `Err` only for
//!   invalid arguments
//!
//! It does no I/O and formats nothing for display.
//!
//! ## Generic Over DataStore
//!
//! `InventoryApi<S: DataStore>` works with any storage backend; the binary
//! uses [`InMemoryStore`](crate::store::memory::InMemoryStore).
//!
//! ## Testing Strategy
//!
//! API tests check dispatch and return types. Business rules are tested in
//! the command modules.

use crate::commands;
use crate::error::Result;
use crate::model::{Category, Product, ProductId};
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;

/// The main API facade for inventory operations.
pub struct InventoryApi<S: DataStore> {
    store: S,
}

impl Default for InventoryApi<InMemoryStore> {
    fn default() -> Self {
        Self::new(InMemoryStore::new())
    }
}

impl<S: DataStore> InventoryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The fixed category catalogue, in selection order.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    pub fn create_product(&mut self, new: NewProduct) -> Result<Created> {
        commands::create::run(&mut self.store, new)
    }

    pub fn list_all(&self) -> Vec<Product> {
        commands::list::run(&self.store)
    }

    pub fn find_by_id(&self, id: ProductId) -> Lookup {
        commands::find::run(&self.store, id)
    }

    /// Products whose name or category contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<Product> {
        commands::search::run(&self.store, term)
    }

    pub fn adjust_stock(
        &mut self,
        id: ProductId,
        selector: &str,
        amount: u32,
    ) -> Result<StockOutcome> {
        commands::stock::run(&mut self.store, id, selector, amount)
    }

    pub fn low_stock_report(&self) -> Vec<Product> {
        commands::alerts::run(&self.store)
    }

    pub fn by_category(&self, choice: i64) -> CategoryListing {
        commands::category::run(&self.store, choice)
    }

    pub fn valuation_summary(&self) -> ValuationSummary {
        commands::valuation::run(&self.store)
    }

    pub fn update_product(&mut self, id: ProductId, update: &ProductUpdate) -> Update {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_product(&mut self, id: ProductId) -> Deletion {
        commands::delete::run(&mut self.store, id)
    }
}

pub use commands::category::CategoryListing;
pub use commands::create::Created;
pub use commands::delete::Deletion;
pub use commands::find::Lookup;
pub use commands::stock::{StockDirection, StockOutcome};
pub use commands::update::Update;
pub use commands::valuation::ValuationSummary;
pub use commands::{CmdMessage, MessageLevel, NewProduct, ProductUpdate};
