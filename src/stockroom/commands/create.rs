use crate::commands::{CmdMessage, NewProduct};
use crate::error::{Result, StockError};
use crate::model::{Category, Product};
use crate::store::DataStore;

/// A freshly created product.
#[derive(Debug, Clone)]
pub struct Created {
    pub product: Product,
    /// The category selection was out of range and the default was used.
    pub category_defaulted: bool,
}

impl Created {
    pub fn messages(&self) -> Vec<CmdMessage> {
        let mut messages = Vec::new();
        if self.category_defaulted {
            messages.push(CmdMessage::warning(format!(
                "Unknown category selection, filed under {}.",
                Category::DEFAULT
            )));
        }
        messages.push(CmdMessage::success(format!(
            "Product added successfully with ID: {}",
            self.product.id()
        )));
        messages
    }
}

pub fn run<S: DataStore>(store: &mut S, new: NewProduct) -> Result<Created> {
    let name = new.name.trim();
    if name.is_empty() {
        return Err(StockError::InvalidArgument(
            "product name cannot be empty".to_string(),
        ));
    }

    let (category, category_defaulted) = match Category::from_choice(new.category_choice) {
        Some(category) => (category, false),
        None => (Category::DEFAULT, true),
    };

    let id = store.allocate_id()?;
    let product = Product::new(
        id,
        name.to_string(),
        new.quantity,
        new.price,
        new.reorder_level,
        new.lead_time_days,
        category,
    );
    store.save_product(product.clone());

    tracing::info!(%id, product = name, %category, category_defaulted, "product created");

    Ok(Created {
        product,
        category_defaulted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use crate::store::memory::InMemoryStore;
    use rust_decimal::Decimal;

    fn new_product(name: &str, category_choice: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            quantity: 10,
            price: Decimal::new(500, 2),
            reorder_level: 3,
            lead_time_days: 2,
            category_choice,
        }
    }

    #[test]
    fn assigns_sequential_ids() {
        let mut store = InMemoryStore::new();
        let a = run(&mut store, new_product("Widget", 1)).unwrap();
        let b = run(&mut store, new_product("Gadget", 2)).unwrap();
        assert_eq!(a.product.id(), ProductId(1));
        assert_eq!(b.product.id(), ProductId(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn stores_all_fields() {
        let mut store = InMemoryStore::new();
        let created = run(&mut store, new_product("Widget", 1)).unwrap();
        let p = store.get_product(created.product.id()).unwrap();
        assert_eq!(p.name(), "Widget");
        assert_eq!(p.quantity(), 10);
        assert_eq!(p.price(), Decimal::new(500, 2));
        assert_eq!(p.reorder_level(), 3);
        assert_eq!(p.lead_time_days(), 2);
        assert_eq!(p.category(), Category::Electronics);
        assert!(!created.category_defaulted);
    }

    #[test]
    fn out_of_range_category_falls_back_to_other() {
        let mut store = InMemoryStore::new();
        for choice in [0, 7, -1, 99] {
            let created = run(&mut store, new_product("Thing", choice)).unwrap();
            assert_eq!(created.product.category(), Category::Other);
            assert!(created.category_defaulted);
        }
    }

    #[test]
    fn explicit_other_is_not_a_fallback() {
        let mut store = InMemoryStore::new();
        let created = run(&mut store, new_product("Thing", 6)).unwrap();
        assert_eq!(created.product.category(), Category::Other);
        assert!(!created.category_defaulted);
    }

    #[test]
    fn duplicate_names_are_allowed() {
        let mut store = InMemoryStore::new();
        run(&mut store, new_product("Widget", 1)).unwrap();
        run(&mut store, new_product("Widget", 1)).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn blank_name_is_rejected_without_consuming_an_id() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, new_product("   ", 1)).unwrap_err();
        assert!(matches!(err, StockError::InvalidArgument(_)));

        let created = run(&mut store, new_product("Widget", 1)).unwrap();
        assert_eq!(created.product.id(), ProductId(1));
    }

    #[test]
    fn name_is_trimmed() {
        let mut store = InMemoryStore::new();
        let created = run(&mut store, new_product("  Widget \n", 1)).unwrap();
        assert_eq!(created.product.name(), "Widget");
    }

    #[test]
    fn messages_mention_the_new_id() {
        let mut store = InMemoryStore::new();
        let created = run(&mut store, new_product("Widget", 42)).unwrap();
        let messages = created.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[1].content.ends_with("ID: 1"));
        assert!(messages[0].content.contains("Other"));
    }
}
