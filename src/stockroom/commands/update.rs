use crate::commands::{CmdMessage, ProductUpdate};
use crate::model::{Product, ProductId};
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Updated(Product),
    NotFound(ProductId),
}

impl Update {
    pub fn message(&self) -> CmdMessage {
        match self {
            Update::Updated(_) => CmdMessage::success("Product updated successfully!"),
            Update::NotFound(_) => CmdMessage::error("Product not found!"),
        }
    }
}

/// Overwrites the fields present in `update`. Values are taken as given;
/// the types already rule out negative numbers.
pub fn run<S: DataStore>(store: &mut S, id: ProductId, update: &ProductUpdate) -> Update {
    let Some(product) = store.get_product_mut(id) else {
        return Update::NotFound(id);
    };

    if let Some(quantity) = update.quantity {
        product.set_quantity(quantity);
    }
    if let Some(price) = update.price {
        product.set_price(price);
    }
    if let Some(level) = update.reorder_level {
        product.set_reorder_level(level);
    }

    tracing::info!(
        %id,
        quantity = ?update.quantity,
        price = ?update.price,
        reorder_level = ?update.reorder_level,
        "product updated"
    );
    Update::Updated(product.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::store::memory::fixtures::StoreFixture;
    use rust_decimal::Decimal;

    #[test]
    fn overwrites_only_given_fields() {
        let mut store = StoreFixture::new()
            .with_product("Widget", 10, 500, 3, Category::Electronics)
            .store;

        let update = ProductUpdate::new().price(Decimal::new(650, 2));
        let Update::Updated(product) = run(&mut store, ProductId(1), &update) else {
            panic!("expected update");
        };
        assert_eq!(product.price(), Decimal::new(650, 2));
        assert_eq!(product.quantity(), 10);
        assert_eq!(product.reorder_level(), 3);
    }

    #[test]
    fn raising_reorder_level_can_trigger_low_stock() {
        let mut store = StoreFixture::new()
            .with_product("Widget", 10, 500, 3, Category::Electronics)
            .store;

        let update = ProductUpdate::new().reorder_level(10).quantity(9);
        run(&mut store, ProductId(1), &update);
        let product = store.get_product(ProductId(1)).unwrap();
        assert!(product.is_low_stock());
        assert_eq!(product.quantity(), 9);
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut store = StoreFixture::new().with_products(1).store;
        let before = store.get_product(ProductId(1)).unwrap().clone();
        assert!(ProductUpdate::new().is_empty());
        assert_eq!(
            run(&mut store, ProductId(1), &ProductUpdate::new()),
            Update::Updated(before)
        );
    }

    #[test]
    fn missing_product_is_not_found() {
        let mut store = StoreFixture::new().store;
        let update = ProductUpdate::new().quantity(1);
        assert_eq!(
            run(&mut store, ProductId(3), &update),
            Update::NotFound(ProductId(3))
        );
    }
}
