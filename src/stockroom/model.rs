use crate::error::{Result, StockError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Store-assigned product identifier. Ids start at 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductId(pub u32);

impl ProductId {
    pub const FIRST: ProductId = ProductId(1);

    pub fn get(self) -> u32 {
        self.0
    }

    pub(crate) fn next(self) -> Option<ProductId> {
        self.0.checked_add(1).map(ProductId)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The closed set of product categories.
///
/// At the interaction boundary categories are picked by a 1-indexed number,
/// following the order of [`Category::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Furniture,
    Books,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Furniture,
        Category::Books,
        Category::Other,
    ];

    pub const DEFAULT: Category = Category::Other;

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Furniture => "Furniture",
            Category::Books => "Books",
            Category::Other => "Other",
        }
    }

    /// Resolves a 1-indexed selection. `None` when out of range.
    pub fn from_choice(choice: i64) -> Option<Category> {
        if choice < 1 {
            return None;
        }
        usize::try_from(choice - 1)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// The 1-indexed selection number for this category.
    pub fn choice(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .map(|i| i + 1)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One tracked inventory item.
///
/// Identity, name, lead time and category are fixed at creation. Quantity only
/// moves through the stock operations or the explicit setters, and is a `u32`
/// so it can never go negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: u32,
    price: Decimal,
    reorder_level: u32,
    lead_time_days: u32,
    category: Category,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: String,
        quantity: u32,
        price: Decimal,
        reorder_level: u32,
        lead_time_days: u32,
        category: Category,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            quantity,
            price,
            reorder_level,
            lead_time_days,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn reorder_level(&self) -> u32 {
        self.reorder_level
    }

    pub fn lead_time_days(&self) -> u32 {
        self.lead_time_days
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    /// Value of the units on hand: `quantity * price`, saturating at
    /// `Decimal::MAX`.
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.price)
    }

    pub fn add_stock(&mut self, amount: u32) -> Result<()> {
        let quantity = self.quantity.checked_add(amount).ok_or_else(|| {
            StockError::InvalidArgument(format!(
                "adding {} to {} would overflow the quantity",
                amount, self.quantity
            ))
        })?;
        self.quantity = quantity;
        self.touch();
        Ok(())
    }

    /// Removes `amount` units if that many are on hand. Returns false and
    /// leaves the quantity alone otherwise.
    pub fn remove_stock(&mut self, amount: u32) -> bool {
        if self.quantity < amount {
            return false;
        }
        self.quantity -= amount;
        self.touch();
        true
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.touch();
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
        self.touch();
    }

    pub fn set_reorder_level(&mut self, level: u32) {
        self.reorder_level = level;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn widget(quantity: u32, reorder_level: u32) -> Product {
        Product::new(
            ProductId(1),
            "Widget".to_string(),
            quantity,
            Decimal::new(500, 2),
            reorder_level,
            2,
            Category::Electronics,
        )
    }

    #[test]
    fn low_stock_includes_the_reorder_level_itself() {
        assert!(widget(3, 3).is_low_stock());
        assert!(widget(0, 3).is_low_stock());
        assert!(!widget(4, 3).is_low_stock());
    }

    #[test]
    fn remove_stock_is_all_or_nothing() {
        let mut p = widget(10, 3);
        assert!(!p.remove_stock(15));
        assert_eq!(p.quantity(), 10);

        assert!(p.remove_stock(10));
        assert_eq!(p.quantity(), 0);
        assert!(p.is_low_stock());
    }

    #[test]
    fn add_stock_rejects_overflow_without_mutating() {
        let mut p = widget(u32::MAX - 1, 0);
        let err = p.add_stock(5).unwrap_err();
        assert!(matches!(err, StockError::InvalidArgument(_)));
        assert_eq!(p.quantity(), u32::MAX - 1);

        p.add_stock(1).unwrap();
        assert_eq!(p.quantity(), u32::MAX);
    }

    #[test]
    fn setters_overwrite_and_touch_updated_at() {
        let mut p = widget(1, 1);
        let before = p.updated_at();
        p.set_price(Decimal::new(1999, 2));
        p.set_reorder_level(7);
        p.set_quantity(42);
        assert_eq!(p.price(), Decimal::new(1999, 2));
        assert_eq!(p.reorder_level(), 7);
        assert_eq!(p.quantity(), 42);
        assert!(p.updated_at() >= before);
    }

    #[test]
    fn stock_value_multiplies_quantity_and_price() {
        assert_eq!(widget(4, 0).stock_value(), Decimal::new(2000, 2));
    }

    #[test]
    fn stock_value_saturates_instead_of_panicking() {
        let mut p = widget(2, 0);
        p.set_price(Decimal::MAX);
        assert_eq!(p.stock_value(), Decimal::MAX);
    }

    #[test]
    fn category_choices_are_one_indexed() {
        assert_eq!(Category::from_choice(1), Some(Category::Electronics));
        assert_eq!(Category::from_choice(6), Some(Category::Other));
        assert_eq!(Category::from_choice(0), None);
        assert_eq!(Category::from_choice(7), None);
        assert_eq!(Category::from_choice(-3), None);
        assert_eq!(Category::from_choice(i64::MAX), None);

        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.choice(), i + 1);
        }
    }

    #[test]
    fn product_id_allocation_stops_at_the_top() {
        assert_eq!(ProductId::FIRST.next(), Some(ProductId(2)));
        assert_eq!(ProductId(u32::MAX).next(), None);
    }
}
