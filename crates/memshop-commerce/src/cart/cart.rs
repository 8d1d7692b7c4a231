//! Cart and cart item types.

use crate::cart::{CartSummary, LineSummary};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Outcome of a quantity change on a cart entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityUpdate {
    /// The entry now holds this quantity.
    Set(u32),
    /// The entry was dropped because the quantity went below one.
    Removed,
    /// No entry for the product; nothing changed.
    NotInCart,
}

/// A shopping cart.
///
/// Entries are unique by product id and keep insertion order. Every stored
/// quantity is at least one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing entry for the same product has its quantity bumped;
    /// otherwise a new entry with quantity 1 is appended. Returns the
    /// entry's quantity afterwards.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
        1
    }

    /// Remove the entry for a product. Absent ids are ignored.
    pub fn remove(&mut self, id: ProductId) -> Option<CartItem> {
        let index = self.items.iter().position(|i| i.product.id == id)?;
        Some(self.items.remove(index))
    }

    /// Set an entry's quantity.
    ///
    /// A quantity below 1 removes the entry. There is no upper bound beyond
    /// what a `u32` holds.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> QuantityUpdate {
        if quantity < 1 {
            return match self.remove(id) {
                Some(_) => QuantityUpdate::Removed,
                None => QuantityUpdate::NotInCart,
            };
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|i| i.product.id == id) {
            Some(item) => {
                item.quantity = quantity;
                QuantityUpdate::Set(quantity)
            }
            None => QuantityUpdate::NotInCart,
        }
    }

    /// Raise an entry's quantity by one.
    pub fn increment(&mut self, id: ProductId) -> QuantityUpdate {
        match self.get(id).map(|item| i64::from(item.quantity)) {
            Some(quantity) => self.update_quantity(id, quantity + 1),
            None => QuantityUpdate::NotInCart,
        }
    }

    /// Lower an entry's quantity by one, removing it when it reaches zero.
    pub fn decrement(&mut self, id: ProductId) -> QuantityUpdate {
        match self.get(id).map(|item| i64::from(item.quantity)) {
            Some(quantity) => self.update_quantity(id, quantity - 1),
            None => QuantityUpdate::NotInCart,
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units (sum of quantities).
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of unit price times quantity over all entries.
    ///
    /// Computed on every call; nothing is cached.
    pub fn total_price(&self) -> Result<Money, CommerceError> {
        let lines = self
            .items
            .iter()
            .map(CartItem::line_total)
            .collect::<Result<Vec<_>, CommerceError>>()?;

        if let Some(line) = lines.iter().find(|line| line.currency != self.currency) {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: line.currency.code().to_string(),
            });
        }

        Money::try_sum(&lines, self.currency).ok_or(CommerceError::Overflow)
    }

    /// Unit price times quantity for one entry.
    pub fn line_total(&self, id: ProductId) -> Result<Money, CommerceError> {
        self.get(id)
            .ok_or(CommerceError::ProductNotFound(id))?
            .line_total()
    }

    /// Snapshot of lines and totals for rendering a cart or order summary.
    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        let lines = self
            .items
            .iter()
            .map(|item| {
                Ok(LineSummary {
                    product_id: item.product.id,
                    name: item.product.name.clone(),
                    unit_price: item.product.price,
                    quantity: item.quantity,
                    line_total: item.line_total()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        Ok(CartSummary {
            lines,
            total_items: self.total_items(),
            total_price: self.total_price()?,
        })
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the entry for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == id)
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// A product paired with a purchase quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// The product being bought.
    pub product: Product,
    /// Quantity, always at least 1 while stored in a cart.
    pub quantity: u32,
}

impl CartItem {
    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product_a() -> Product {
        Product::new(1, "Product A", Money::rub(8990), Category::Gaming)
    }

    fn product_b() -> Product {
        Product::new(2, "Product B", Money::rub(3490), Category::Office)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::RUB);
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price().unwrap(), Money::zero(Currency::RUB));
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::default();
        assert_eq!(cart.add(&product_a()), 1);
        assert_eq!(cart.add(&product_a()), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ProductId::new(1)).map(|i| i.quantity), Some(2));
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::default();
        cart.add(&product_b());
        cart.add(&product_a());
        cart.add(&product_b());

        let ids: Vec<u32> = cart.items().iter().map(|i| i.product.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::default();
        cart.add(&product_a());

        assert_eq!(cart.update_quantity(ProductId::new(1), 5), QuantityUpdate::Set(5));
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_update_quantity_below_one_removes() {
        let mut cart = Cart::default();
        cart.add(&product_a());
        cart.add(&product_b());

        assert_eq!(cart.update_quantity(ProductId::new(1), 0), QuantityUpdate::Removed);
        assert_eq!(cart.update_quantity(ProductId::new(2), -3), QuantityUpdate::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_product_is_noop() {
        let mut cart = Cart::default();
        cart.add(&product_a());
        let before = cart.clone();

        assert_eq!(cart.update_quantity(ProductId::new(99), 3), QuantityUpdate::NotInCart);
        assert_eq!(cart.update_quantity(ProductId::new(99), 0), QuantityUpdate::NotInCart);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::default();
        cart.add(&product_a());

        assert!(cart.remove(ProductId::new(1)).is_some());
        assert!(cart.is_empty());
        assert!(cart.remove(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::default();
        cart.add(&product_a());

        assert_eq!(cart.increment(ProductId::new(1)), QuantityUpdate::Set(2));
        assert_eq!(cart.decrement(ProductId::new(1)), QuantityUpdate::Set(1));
        assert_eq!(cart.decrement(ProductId::new(1)), QuantityUpdate::Removed);
        assert_eq!(cart.increment(ProductId::new(1)), QuantityUpdate::NotInCart);
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::default();
        cart.add(&product_a());
        cart.add(&product_a());
        cart.add(&product_b());

        assert_eq!(cart.total_price().unwrap(), Money::rub(2 * 8990 + 3490));
        assert_eq!(cart.total_items(), 3);

        let summary = cart.summary().unwrap();
        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.lines[0].line_total, Money::rub(17980));
        assert_eq!(summary.total_price, Money::rub(21470));

        assert_eq!(cart.line_total(ProductId::new(2)), Ok(Money::rub(3490)));
        assert_eq!(
            cart.line_total(ProductId::new(7)),
            Err(CommerceError::ProductNotFound(ProductId::new(7)))
        );
    }

    #[test]
    fn test_mixed_currency_total_fails() {
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&Product::new(
            9,
            "Imported",
            Money::from_major(10, Currency::USD),
            Category::Server,
        ));

        assert!(matches!(
            cart.total_price(),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_total_overflow_fails() {
        let huge = Money::new(i64::MAX / 2 + 1, Currency::RUB);
        let mut cart = Cart::new(Currency::RUB);
        cart.add(&Product::new(1, "Rack A", huge, Category::Server));
        cart.add(&Product::new(2, "Rack B", huge, Category::Server));

        assert!(cart.line_total(ProductId::new(1)).is_ok());
        assert_eq!(cart.total_price(), Err(CommerceError::Overflow));
    }
}
