//! Derived cart totals.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Snapshot of a cart's lines and totals.
///
/// Produced on demand by [`Cart::summary`](crate::cart::Cart::summary);
/// never stored alongside the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Per-line breakdown in cart order.
    pub lines: Vec<LineSummary>,
    /// Sum of quantities.
    pub total_items: u64,
    /// Sum of line totals.
    pub total_price: Money,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Label for the cart badge; `None` hides the badge.
    pub fn badge(&self) -> Option<String> {
        (self.total_items > 0).then(|| self.total_items.to_string())
    }
}

/// Pricing for a single cart entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineSummary {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// Unit price times quantity.
    pub line_total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_badge_hidden_when_empty() {
        let summary = CartSummary {
            lines: vec![],
            total_items: 0,
            total_price: Money::zero(Currency::RUB),
        };
        assert!(summary.is_empty());
        assert_eq!(summary.badge(), None);
    }

    #[test]
    fn test_badge_shows_item_count() {
        let summary = CartSummary {
            lines: vec![LineSummary {
                product_id: ProductId::new(1),
                name: "A".to_string(),
                unit_price: Money::rub(100),
                quantity: 3,
                line_total: Money::rub(300),
            }],
            total_items: 3,
            total_price: Money::rub(300),
        };
        assert_eq!(summary.badge().as_deref(), Some("3"));
    }
}
