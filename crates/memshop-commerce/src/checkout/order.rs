//! Order confirmation.

use crate::cart::{CartSummary, LineSummary};
use crate::checkout::ContactDetails;
use crate::ids::{unix_millis, OrderId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// What a successful checkout produced.
///
/// Orders are not sent anywhere; this is the local record the front end
/// can show or print.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Generated order identifier.
    pub id: OrderId,
    /// Who to call back.
    pub contact: ContactDetails,
    /// Ordered lines, in cart order.
    pub lines: Vec<LineSummary>,
    /// Sum of quantities.
    pub total_items: u64,
    /// Sum of line totals.
    pub total_price: Money,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl OrderConfirmation {
    /// Build a confirmation from validated contact details and a cart
    /// snapshot taken before the cart was cleared.
    pub fn new(contact: ContactDetails, summary: CartSummary) -> Self {
        Self {
            id: OrderId::generate(),
            contact,
            lines: summary.lines,
            total_items: summary.total_items,
            total_price: summary.total_price,
            placed_at: (unix_millis() / 1000) as i64,
        }
    }
}
