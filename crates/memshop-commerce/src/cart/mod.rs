//! Shopping cart module.
//!
//! Contains the cart, its entries and the derived totals.

mod cart;
mod pricing;

pub use cart::{Cart, CartItem, QuantityUpdate};
pub use pricing::{CartSummary, LineSummary};
