//! Checkout module.
//!
//! Contains the contact form, the checkout dialog state machine and the
//! confirmation produced by a successful order.

mod dialog;
mod form;
mod order;

pub use dialog::{CheckoutDialog, DialogState};
pub use form::{CheckoutForm, ContactDetails, ContactField};
pub use order::OrderConfirmation;
