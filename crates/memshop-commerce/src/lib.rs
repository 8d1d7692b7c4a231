//! Storefront domain types and logic for MemoryShop.
//!
//! This crate holds everything a shopper's visit changes:
//!
//! - **Catalog**: the immutable product list, grouped by category
//! - **Cart**: quantity-annotated entries and derived totals
//! - **Checkout**: contact form, dialog state machine, order confirmation
//! - **Notifications**: the toast messages a front end shows
//! - **Storefront**: one session tying the above together
//!
//! There is no I/O here. Front ends own rendering and decide where
//! notifications go.
//!
//! # Example
//!
//! ```
//! use memshop_commerce::prelude::*;
//!
//! let mut shop = Storefront::with_log(Catalog::builtin());
//! shop.add_to_cart(ProductId::new(1))?;
//! shop.add_to_cart(ProductId::new(1))?;
//! assert_eq!(shop.total_items(), 2);
//! assert_eq!(shop.total_price()?, Money::rub(17980));
//!
//! shop.open_checkout()?;
//! shop.update_field(ContactField::Name, "Ivan");
//! shop.update_field(ContactField::Phone, "+7900000000");
//! let order = shop.submit_checkout()?;
//! assert_eq!(order.total_items, 2);
//! assert!(shop.cart().is_empty());
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;
pub mod notify;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::notify::{Notification, NotificationLog, NotificationVariant, Notifier};
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{Catalog, CatalogSection, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartSummary, LineSummary, QuantityUpdate};

    // Checkout
    pub use crate::checkout::{
        CheckoutDialog, CheckoutForm, ContactDetails, ContactField, DialogState,
        OrderConfirmation,
    };
}
