//! Storefront session.
//!
//! One [`Storefront`] owns everything a shopper touches during a visit: the
//! catalog, the cart, the checkout form and dialog, and the notifier used
//! to report outcomes. Front ends call these methods in response to user
//! events and re-render from the accessors afterwards.

use crate::cart::{Cart, CartSummary, QuantityUpdate};
use crate::catalog::Catalog;
use crate::checkout::{CheckoutDialog, CheckoutForm, ContactField, OrderConfirmation};
use crate::error::CommerceError;
use crate::ids::{ProductId, SessionId};
use crate::money::Money;
use crate::notify::{Notification, NotificationLog, Notifier};
use tracing::{debug, info, warn};

/// A single shopper's session.
#[derive(Debug, Clone)]
pub struct Storefront<N = NotificationLog> {
    session_id: SessionId,
    catalog: Catalog,
    cart: Cart,
    form: CheckoutForm,
    dialog: CheckoutDialog,
    notifier: N,
}

impl Storefront<NotificationLog> {
    /// Start a session that buffers notifications in memory.
    pub fn with_log(catalog: Catalog) -> Self {
        Self::new(catalog, NotificationLog::new())
    }
}

impl<N: Notifier> Storefront<N> {
    /// Start a session with an empty cart, an empty form and a closed
    /// checkout dialog.
    pub fn new(catalog: Catalog, notifier: N) -> Self {
        let cart = Cart::new(catalog.currency());
        Self {
            session_id: SessionId::generate(),
            catalog,
            cart,
            form: CheckoutForm::new(),
            dialog: CheckoutDialog::new(),
            notifier,
        }
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// Put one unit of a catalog product in the cart and confirm it to the
    /// user. Returns the product's quantity in the cart afterwards.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<u32, CommerceError> {
        let product = self
            .catalog
            .get(id)
            .ok_or(CommerceError::ProductNotFound(id))?;

        let quantity = self.cart.add(product);
        debug!(session = %self.session_id, product_id = %id, quantity, "added to cart");

        let notification = Notification::added_to_cart(&product.name);
        self.notifier.notify(notification);
        Ok(quantity)
    }

    /// Drop a product from the cart. Unknown ids are ignored.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let removed = self.cart.remove(id).is_some();
        if removed {
            debug!(session = %self.session_id, product_id = %id, "removed from cart");
        }
        removed
    }

    /// Set a product's quantity; anything below 1 removes it.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> QuantityUpdate {
        let update = self.cart.update_quantity(id, quantity);
        self.log_update(id, update);
        update
    }

    /// The cart drawer's "+" button.
    pub fn increment(&mut self, id: ProductId) -> QuantityUpdate {
        let update = self.cart.increment(id);
        self.log_update(id, update);
        update
    }

    /// The cart drawer's "−" button.
    pub fn decrement(&mut self, id: ProductId) -> QuantityUpdate {
        let update = self.cart.decrement(id);
        self.log_update(id, update);
        update
    }

    fn log_update(&self, id: ProductId, update: QuantityUpdate) {
        match update {
            QuantityUpdate::Set(quantity) => {
                debug!(session = %self.session_id, product_id = %id, quantity, "quantity changed")
            }
            QuantityUpdate::Removed => {
                debug!(session = %self.session_id, product_id = %id, "removed from cart")
            }
            QuantityUpdate::NotInCart => {}
        }
    }

    pub fn total_price(&self) -> Result<Money, CommerceError> {
        self.cart.total_price()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn summary(&self) -> Result<CartSummary, CommerceError> {
        self.cart.summary()
    }

    // ------------------------------------------------------------------
    // Checkout
    // ------------------------------------------------------------------

    /// Show the checkout dialog. Fails for an empty cart.
    pub fn open_checkout(&mut self) -> Result<(), CommerceError> {
        self.dialog.open(self.cart.len())?;
        info!(
            session = %self.session_id,
            items = self.cart.total_items(),
            "checkout opened"
        );
        Ok(())
    }

    /// Hide the checkout dialog. Typed contact details are kept.
    pub fn cancel_checkout(&mut self) {
        if self.dialog.is_open() {
            info!(session = %self.session_id, "checkout cancelled");
        }
        self.dialog.cancel();
    }

    /// Overwrite one contact field.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    /// Place the order.
    ///
    /// With name or phone empty, a destructive notification is issued and
    /// a validation error returned; cart, form and dialog are left as they
    /// were. Otherwise the user is thanked, the cart is emptied, the dialog
    /// closes, the form resets and the confirmation is returned.
    pub fn submit_checkout(&mut self) -> Result<OrderConfirmation, CommerceError> {
        self.dialog.ensure_open()?;
        if self.cart.is_empty() {
            warn!(session = %self.session_id, "checkout submitted with an empty cart");
            return Err(CommerceError::EmptyCart);
        }

        let contact = match self.form.validate() {
            Ok(contact) => contact,
            Err(err) => {
                warn!(session = %self.session_id, error = %err, "checkout rejected");
                self.notifier.notify(Notification::missing_required_fields());
                return Err(err);
            }
        };

        let order = OrderConfirmation::new(contact, self.cart.summary()?);
        self.notifier
            .notify(Notification::order_placed(&order.contact.name, &order.contact.phone));

        self.cart.clear();
        self.dialog.complete()?;
        self.form.reset();

        info!(
            session = %self.session_id,
            order_id = %order.id,
            items = order.total_items,
            total = %order.total_price,
            "order placed"
        );
        Ok(order)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn dialog(&self) -> &CheckoutDialog {
        &self.dialog
    }

    pub fn is_checkout_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::DialogState;
    use crate::notify::NotificationVariant;

    const KINGSTON: ProductId = ProductId::new(1);
    const CORSAIR: ProductId = ProductId::new(2);

    fn storefront() -> Storefront {
        Storefront::with_log(Catalog::builtin())
    }

    fn fill_contact(shop: &mut Storefront, name: &str, phone: &str) {
        shop.update_field(ContactField::Name, name);
        shop.update_field(ContactField::Phone, phone);
    }

    #[test]
    fn test_add_notifies_with_product_name() {
        let mut shop = storefront();
        shop.add_to_cart(KINGSTON).unwrap();

        let last = shop.notifier().last().unwrap();
        assert_eq!(last.title, "Товар добавлен в корзину");
        assert_eq!(last.description, "DDR4 Kingston Fury HyperX");
        assert_eq!(last.variant, NotificationVariant::Default);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut shop = storefront();
        assert_eq!(
            shop.add_to_cart(ProductId::new(42)),
            Err(CommerceError::ProductNotFound(ProductId::new(42)))
        );
        assert!(shop.cart().is_empty());
        assert!(shop.notifier().is_empty());
    }

    #[test]
    fn test_open_checkout_on_empty_cart() {
        let mut shop = storefront();
        assert_eq!(shop.open_checkout(), Err(CommerceError::EmptyCart));
        assert_eq!(shop.dialog().state(), DialogState::Closed);
    }

    #[test]
    fn test_submit_requires_open_dialog() {
        let mut shop = storefront();
        shop.add_to_cart(KINGSTON).unwrap();
        fill_contact(&mut shop, "Ivan", "+7900000000");

        assert!(matches!(
            shop.submit_checkout(),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));
        assert_eq!(shop.total_items(), 1);
    }

    #[test]
    fn test_submit_after_cart_emptied() {
        let mut shop = storefront();
        shop.add_to_cart(KINGSTON).unwrap();
        shop.open_checkout().unwrap();
        fill_contact(&mut shop, "Ivan", "+7900000000");
        shop.decrement(KINGSTON);
        let notified = shop.notifier().len();

        assert_eq!(shop.submit_checkout(), Err(CommerceError::EmptyCart));
        assert_eq!(shop.notifier().len(), notified);
        assert_eq!(shop.form().name, "Ivan");
        assert!(shop.is_checkout_open());
    }

    #[test]
    fn test_rejected_submit_keeps_state() {
        let mut shop = storefront();
        shop.add_to_cart(KINGSTON).unwrap();
        shop.open_checkout().unwrap();
        fill_contact(&mut shop, "", "+7900000000");
        let cart_before = shop.cart().clone();
        let form_before = shop.form().clone();

        let err = shop.submit_checkout().unwrap_err();
        assert_eq!(
            err,
            CommerceError::Validation {
                missing: vec![ContactField::Name]
            }
        );
        assert_eq!(shop.cart(), &cart_before);
        assert_eq!(shop.form(), &form_before);
        assert!(shop.is_checkout_open());
        assert!(shop.notifier().last().unwrap().is_destructive());
    }

    #[test]
    fn test_successful_submit_resets_session() {
        let mut shop = storefront();
        shop.add_to_cart(KINGSTON).unwrap();
        shop.add_to_cart(KINGSTON).unwrap();
        shop.add_to_cart(CORSAIR).unwrap();
        shop.open_checkout().unwrap();
        fill_contact(&mut shop, "Ivan", "+7900000000");

        let order = shop.submit_checkout().unwrap();
        assert_eq!(order.total_items, 3);
        assert_eq!(order.total_price, Money::rub(2 * 8990 + 12490));

        assert_eq!(shop.total_items(), 0);
        assert!(shop.cart().is_empty());
        assert_eq!(shop.form(), &CheckoutForm::default());
        assert!(!shop.is_checkout_open());

        let last = shop.notifier().last().unwrap();
        assert_eq!(last.title, "Заказ оформлен!");
        assert!(last.description.contains("Ivan"));
        assert!(last.description.contains("+7900000000"));
    }

    #[test]
    fn test_cancel_keeps_form() {
        let mut shop = storefront();
        shop.add_to_cart(KINGSTON).unwrap();
        shop.open_checkout().unwrap();
        fill_contact(&mut shop, "Ivan", "");
        shop.cancel_checkout();

        assert!(!shop.is_checkout_open());
        assert_eq!(shop.form().name, "Ivan");
        assert_eq!(shop.total_items(), 1);
    }
}
