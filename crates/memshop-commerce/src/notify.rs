//! User-facing notifications.
//!
//! The storefront reports outcomes as toasts: a title, a description and a
//! variant. Rendering them is the presentation layer's job; this module
//! only defines the contract and the messages.

use serde::{Deserialize, Serialize};

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Error-styled.
    Destructive,
}

/// A toast to show the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    /// A product was put in the cart.
    pub fn added_to_cart(product_name: &str) -> Self {
        Self::new("Товар добавлен в корзину", product_name)
    }

    /// Checkout was attempted without name or phone.
    pub fn missing_required_fields() -> Self {
        Self::destructive(
            "Заполните обязательные поля",
            "Имя и телефон обязательны для оформления заказа",
        )
    }

    /// The order went through.
    pub fn order_placed(name: &str, phone: &str) -> Self {
        Self::new(
            "Заказ оформлен!",
            format!("Спасибо, {name}! Мы свяжемся с вами по телефону {phone}"),
        )
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Receives notifications from the storefront.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl<F> Notifier for F
where
    F: FnMut(Notification),
{
    fn notify(&mut self, notification: Notification) {
        self(notification)
    }
}

/// Keeps notifications in memory until the front end drains them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.entries)
    }

    pub fn last(&self) -> Option<&Notification> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        self.entries.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_placed_mentions_contact() {
        let n = Notification::order_placed("Ivan", "+7900000000");
        assert_eq!(n.title, "Заказ оформлен!");
        assert_eq!(
            n.description,
            "Спасибо, Ivan! Мы свяжемся с вами по телефону +7900000000"
        );
        assert!(!n.is_destructive());
    }

    #[test]
    fn test_missing_fields_is_destructive() {
        assert!(Notification::missing_required_fields().is_destructive());
    }

    #[test]
    fn test_log_drain() {
        let mut log = NotificationLog::new();
        log.notify(Notification::added_to_cart("A"));
        log.notify(Notification::added_to_cart("B"));
        assert_eq!(log.last().map(|n| n.description.as_str()), Some("B"));

        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn test_closure_notifier() {
        let mut seen = Vec::new();
        {
            let mut notifier = |n: Notification| seen.push(n.title);
            notifier.notify(Notification::added_to_cart("A"));
        }
        assert_eq!(seen, vec!["Товар добавлен в корзину".to_string()]);
    }
}
