//! Checkout dialog state machine.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Visibility of the checkout dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

impl DialogState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogState::Closed => "closed",
            DialogState::Open => "open",
        }
    }
}

/// Closed → Open → Closed.
///
/// Opening needs a non-empty cart. Submission is synchronous, so there is
/// no pending state between Open and Closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CheckoutDialog {
    state: DialogState,
}

impl CheckoutDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog for a cart holding `cart_len` entries.
    pub fn open(&mut self, cart_len: usize) -> Result<(), CommerceError> {
        if cart_len == 0 {
            return Err(CommerceError::EmptyCart);
        }
        self.state = DialogState::Open;
        Ok(())
    }

    /// Close without submitting. Closing a closed dialog is harmless.
    pub fn cancel(&mut self) {
        self.state = DialogState::Closed;
    }

    /// Fail unless the dialog is open; used before a submission.
    pub fn ensure_open(&self) -> Result<(), CommerceError> {
        match self.state {
            DialogState::Open => Ok(()),
            DialogState::Closed => Err(CommerceError::InvalidCheckoutTransition {
                from: DialogState::Closed.as_str().to_string(),
                to: "submitted".to_string(),
            }),
        }
    }

    /// Close after a successful submission.
    pub fn complete(&mut self) -> Result<(), CommerceError> {
        self.ensure_open()?;
        self.state = DialogState::Closed;
        Ok(())
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_starts_closed() {
        let dialog = CheckoutDialog::new();
        assert_eq!(dialog.state(), DialogState::Closed);
    }

    #[test]
    fn test_open_requires_items() {
        let mut dialog = CheckoutDialog::new();
        assert_eq!(dialog.open(0), Err(CommerceError::EmptyCart));
        assert!(!dialog.is_open());

        dialog.open(2).unwrap();
        assert!(dialog.is_open());
    }

    #[test]
    fn test_cancel_closes() {
        let mut dialog = CheckoutDialog::new();
        dialog.open(1).unwrap();
        dialog.cancel();
        assert!(!dialog.is_open());
        dialog.cancel();
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_complete_requires_open() {
        let mut dialog = CheckoutDialog::new();
        assert!(matches!(
            dialog.complete(),
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));

        dialog.open(1).unwrap();
        assert!(dialog.complete().is_ok());
        assert_eq!(dialog.state(), DialogState::Closed);
    }
}
