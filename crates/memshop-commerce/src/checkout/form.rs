//! Checkout contact form.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A field of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Phone,
    Email,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Phone, ContactField::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
        }
    }

    /// Form label; required fields carry an asterisk.
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Имя *",
            ContactField::Phone => "Телефон *",
            ContactField::Email => "Email",
        }
    }

    /// Example input shown in an empty field.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Иван Иванов",
            ContactField::Phone => "+7 (999) 123-45-67",
            ContactField::Email => "example@mail.ru",
        }
    }

    /// Whether checkout refuses to proceed while this field is empty.
    pub fn is_required(&self) -> bool {
        matches!(self, ContactField::Name | ContactField::Phone)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pending contact details typed into the checkout dialog.
///
/// Values are free text. Trimming is left to the caller: only the empty
/// string counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one field.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Phone => self.phone = value,
            ContactField::Email => self.email = value,
        }
    }

    /// Read one field.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
        }
    }

    /// Required fields that are currently empty, in form order.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.field(*f).is_empty())
            .collect()
    }

    /// Check required fields and produce the contact details of an order.
    pub fn validate(&self) -> Result<ContactDetails, CommerceError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CommerceError::Validation { missing });
        }

        Ok(ContactDetails {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: (!self.email.is_empty()).then(|| self.email.clone()),
        })
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.email.is_empty()
    }
}

/// Validated contact details attached to a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
