//! Product record.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A memory module offered in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Capacity label (e.g., "32GB").
    pub capacity: String,
    /// Speed label (e.g., "3200MHz").
    pub speed: String,
    /// Image URL.
    pub image: String,
    /// Category the product is listed under.
    pub category: Category,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            capacity: String::new(),
            speed: String::new(),
            image: String::new(),
            category,
        }
    }

    /// Set the capacity and speed labels.
    pub fn with_specs(mut self, capacity: impl Into<String>, speed: impl Into<String>) -> Self {
        self.capacity = capacity.into();
        self.speed = speed.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Capacity and speed joined for compact listings ("32GB • 3600MHz").
    pub fn spec_line(&self) -> String {
        match (self.capacity.is_empty(), self.speed.is_empty()) {
            (false, false) => format!("{} \u{2022} {}", self.capacity, self.speed),
            (false, true) => self.capacity.clone(),
            (true, false) => self.speed.clone(),
            (true, true) => String::new(),
        }
    }

    /// Check the record can be listed: positive id, non-negative price,
    /// non-empty name. Returns the reason when it cannot.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if !self.id.is_valid() {
            return Err("id must be a positive integer".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.price.is_negative() {
            return Err(format!("price must not be negative ({})", self.price));
        }
        Ok(())
    }
}
