//! CLI configuration.

use anyhow::{Context, Result};
use memshop_commerce::catalog::{Catalog, Category, Product};
use memshop_commerce::{CommerceError, Currency, Money, ProductId};
use memshop_observability::LogConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Shop presentation.
    #[serde(default)]
    pub shop: ShopConfig,

    /// Log subscriber settings.
    #[serde(default)]
    pub logging: LogConfig,

    /// Catalog override.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// The catalog to sell from: the configured products, or the built-in
    /// list when none are configured.
    pub fn build_catalog(&self) -> Result<Catalog, CommerceError> {
        if self.catalog.products.is_empty() {
            return Ok(Catalog::builtin());
        }

        let products = self
            .catalog
            .products
            .iter()
            .map(|record| record.to_product(self.shop.currency))
            .collect::<Result<Vec<_>, CommerceError>>()?;
        Catalog::from_products(products)
    }
}

/// Shop presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Name shown in headers.
    #[serde(default = "default_shop_name")]
    pub name: String,

    /// Currency configured catalog prices are quoted in.
    #[serde(default)]
    pub currency: Currency,
}

fn default_shop_name() -> String {
    "MemoryShop".to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            currency: Currency::default(),
        }
    }
}

/// Catalog override section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products replacing the built-in catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<ProductRecord>,
}

/// A product as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u32,
    pub name: String,

    /// Price in whole currency units.
    pub price: i64,

    #[serde(default)]
    pub capacity: String,

    #[serde(default)]
    pub speed: String,

    #[serde(default)]
    pub image: String,

    pub category: Category,
}

impl ProductRecord {
    fn to_product(&self, currency: Currency) -> Result<Product, CommerceError> {
        let price = Money::try_from_major(self.price, currency).ok_or_else(|| {
            CommerceError::InvalidProduct {
                id: ProductId::new(self.id),
                reason: format!("price {} overflows", self.price),
            }
        })?;

        Ok(Product::new(self.id, self.name.clone(), price, self.category)
            .with_specs(self.capacity.clone(), self.speed.clone())
            .with_image(self.image.clone()))
    }
}

/// Generate a default memshop.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# MemoryShop configuration

[shop]
name = "{name}"
currency = "RUB"

[logging]
level = "info"
format = "human"

# Uncomment to replace the built-in catalog.
# [[catalog.products]]
# id = 1
# name = "DDR4 Kingston Fury HyperX"
# price = 8990
# capacity = "32GB (1x32GB)"
# speed = "3200MHz"
# category = "gaming"
"#,
        name = name
    )
}
