//! The immutable catalog store.

use std::collections::HashSet;

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// A fixed list of products, partitioned by category.
///
/// Built once at startup and never mutated afterwards. Ids are positive and
/// unique, prices are non-negative and share one currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

/// One category heading with the products listed under it.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSection<'a> {
    pub category: Category,
    pub title: &'static str,
    pub products: Vec<&'a Product>,
}

impl Catalog {
    /// Build a catalog from product records, validating every record.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        let currency = products.first().map(|p| p.price.currency);
        for product in &products {
            product
                .validate()
                .map_err(|reason| CommerceError::InvalidProduct {
                    id: product.id,
                    reason,
                })?;
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
            if let Some(expected) = currency {
                if product.price.currency != expected {
                    return Err(CommerceError::CurrencyMismatch {
                        expected: expected.code().to_string(),
                        got: product.price.currency.code().to_string(),
                    });
                }
            }
        }
        Ok(Self { products })
    }

    /// The catalog the store ships with.
    pub fn builtin() -> Self {
        const CDN: &str = "https://cdn.poehali.dev/projects/026eed3a-a70c-42ac-801c-708b59a84280/files";

        let products = vec![
            Product::new(1, "DDR4 Kingston Fury HyperX", Money::rub(8990), Category::Gaming)
                .with_specs("32GB (1x32GB)", "3200MHz")
                .with_image("https://cdn.poehali.dev/files/Kingston-Fury-Beast-32GB-2x16GB-3200MHz-DDR4-CL16-DIMM-Pamiec-RAM.jpeg"),
            Product::new(2, "Corsair Vengeance RGB PRO", Money::rub(12490), Category::Gaming)
                .with_specs("32GB", "3600MHz")
                .with_image(format!("{CDN}/7de4b992-2d16-442a-af17-fccad070f59e.jpg")),
            Product::new(3, "Kingston ValueRAM", Money::rub(3490), Category::Office)
                .with_specs("8GB", "2666MHz")
                .with_image(format!("{CDN}/825f830b-340c-43d9-b535-f9aa7fe47d54.jpg")),
            Product::new(4, "Crucial Office Memory", Money::rub(5990), Category::Office)
                .with_specs("16GB", "2666MHz")
                .with_image(format!("{CDN}/825f830b-340c-43d9-b535-f9aa7fe47d54.jpg")),
            Product::new(5, "Samsung ECC Registered", Money::rub(24990), Category::Server)
                .with_specs("32GB", "2933MHz")
                .with_image(format!("{CDN}/9423c50b-62fb-4e91-9cbb-9142d5f3e279.jpg")),
            Product::new(6, "Kingston Server Premier", Money::rub(18990), Category::Server)
                .with_specs("16GB", "2666MHz")
                .with_image(format!("{CDN}/9423c50b-62fb-4e91-9cbb-9142d5f3e279.jpg")),
        ];

        Self { products }
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in definition order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products in one category, in definition order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Category sections in display order. Categories with no products are
    /// left out.
    pub fn sections(&self) -> Vec<CatalogSection<'_>> {
        Category::ALL
            .iter()
            .map(|&category| CatalogSection {
                category,
                title: category.title(),
                products: self.in_category(category).collect(),
            })
            .filter(|section| !section.products.is_empty())
            .collect()
    }

    /// Currency every price in the catalog is quoted in.
    pub fn currency(&self) -> Currency {
        self.products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
