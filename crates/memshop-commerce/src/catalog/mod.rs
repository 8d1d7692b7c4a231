//! Product catalog module.
//!
//! Contains the product record, the category enumeration and the
//! immutable catalog store the storefront reads from.

mod category;
mod product;
mod store;

pub use category::Category;
pub use product::Product;
pub use store::{Catalog, CatalogSection};
