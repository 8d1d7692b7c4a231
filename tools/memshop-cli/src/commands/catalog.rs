//! Catalog listing.

use anyhow::{anyhow, Result};
use memshop_commerce::catalog::{CatalogSection, Category};

use super::CatalogArgs;
use crate::context::Context;

const WIDTHS: [usize; 4] = [4, 30, 28, 12];

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    let filter = match args.category.as_deref() {
        Some(slug) => Some(
            Category::from_str(slug).ok_or_else(|| anyhow!("Unknown category: {}", slug))?,
        ),
        None => None,
    };

    let sections: Vec<CatalogSection<'_>> = catalog
        .sections()
        .into_iter()
        .filter(|section| filter.map_or(true, |c| c == section.category))
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&sections);
        return Ok(());
    }

    ctx.output.header(&ctx.config.shop.name);
    if sections.is_empty() {
        ctx.output.info("No products in this category.");
        return Ok(());
    }

    for section in &sections {
        print_section(section, ctx);
    }

    Ok(())
}

fn print_section(section: &CatalogSection<'_>, ctx: &Context) {
    ctx.output.header(section.title);
    for product in &section.products {
        ctx.output.table_row(
            &[
                &product.id.to_string(),
                &product.name,
                &product.spec_line(),
                &product.price.display(),
            ],
            &WIDTHS,
        );
    }
}
