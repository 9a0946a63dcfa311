//! Catalog listing.

use anyhow::Result;
use storee_sdk::storee_commerce::catalog::Category;
use storee_sdk::storee_commerce::listing::{CatalogQuery, SortOption};
use storee_sdk::storee_commerce::CommerceError;

use super::ShopArgs;
use crate::context::Context;
use crate::output::{price_cell, source_badge};

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let query = build_query(&args)?;
    let shop = ctx.storefront()?;

    let spinner = ctx.output.spinner("Loading catalog...");
    let listing = shop.list(&query).await;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} pieces ({})",
        listing.products.len(),
        source_badge(listing.is_demo)
    ));
    if listing.products.is_empty() {
        ctx.output.info("No products match these filters.");
        return Ok(());
    }

    let widths = [26, 8, 20, 12];
    ctx.output.table_row(&["NAME", "CATEGORY", "MATERIAL", "PRICE"], &widths);
    for product in &listing.products {
        let price = price_cell(product.price_sar, false);
        ctx.output.table_row(
            &[
                &product.name,
                product.category.label(),
                &product.material,
                &price,
            ],
            &widths,
        );
    }

    Ok(())
}

fn build_query(args: &ShopArgs) -> Result<CatalogQuery> {
    let mut query = CatalogQuery::new();
    if let Some(key) = args.category.as_deref().filter(|k| !k.is_empty()) {
        let category =
            Category::from_key(key).ok_or_else(|| CommerceError::UnknownCategory(key.to_string()))?;
        query = query.with_category(category);
    }
    if let Some(material) = args.material.as_deref().filter(|m| !m.is_empty()) {
        query = query.with_material(material);
    }
    if let Some(sort) = &args.sort {
        query = query.with_sort(SortOption::parse(sort));
    }
    Ok(query)
}
