//! Product detail, price for a selection and the order link.

use anyhow::Result;
use serde::Serialize;
use storee_sdk::storee_commerce::catalog::{group_variants, Product, VariantGroup};
use storee_sdk::storee_commerce::pricing::{PriceBreakdown, Selection};
use storee_sdk::storee_commerce::whatsapp::OrderRequest;
use storee_sdk::storee_commerce::CommerceError;
use thiserror::Error;

use super::ProductArgs;
use crate::context::Context;
use crate::output::{price_cell, source_badge};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectArgError {
    #[error("expected Group=Value, got '{0}'")]
    Malformed(String),
}

#[derive(Serialize)]
struct ProductReport<'a> {
    product: &'a Product,
    is_demo: bool,
    selection: String,
    area: &'a str,
    breakdown: &'a PriceBreakdown,
    order_url: String,
}

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;

    let spinner = ctx.output.spinner(&format!("Loading {}...", args.slug));
    let detail = shop.product(&args.slug).await;
    spinner.finish_and_clear();

    if detail.is_demo {
        ctx.output.warn(&format!(
            "'{}' could not be loaded, showing the demo product",
            args.slug
        ));
    }

    let groups = group_variants(&detail.variants);
    let selection = parse_selection(&args.select, &groups)?;
    let product = &detail.product;
    let breakdown = PriceBreakdown::compute(product.price_sar, &detail.variants, &selection);

    let order = OrderRequest::new(&product.name, &product.material, &selection, args.area.as_deref());
    let order_url = ctx.whatsapp().order_url(&order);

    if ctx.output.is_json() {
        ctx.output.json(&ProductReport {
            product,
            is_demo: detail.is_demo,
            selection: selection.summary(),
            area: order.area_or_default(),
            breakdown: &breakdown,
            order_url,
        });
        return Ok(());
    }

    ctx.output.header(&format!("{} ({})", product.name, source_badge(detail.is_demo)));
    ctx.output.kv("category", product.category.label());
    ctx.output.kv("material", &product.material);
    if let Some(description) = &product.description {
        ctx.output.kv("description", description);
    }

    if !groups.is_empty() {
        ctx.output.info("Options:");
        for group in &groups {
            let values: Vec<String> = group
                .options
                .iter()
                .map(|o| {
                    let label = o.price_delta.delta_label();
                    if label.is_empty() {
                        o.value.clone()
                    } else {
                        format!("{} ({})", o.value, label)
                    }
                })
                .collect();
            ctx.output.kv(&group.name, &values.join(", "));
        }
    }

    ctx.output.info("Price:");
    ctx.output.kv("base", &price_cell(breakdown.base, false));
    for adjustment in breakdown.adjustments.iter().filter(|a| !a.delta.is_zero()) {
        ctx.output.kv(
            &format!("{}: {}", adjustment.group, adjustment.value),
            &price_cell(adjustment.delta, true),
        );
    }
    ctx.output.kv("total", &price_cell(breakdown.total, false));

    ctx.output.info("Order:");
    ctx.output.kv("variants", &order.variants);
    ctx.output.kv("area", order.area_or_default());
    ctx.output.success(&order_url);

    Ok(())
}

fn split_choice(raw: &str) -> Result<(&str, &str), SelectArgError> {
    raw.split_once('=')
        .map(|(g, v)| (g.trim(), v.trim()))
        .filter(|(g, v)| !g.is_empty() && !v.is_empty())
        .ok_or_else(|| SelectArgError::Malformed(raw.to_string()))
}

/// Turn `Group=Value` arguments into a selection the product offers.
fn parse_selection(raw: &[String], groups: &[VariantGroup]) -> Result<Selection> {
    let mut selection = Selection::new();
    for choice in raw {
        let (group, value) = split_choice(choice)?;
        let offered = groups
            .iter()
            .find(|g| g.name == group)
            .is_some_and(|g| g.option(value).is_some());
        if !offered {
            return Err(CommerceError::InvalidSelection(format!("{}={}", group, value)).into());
        }
        selection.select(group, value);
    }
    Ok(selection)
}
