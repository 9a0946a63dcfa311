//! Seeding the table store.

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use storee_sdk::storee_commerce::demo::{parse_seed_catalog, seed_catalog, SeedProduct};
use storee_sdk::storee_commerce::seed::{seed_remote, seed_sql, SeedReport};

use super::SeedArgs;
use crate::context::Context;

/// Run the seed command.
pub async fn run(args: SeedArgs, ctx: &Context) -> Result<()> {
    let catalog = load_catalog(args.file.as_deref(), ctx)?;

    if args.sql {
        print!("{}", seed_sql(&catalog));
        return Ok(());
    }

    let client = ctx.service_client()?;
    ctx.output.header("Seeding catalog");
    ctx.output.kv("store", client.base_url());
    ctx.output.kv("products", &catalog.len().to_string());
    ctx.output.kv(
        "variants",
        &catalog.iter().map(|p| p.variants.len()).sum::<usize>().to_string(),
    );

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt("Upsert these products into the store?")
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Seeding cancelled");
            return Ok(());
        }
    }

    let logger = ctx.logger();
    let progress = ctx.output.progress(catalog.len() as u64, "seeding");
    let mut report = SeedReport::default();
    for product in &catalog {
        progress.set_message(product.slug.clone());
        let one = seed_remote(&client, std::slice::from_ref(product), &logger).await;
        report.seeded.extend(one.seeded);
        report.failed.extend(one.failed);
        report.variant_warnings.extend(one.variant_warnings);
        progress.inc(1);
    }
    progress.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&report);
    } else {
        ctx.output.success(&format!("Seeded {} products", report.seeded.len()));
        for warning in &report.variant_warnings {
            ctx.output.warn(&format!("{}: variants not stored ({})", warning.slug, warning.reason));
        }
        for failure in &report.failed {
            ctx.output.error(&format!("{}: {}", failure.slug, failure.reason));
        }
    }

    if !report.failed.is_empty() {
        bail!("{} of {} products failed", report.failed.len(), catalog.len());
    }
    Ok(())
}

fn load_catalog(file: Option<&str>, ctx: &Context) -> Result<Vec<SeedProduct>> {
    match file {
        Some(path) => {
            let path = ctx.resolve_path(path);
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_seed_catalog(&content)
                .with_context(|| format!("Invalid seed catalog {}", path.display()))
        }
        None => Ok(seed_catalog()?),
    }
}
