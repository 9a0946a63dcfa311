//! Writing the seed catalog to the table store.

use serde::{Deserialize, Serialize};
use storee_data::{TableClient, Transport};
use storee_observability::StructuredLogger;

use crate::catalog::Product;
use crate::demo::SeedProduct;
use crate::listing::PRODUCTS_TABLE;
use crate::store::VARIANTS_TABLE;

/// A product the store could not take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedFailure {
    pub slug: String,
    pub reason: String,
}

/// Outcome of a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    /// Slugs stored, in catalog order.
    pub seeded: Vec<String>,
    /// Products whose row was rejected; their variants were skipped.
    pub failed: Vec<SeedFailure>,
    /// Products stored without (some of) their variants.
    pub variant_warnings: Vec<SeedFailure>,
}

impl SeedReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.variant_warnings.is_empty()
    }
}

#[derive(Serialize)]
struct VariantRow<'a> {
    product_id: &'a str,
    variant_name: &'a str,
    variant_value: &'a str,
    price_delta: i64,
}

/// Upsert every product on `slug`, then insert its variants under the id
/// the store returned.
///
/// A failing product is recorded and the run moves on to the next one.
pub async fn seed_remote<T: Transport>(
    client: &TableClient<T>,
    catalog: &[SeedProduct],
    logger: &StructuredLogger,
) -> SeedReport {
    let mut report = SeedReport::default();

    for product in catalog {
        let stored: Result<Vec<Product>, _> = client
            .upsert_rows(PRODUCTS_TABLE, &[product.product_row()], Some("slug"))
            .await;

        let stored = match stored {
            Ok(rows) => rows.into_iter().next(),
            Err(e) => {
                logger
                    .error_builder("seed product failed")
                    .field("slug", product.slug.as_str())
                    .field("error", e.to_string())
                    .emit();
                report.failed.push(SeedFailure {
                    slug: product.slug.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let Some(stored) = stored else {
            report.failed.push(SeedFailure {
                slug: product.slug.clone(),
                reason: "store returned no row".to_string(),
            });
            continue;
        };

        if !product.variants.is_empty() {
            let rows: Vec<VariantRow<'_>> = product
                .variants
                .iter()
                .map(|v| VariantRow {
                    product_id: stored.id.as_str(),
                    variant_name: &v.variant_name,
                    variant_value: &v.variant_value,
                    price_delta: v.price_delta.amount,
                })
                .collect();

            let inserted: Result<Vec<serde_json::Value>, _> =
                client.upsert_rows(VARIANTS_TABLE, &rows, None).await;
            if let Err(e) = inserted {
                logger
                    .warn_builder("seed variants failed")
                    .field("slug", product.slug.as_str())
                    .field("error", e.to_string())
                    .emit();
                report.variant_warnings.push(SeedFailure {
                    slug: product.slug.clone(),
                    reason: e.to_string(),
                });
            }
        }

        logger
            .info_builder("seeded product")
            .field("slug", product.slug.as_str())
            .field_i64("variants", product.variants.len() as i64)
            .emit();
        report.seeded.push(product.slug.clone());
    }

    report
}

fn sql_text(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// The catalog as SQL statements, for pasting into the store's console.
///
/// Products are upserted on `slug`; variants look their product up by slug.
pub fn seed_sql(catalog: &[SeedProduct]) -> String {
    let mut out = String::from("begin;\n\n");

    for product in catalog {
        out.push_str(&format!(
            "insert into products (name, slug, category, material, description, price_sar, is_featured)\n\
             values ({}, {}, {}, {}, {}, {}, {})\n\
             on conflict (slug) do update set name = excluded.name, category = excluded.category, \
             material = excluded.material, description = excluded.description, \
             price_sar = excluded.price_sar, is_featured = excluded.is_featured;\n",
            sql_text(&product.name),
            sql_text(&product.slug),
            sql_text(product.category.key()),
            sql_text(&product.material),
            sql_text(&product.description),
            product.price_sar.amount,
            product.is_featured,
        ));

        for variant in &product.variants {
            out.push_str(&format!(
                "insert into product_variants (product_id, variant_name, variant_value, price_delta)\n\
                 select id, {}, {}, {} from products where slug = {};\n",
                sql_text(&variant.variant_name),
                sql_text(&variant.variant_value),
                variant.price_delta.amount,
                sql_text(&product.slug),
            ));
        }
        out.push('\n');
    }

    out.push_str("commit;\n");
    out
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use storee_core::RequestId;
    use storee_data::MockTransport;

    use super::*;
    use crate::catalog::Category;
    use crate::demo::SeedVariant;
    use crate::money::Money;

    fn product(slug: &str, variants: usize) -> SeedProduct {
        SeedProduct {
            name: format!("{} name", slug),
            slug: slug.to_string(),
            category: Category::Bed,
            material: "Oak Wood".to_string(),
            description: "Solid oak.".to_string(),
            price_sar: Money::sar(5400),
            is_featured: false,
            variants: (0..variants)
                .map(|i| SeedVariant {
                    variant_name: "Size".to_string(),
                    variant_value: format!("S{}", i),
                    price_delta: Money::sar(100 * i as i64),
                })
                .collect(),
        }
    }

    const STORED_ROW: &str = r#"[{"id":"p-1","name":"Dune","slug":"dune","category":"bed","material":"Oak Wood","price_sar":5400,"is_featured":false}]"#;

    #[test]
    fn test_seed_upserts_product_then_variants() {
        let transport = MockTransport::new()
            .respond("product_variants", 201, "[]")
            .respond("products?on_conflict=slug", 201, STORED_ROW);
        let client = TableClient::new("https://s", "service", transport);
        let (logger, _lines) = StructuredLogger::capturing(RequestId::from_string("seed"));

        let report = block_on(seed_remote(&client, &[product("dune", 2)], &logger));

        assert_eq!(report.seeded, vec!["dune".to_string()]);
        assert!(report.is_clean());

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].url.ends_with("/rest/v1/products?on_conflict=slug"));
        let body: serde_json::Value =
            serde_json::from_slice(sent[1].body.as_deref().unwrap_or_default()).unwrap();
        assert_eq!(body[0]["product_id"], "p-1");
        assert_eq!(body[1]["variant_value"], "S1");
        assert_eq!(body[1]["price_delta"], 100);
    }

    #[test]
    fn test_seed_continues_after_failure() {
        let transport = MockTransport::new()
            .respond("product_variants", 201, "[]")
            .respond("products?on_conflict=slug", 500, "{}");
        let client = TableClient::new("https://s", "service", transport);
        let (logger, lines) = StructuredLogger::capturing(RequestId::from_string("seed"));

        let report = block_on(seed_remote(&client, &[product("a", 1), product("b", 0)], &logger));

        assert!(report.seeded.is_empty());
        assert_eq!(report.failed.len(), 2);
        assert_eq!(report.failed[1].slug, "b");
        assert!(lines.lock().unwrap().iter().any(|l| l.contains("seed product failed")));
    }

    #[test]
    fn test_seed_variant_failure_is_a_warning() {
        let transport = MockTransport::new()
            .respond("product_variants", 400, "{}")
            .respond("products?on_conflict=slug", 201, STORED_ROW);
        let client = TableClient::new("https://s", "service", transport);
        let (logger, _lines) = StructuredLogger::capturing(RequestId::from_string("seed"));

        let report = block_on(seed_remote(&client, &[product("dune", 1)], &logger));

        assert_eq!(report.seeded.len(), 1);
        assert_eq!(report.variant_warnings.len(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_seed_sql_escapes_quotes() {
        let mut p = product("raha", 1);
        p.description = "Sleeper's choice".to_string();
        let sql = seed_sql(&[p]);

        assert!(sql.starts_with("begin;"));
        assert!(sql.contains("'Sleeper''s choice'"));
        assert!(sql.contains("on conflict (slug) do update"));
        assert!(sql.contains("select id, 'Size', 'S0', 0 from products where slug = 'raha';"));
        assert!(sql.trim_end().ends_with("commit;"));
    }
}
