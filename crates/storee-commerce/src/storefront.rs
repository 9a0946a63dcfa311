//! Catalog service: remote reads with the demo catalog as fallback.
//!
//! A failed read and an empty read are treated the same way. Pages keep
//! rendering with demo content and the reason goes to the log.

use serde::Serialize;
use storee_data::{FetchError, TableQuery};
use storee_observability::StructuredLogger;

use crate::catalog::{Category, Product, ProductImage, VariantOption};
use crate::demo::{demo_detail_product, demo_products, demo_variants};
use crate::listing::{CatalogQuery, PRODUCTS_TABLE};
use crate::store::CatalogSource;

/// Featured products shown on the home page.
pub const FEATURED_LIMIT: usize = 6;

/// Products per home-page collection tab.
pub const COLLECTION_LIMIT: usize = 4;

/// Related products under a detail page.
pub const RELATED_LIMIT: usize = 4;

const RELATED_COLUMNS: &str = "id,name,slug,category,material,price_sar,is_featured";

/// A product listing and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub products: Vec<Product>,
    /// Served from the demo catalog.
    pub is_demo: bool,
}

/// Everything a product page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetail {
    pub product: Product,
    pub variants: Vec<VariantOption>,
    pub images: Vec<ProductImage>,
    pub is_demo: bool,
}

/// Read side of the shop, one per request.
pub struct Storefront<S> {
    source: S,
    logger: StructuredLogger,
}

impl<S: CatalogSource> Storefront<S> {
    pub fn new(source: S, logger: StructuredLogger) -> Self {
        Self { source, logger }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    fn log_fallback(&self, what: &str, reason: &str) {
        self.logger
            .warn_builder("serving demo catalog")
            .field("read", what)
            .field("reason", reason)
            .emit();
    }

    /// Run a product read; `Err` carries the reason to fall back.
    async fn remote_products(&self, query: &TableQuery) -> Result<Vec<Product>, String> {
        match self.source.products(query).await {
            Ok(rows) if rows.is_empty() => Err("no rows".to_string()),
            Ok(rows) => Ok(rows),
            Err(e) => Err(fallback_reason(&e)),
        }
    }

    /// The shop listing.
    ///
    /// On failure or zero rows the demo list is filtered and sorted the
    /// same way locally.
    pub async fn list(&self, query: &CatalogQuery) -> Listing {
        match self.remote_products(&query.to_table_query()).await {
            Ok(products) => {
                self.logger
                    .debug_builder("listing loaded")
                    .field_i64("count", products.len() as i64)
                    .emit();
                Listing {
                    products,
                    is_demo: false,
                }
            }
            Err(reason) => {
                self.log_fallback("list", &reason);
                Listing {
                    products: query.apply(&demo_products()),
                    is_demo: true,
                }
            }
        }
    }

    /// Featured products for the home page.
    pub async fn featured(&self) -> Listing {
        let query = TableQuery::from(PRODUCTS_TABLE)
            .eq("is_featured", true)
            .limit(FEATURED_LIMIT);

        match self.remote_products(&query).await {
            Ok(products) => Listing {
                products,
                is_demo: false,
            },
            Err(reason) => {
                self.log_fallback("featured", &reason);
                Listing {
                    products: demo_products().into_iter().take(FEATURED_LIMIT).collect(),
                    is_demo: true,
                }
            }
        }
    }

    /// One home-page collection tab.
    pub async fn collection(&self, category: Category) -> Listing {
        let query = TableQuery::from(PRODUCTS_TABLE)
            .eq("category", category.key())
            .limit(COLLECTION_LIMIT);

        match self.remote_products(&query).await {
            Ok(products) => Listing {
                products,
                is_demo: false,
            },
            Err(reason) => {
                self.log_fallback("collection", &reason);
                Listing {
                    products: demo_products()
                        .into_iter()
                        .filter(|p| p.category == category)
                        .take(COLLECTION_LIMIT)
                        .collect(),
                    is_demo: true,
                }
            }
        }
    }

    /// A product page.
    ///
    /// When the slug is unknown or the read fails, the demo detail product
    /// is shown with the demo variants and no images. Variants and images
    /// of a stored product are read concurrently; either failing leaves
    /// that list empty.
    pub async fn product(&self, slug: &str) -> ProductDetail {
        let product = match self.source.product_by_slug(slug).await {
            Ok(Some(product)) => product,
            Ok(None) => return self.demo_detail(slug, "no such slug"),
            Err(e) => return self.demo_detail(slug, &fallback_reason(&e)),
        };

        let (variants, images) = futures::join!(
            self.source.variants(&product.id),
            self.source.images(&product.id)
        );

        let variants = variants.unwrap_or_else(|e| {
            self.logger
                .warn_builder("variants unavailable")
                .field("slug", slug)
                .field("reason", fallback_reason(&e))
                .emit();
            Vec::new()
        });
        let images = images.unwrap_or_else(|e| {
            self.logger
                .warn_builder("images unavailable")
                .field("slug", slug)
                .field("reason", fallback_reason(&e))
                .emit();
            Vec::new()
        });

        ProductDetail {
            product,
            variants,
            images,
            is_demo: false,
        }
    }

    fn demo_detail(&self, slug: &str, reason: &str) -> ProductDetail {
        self.logger
            .warn_builder("serving demo catalog")
            .field("read", "product")
            .field("slug", slug)
            .field("reason", reason)
            .emit();
        ProductDetail {
            product: demo_detail_product(),
            variants: demo_variants(),
            images: Vec::new(),
            is_demo: true,
        }
    }

    /// Other products in the same category. Empty hides the section;
    /// there is no demo fallback here.
    pub async fn related(&self, slug: &str, category: Category) -> Vec<Product> {
        let query = TableQuery::from(PRODUCTS_TABLE)
            .select(RELATED_COLUMNS)
            .eq("category", category.key())
            .neq("slug", slug)
            .limit(RELATED_LIMIT);

        match self.source.products(&query).await {
            Ok(rows) => rows,
            Err(e) => {
                self.logger
                    .debug_builder("related unavailable")
                    .field("reason", fallback_reason(&e))
                    .emit();
                Vec::new()
            }
        }
    }
}

fn fallback_reason(error: &FetchError) -> String {
    match error {
        FetchError::NotConfigured => "store not configured".to_string(),
        other => other.to_string(),
    }
}
