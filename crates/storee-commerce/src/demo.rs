//! Built-in demo catalog.
//!
//! Served whenever the table store is unreachable or empty, and used by
//! the CLI as the default seed data.

use crate::catalog::{Category, Product, VariantOption};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// `(id, name, slug, category, material, price, featured)`
type DemoRow = (
    &'static str,
    &'static str,
    &'static str,
    Category,
    &'static str,
    i64,
    bool,
);

const DEMO_ROWS: [DemoRow; 15] = [
    ("a1", "Sahara Modular Sofa", "sahara-modular-sofa", Category::Sofa, "Italian Leather", 8500, true),
    ("a2", "Oasis Velvet Sofa", "oasis-velvet-sofa", Category::Sofa, "Premium Velvet", 7300, true),
    ("a3", "Desert Wind Sofa", "desert-wind-sofa", Category::Sofa, "Boucle Fabric", 6100, false),
    ("a4", "Mirage L-Shape", "mirage-l-shape", Category::Sofa, "Microfiber", 9200, false),
    ("a5", "Al Noor Sectional", "al-noor-sectional", Category::Sofa, "Linen Blend", 11500, true),
    ("b1", "Al Madinah King Bed", "al-madinah-king-bed", Category::Bed, "Solid Walnut", 6200, true),
    ("b2", "Dune Platform Bed", "dune-platform-bed", Category::Bed, "Oak Wood", 5400, false),
    ("b3", "Raha Upholstered Bed", "raha-upholstered-bed", Category::Bed, "Velvet Headboard", 7800, true),
    ("b4", "Serenity Panel Bed", "serenity-panel-bed", Category::Bed, "MDF + Leather", 4900, false),
    ("b5", "Horizon Canopy Bed", "horizon-canopy-bed", Category::Bed, "Iron + Fabric", 8400, false),
    ("c1", "Madina Dining Table", "madina-dining-table", Category::Dining, "Sintered Stone", 12000, true),
    ("c2", "Sultana Dining Set", "sultana-dining-set", Category::Dining, "Teak + Travertine", 9800, false),
    ("c3", "Majlis Round Table", "majlis-round-table", Category::Dining, "Marble Top", 14500, true),
    ("c4", "Breeze Dining Chairs", "breeze-dining-chairs", Category::Dining, "Rattan + Foam", 2800, false),
    ("c5", "Amber Buffet Cabinet", "amber-buffet-cabinet", Category::Dining, "Acacia Wood", 6700, false),
];

const DEMO_DETAIL_DESCRIPTION: &str = "The Sahara Modular Sofa brings together the finest Italian leather with precision engineering. Its modular design allows you to configure it to perfectly suit your space. The low-profile silhouette and deep cushions provide unmatched comfort, while the clean lines make it a timeless statement piece.";

const SEED_CATALOG_JSON: &str = include_str!("../data/seed_catalog.json");

/// The fixed demo listing, in display order.
///
/// Demo rows have no creation time, so the default ordering keeps this
/// order.
pub fn demo_products() -> Vec<Product> {
    DEMO_ROWS
        .iter()
        .map(
            |&(id, name, slug, category, material, price, featured)| Product {
                id: ProductId::new(id),
                name: name.to_string(),
                slug: slug.to_string(),
                category,
                material: material.to_string(),
                description: None,
                price_sar: Money::sar(price),
                is_featured: featured,
                created_at: None,
            },
        )
        .collect()
}

/// Slugs that ship with a photo under `/images/products/`.
pub fn has_product_image(slug: &str) -> bool {
    DEMO_ROWS.iter().any(|row| row.2 == slug)
}

/// Photo path for a product slug, when one ships with the site.
pub fn product_image_path(slug: &str) -> Option<String> {
    has_product_image(slug).then(|| format!("/images/products/{}.png", slug))
}

/// The product shown when a detail page cannot be loaded.
pub fn demo_detail_product() -> Product {
    Product {
        id: ProductId::new("demo"),
        name: "Sahara Modular Sofa".to_string(),
        slug: "sahara-modular-sofa".to_string(),
        category: Category::Sofa,
        material: "Italian Leather".to_string(),
        description: Some(DEMO_DETAIL_DESCRIPTION.to_string()),
        price_sar: Money::sar(8500),
        is_featured: true,
        created_at: None,
    }
}

/// Variant options of the demo detail product.
pub fn demo_variants() -> Vec<VariantOption> {
    vec![
        VariantOption::new("v1", "Size", "2-Seater", 0),
        VariantOption::new("v2", "Size", "3-Seater", 1200),
        VariantOption::new("v3", "Size", "L-Shape", 2500),
        VariantOption::new("v4", "Color", "Ivory White", 0),
        VariantOption::new("v5", "Color", "Cognac Brown", 0),
        VariantOption::new("v6", "Color", "Charcoal Grey", 0),
    ]
}

/// A variant as written to the store when seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedVariant {
    pub variant_name: String,
    pub variant_value: String,
    pub price_delta: Money,
}

/// A product and its variants as written to the store when seeding.
///
/// Ids and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedProduct {
    pub name: String,
    pub slug: String,
    pub category: Category,
    pub material: String,
    pub description: String,
    pub price_sar: Money,
    pub is_featured: bool,
    #[serde(default)]
    pub variants: Vec<SeedVariant>,
}

impl SeedProduct {
    /// The product row without its variants.
    pub fn product_row(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "slug": self.slug,
            "category": self.category,
            "material": self.material,
            "description": self.description,
            "price_sar": self.price_sar,
            "is_featured": self.is_featured,
        })
    }
}

/// Parse a seed catalog from JSON and check it.
///
/// Slugs must be non-empty and unique; prices must not be negative.
pub fn parse_seed_catalog(json: &str) -> Result<Vec<SeedProduct>, CommerceError> {
    let catalog: Vec<SeedProduct> = serde_json::from_str(json)?;

    let mut slugs: Vec<&str> = Vec::with_capacity(catalog.len());
    for product in &catalog {
        if product.slug.trim().is_empty() {
            return Err(CommerceError::ValidationError(format!(
                "product '{}' has an empty slug",
                product.name
            )));
        }
        if slugs.contains(&product.slug.as_str()) {
            return Err(CommerceError::ValidationError(format!(
                "duplicate slug '{}'",
                product.slug
            )));
        }
        if product.price_sar.is_negative() {
            return Err(CommerceError::ValidationError(format!(
                "product '{}' has a negative price",
                product.slug
            )));
        }
        slugs.push(product.slug.as_str());
    }

    Ok(catalog)
}

/// The seed catalog bundled with the crate.
pub fn seed_catalog() -> Result<Vec<SeedProduct>, CommerceError> {
    parse_seed_catalog(SEED_CATALOG_JSON)
}
