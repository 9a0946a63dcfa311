//! Product catalog module.
//!
//! Contains the row types of the three collections the storefront reads:
//! products, their variant options and their images.

mod image;
mod product;
mod variant;

pub use image::ProductImage;
pub use product::{placeholder_tone, Category, Product, PLACEHOLDER_TONES};
pub use variant::{group_variants, VariantGroup, VariantOption};
