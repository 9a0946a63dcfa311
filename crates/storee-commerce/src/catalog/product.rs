//! Product and category types.

use crate::ids::ProductId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sofa,
    Bed,
    Dining,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Sofa, Category::Bed, Category::Dining];

    /// Key as stored in the `category` column and used in URLs.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Sofa => "sofa",
            Category::Bed => "bed",
            Category::Dining => "dining",
        }
    }

    /// Plural label for tabs and filters.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Sofa => "Sofas",
            Category::Bed => "Beds",
            Category::Dining => "Dining",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sofa" => Some(Category::Sofa),
            "bed" => Some(Category::Bed),
            "dining" => Some(Category::Dining),
            _ => None,
        }
    }
}

/// A product row from `products`.
///
/// Partial selects (the related-products strip) omit `description` and
/// `created_at`, so both default to `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug (unique).
    pub slug: String,
    /// Category.
    pub category: Category,
    /// Free-text material label, also used as a filter value.
    pub material: String,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Base price before variant deltas.
    pub price_sar: Money,
    /// Shown in the featured grid on the home page.
    #[serde(default)]
    pub is_featured: bool,
    /// Creation time; drives the default (newest first) ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// First character of the name, used on image placeholders.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Number of placeholder gradients product cards rotate through.
pub const PLACEHOLDER_TONES: usize = 5;

/// Deterministic placeholder gradient index for a product id.
///
/// Uses the first byte of the id, so `a1` and `a5` share a tone.
pub fn placeholder_tone(id: &ProductId) -> usize {
    id.as_str()
        .bytes()
        .next()
        .map(|b| b as usize % PLACEHOLDER_TONES)
        .unwrap_or(0)
}
