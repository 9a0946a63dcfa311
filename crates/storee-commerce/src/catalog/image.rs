//! Product images.

use crate::ids::{ImageId, ProductId};
use serde::{Deserialize, Serialize};

/// An image row from `product_images`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    pub id: ImageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub url: String,
    /// Alt text; the product name is used when absent.
    #[serde(default)]
    pub alt: Option<String>,
}

impl ProductImage {
    /// Alt text, falling back to the given product name.
    pub fn alt_or<'a>(&'a self, product_name: &'a str) -> &'a str {
        match self.alt.as_deref() {
            Some(alt) if !alt.trim().is_empty() => alt,
            _ => product_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alt_fallback() {
        let mut img: ProductImage = serde_json::from_str(
            r#"{"id":"i1","product_id":"p1","url":"/x.png","alt":null}"#,
        )
        .unwrap();
        assert_eq!(img.alt_or("Sahara"), "Sahara");
        img.alt = Some("Front view".to_string());
        assert_eq!(img.alt_or("Sahara"), "Front view");
    }
}
