//! Variant options and their grouping.

use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One selectable value of a variant group, from `product_variants`.
///
/// A product offers several groups (`Size`, `Color`); each group offers
/// several values, each with a signed price delta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantOption {
    pub id: VariantId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    /// Group name, e.g. `Size`.
    #[serde(rename = "variant_name")]
    pub group: String,
    /// Value label, e.g. `3-Seater`.
    #[serde(rename = "variant_value")]
    pub value: String,
    /// Added to the base price when this value is selected.
    pub price_delta: Money,
}

impl VariantOption {
    pub fn new(
        id: impl Into<VariantId>,
        group: impl Into<String>,
        value: impl Into<String>,
        price_delta: i64,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: None,
            group: group.into(),
            value: value.into(),
            price_delta: Money::sar(price_delta),
        }
    }
}

/// Options sharing a group name, in the order they were listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantGroup {
    pub name: String,
    pub options: Vec<VariantOption>,
}

impl VariantGroup {
    /// Find the option carrying `value`.
    pub fn option(&self, value: &str) -> Option<&VariantOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// Group options by name. Groups appear in first-seen order, and so do
/// the options within each group.
pub fn group_variants(options: &[VariantOption]) -> Vec<VariantGroup> {
    let mut groups: Vec<VariantGroup> = Vec::new();

    for option in options {
        match groups.iter_mut().find(|g| g.name == option.group) {
            Some(group) => group.options.push(option.clone()),
            None => groups.push(VariantGroup {
                name: option.group.clone(),
                options: vec![option.clone()],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let options = vec![
            VariantOption::new("1", "Color", "Cream", 0),
            VariantOption::new("2", "Size", "2-Seater", 0),
            VariantOption::new("3", "Color", "Sand", 0),
            VariantOption::new("4", "Size", "3-Seater", 800),
        ];
        let groups = group_variants(&options);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Color");
        assert_eq!(groups[1].name, "Size");
        let sizes: Vec<_> = groups[1].options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(sizes, vec!["2-Seater", "3-Seater"]);
        assert_eq!(groups[1].option("3-Seater").map(|o| o.price_delta), Some(Money::sar(800)));
    }

    #[test]
    fn test_empty_options_have_no_groups() {
        assert!(group_variants(&[]).is_empty());
    }

    #[test]
    fn test_deserialize_row_column_names() {
        let row = r#"{"id":"v9","product_id":"p1","variant_name":"Chairs","variant_value":"4 Chairs","price_delta":-1400}"#;
        let option: VariantOption = serde_json::from_str(row).unwrap();
        assert_eq!(option.group, "Chairs");
        assert_eq!(option.value, "4 Chairs");
        assert_eq!(option.price_delta, Money::sar(-1400));
    }
}
