//! Variant selection and price computation.

use crate::catalog::{VariantGroup, VariantOption};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use storee_core::QueryParams;

/// Summary used when nothing has been selected.
pub const DEFAULT_SELECTION_SUMMARY: &str = "Default";

/// The shopper's choice per variant group.
///
/// At most one value per group. Groups keep the order in which they were
/// first chosen, which is also the order of the order-message summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    choices: Vec<(String, String)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose `value` for `group`, replacing any earlier choice for that group.
    pub fn select(&mut self, group: impl Into<String>, value: impl Into<String>) {
        let group = group.into();
        let value = value.into();
        match self.choices.iter_mut().find(|(g, _)| *g == group) {
            Some(slot) => slot.1 = value,
            None => self.choices.push((group, value)),
        }
    }

    /// Builder form of [`Selection::select`].
    pub fn with(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        self.select(group, value);
        self
    }

    /// The chosen value for a group.
    pub fn get(&self, group: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|(g, _)| g == group)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `option` is the chosen value of its group.
    pub fn matches(&self, option: &VariantOption) -> bool {
        self.get(&option.group) == Some(option.value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Choices in the order they were first made.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices.iter().map(|(g, v)| (g.as_str(), v.as_str()))
    }

    /// `Size: 3-Seater, Color: Ivory White`, or `Default` when empty.
    pub fn summary(&self) -> String {
        if self.choices.is_empty() {
            return DEFAULT_SELECTION_SUMMARY.to_string();
        }
        self.choices
            .iter()
            .map(|(g, v)| format!("{}: {}", g, v))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Read choices from request parameters.
    ///
    /// Only parameters naming one of `groups` with a value that group
    /// offers are taken, so unrelated parameters (`area`, `image`) and
    /// stale values are ignored.
    pub fn from_params(params: &QueryParams, groups: &[VariantGroup]) -> Self {
        let mut selection = Self::new();
        for (key, value) in params.iter() {
            let offered = groups
                .iter()
                .find(|g| g.name == key)
                .is_some_and(|g| g.option(value).is_some());
            if offered {
                selection.select(key, value);
            }
        }
        selection
    }

    /// Encode as query parameters, for links that keep the current choice.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        for (group, value) in self.iter() {
            params.insert(group, value);
        }
        params
    }
}

/// Base price plus the sum of deltas of every option the selection matches.
///
/// Unselected groups contribute nothing; there is no check that every
/// group has a choice.
pub fn total_price(base: Money, options: &[VariantOption], selection: &Selection) -> Money {
    base.saturating_add(
        options
            .iter()
            .filter(|o| selection.matches(o))
            .map(|o| o.price_delta)
            .sum::<Money>(),
    )
}

/// One matched option in a price breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceAdjustment {
    pub group: String,
    pub value: String,
    pub delta: Money,
}

/// How a displayed total was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Base price of the product.
    pub base: Money,
    /// Matched options, in option order.
    pub adjustments: Vec<PriceAdjustment>,
    /// Base plus every adjustment.
    pub total: Money,
}

impl PriceBreakdown {
    pub fn compute(base: Money, options: &[VariantOption], selection: &Selection) -> Self {
        let adjustments: Vec<PriceAdjustment> = options
            .iter()
            .filter(|o| selection.matches(o))
            .map(|o| PriceAdjustment {
                group: o.group.clone(),
                value: o.value.clone(),
                delta: o.price_delta,
            })
            .collect();
        let total = base.saturating_add(adjustments.iter().map(|a| a.delta).sum::<Money>());

        Self {
            base,
            adjustments,
            total,
        }
    }

    /// Whether any selected option changes the price.
    pub fn has_adjustments(&self) -> bool {
        self.adjustments.iter().any(|a| !a.delta.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::group_variants;

    fn sofa_options() -> Vec<VariantOption> {
        vec![
            VariantOption::new("v1", "Size", "2-Seater", 0),
            VariantOption::new("v2", "Size", "3-Seater", 1200),
            VariantOption::new("v3", "Size", "L-Shape", 2500),
            VariantOption::new("v4", "Color", "Ivory White", 0),
            VariantOption::new("v5", "Color", "Cognac Brown", 0),
        ]
    }

    #[test]
    fn test_empty_selection_is_base_price() {
        let total = total_price(Money::sar(8500), &sofa_options(), &Selection::new());
        assert_eq!(total, Money::sar(8500));
    }

    #[test]
    fn test_selected_delta_is_added() {
        let selection = Selection::new()
            .with("Size", "3-Seater")
            .with("Color", "Ivory White");
        let total = total_price(Money::sar(8500), &sofa_options(), &selection);
        assert_eq!(total, Money::sar(9700));
    }

    #[test]
    fn test_reselecting_replaces_choice() {
        let mut selection = Selection::new();
        selection.select("Size", "3-Seater");
        selection.select("Size", "L-Shape");
        assert_eq!(selection.len(), 1);
        assert_eq!(
            total_price(Money::sar(8500), &sofa_options(), &selection),
            Money::sar(11000)
        );
    }

    #[test]
    fn test_unknown_value_contributes_nothing() {
        let selection = Selection::new().with("Size", "King");
        assert_eq!(
            total_price(Money::sar(8500), &sofa_options(), &selection),
            Money::sar(8500)
        );
    }

    #[test]
    fn test_negative_delta() {
        let options = vec![
            VariantOption::new("c1", "Chairs", "4 Chairs", -1400),
            VariantOption::new("c2", "Chairs", "6 Chairs", 0),
        ];
        let selection = Selection::new().with("Chairs", "4 Chairs");
        assert_eq!(
            total_price(Money::sar(9800), &options, &selection),
            Money::sar(8400)
        );
    }

    #[test]
    fn test_total_clamps_oversized_base_price() {
        let base: Money = serde_json::from_str("1e30").unwrap();
        let options = vec![VariantOption::new("v1", "Size", "King", 1)];
        let selection = Selection::new().with("Size", "King");

        assert_eq!(total_price(base, &options, &selection), Money::sar(i64::MAX));
        let breakdown = PriceBreakdown::compute(base, &options, &selection);
        assert_eq!(breakdown.total, Money::sar(i64::MAX));
        assert!(!breakdown.total.is_negative());
    }

    #[test]
    fn test_summary() {
        assert_eq!(Selection::new().summary(), "Default");
        let selection = Selection::new()
            .with("Size", "3-Seater")
            .with("Color", "Ivory White");
        assert_eq!(selection.summary(), "Size: 3-Seater, Color: Ivory White");
    }

    #[test]
    fn test_from_params_ignores_unrelated_and_stale() {
        let groups = group_variants(&sofa_options());
        let params = QueryParams::parse("area=Jeddah&Color=Cognac+Brown&Size=King&image=2");
        let selection = Selection::from_params(&params, &groups);
        assert_eq!(selection.summary(), "Color: Cognac Brown");
    }

    #[test]
    fn test_params_round_trip() {
        let selection = Selection::new().with("Size", "L-Shape");
        let groups = group_variants(&sofa_options());
        assert_eq!(Selection::from_params(&selection.to_params(), &groups), selection);
    }

    #[test]
    fn test_breakdown_lists_matches() {
        let selection = Selection::new()
            .with("Color", "Cognac Brown")
            .with("Size", "3-Seater");
        let breakdown = PriceBreakdown::compute(Money::sar(8500), &sofa_options(), &selection);
        assert_eq!(breakdown.adjustments.len(), 2);
        assert_eq!(breakdown.adjustments[0].value, "3-Seater");
        assert_eq!(breakdown.total, Money::sar(9700));
        assert!(breakdown.has_adjustments());
    }
}
