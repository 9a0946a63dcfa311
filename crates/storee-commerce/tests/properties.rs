//! Property tests for pricing and listing order.

use proptest::prelude::*;
use storee_commerce::catalog::{Category, Product, VariantOption};
use storee_commerce::listing::{CatalogQuery, SortOption};
use storee_commerce::money::Money;
use storee_commerce::pricing::{total_price, PriceBreakdown, Selection};
use storee_commerce::ProductId;

const GROUPS: [&str; 3] = ["Size", "Color", "Chairs"];
const VALUES: [&str; 4] = ["A", "B", "C", "D"];

fn option_strategy() -> impl Strategy<Value = (usize, usize, i64)> {
    (0..GROUPS.len(), 0..VALUES.len(), -5_000i64..5_000)
}

fn product_strategy() -> impl Strategy<Value = (String, i64, usize)> {
    ("[A-Za-z][A-Za-z ]{0,15}", 0i64..50_000, 0..3usize)
}

fn build_options(raw: &[(usize, usize, i64)]) -> Vec<VariantOption> {
    raw.iter()
        .enumerate()
        .map(|(i, &(g, v, delta))| VariantOption::new(format!("v{}", i), GROUPS[g], VALUES[v], delta))
        .collect()
}

fn build_products(raw: &[(String, i64, usize)]) -> Vec<Product> {
    raw.iter()
        .enumerate()
        .map(|(i, (name, price, cat))| Product {
            id: ProductId::new(format!("p{}", i)),
            name: name.clone(),
            slug: format!("p-{}", i),
            category: Category::ALL[*cat],
            material: "Oak".to_string(),
            description: None,
            price_sar: Money::sar(*price),
            is_featured: false,
            created_at: None,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    /// The total is the base plus the deltas of exactly the matched options.
    #[test]
    fn total_is_base_plus_matched_deltas(
        base in 0i64..100_000,
        raw in prop::collection::vec(option_strategy(), 0..12),
        picks in prop::collection::vec((0..GROUPS.len(), 0..VALUES.len()), 0..5),
    ) {
        let options = build_options(&raw);
        let mut selection = Selection::new();
        for (g, v) in &picks {
            selection.select(GROUPS[*g], VALUES[*v]);
        }

        let expected: i64 = base + options
            .iter()
            .filter(|o| selection.get(&o.group) == Some(o.value.as_str()))
            .map(|o| o.price_delta.amount)
            .sum::<i64>();

        let total = total_price(Money::sar(base), &options, &selection);
        prop_assert_eq!(total, Money::sar(expected));
        prop_assert_eq!(PriceBreakdown::compute(Money::sar(base), &options, &selection).total, total);
    }

    /// Nothing selected means the base price.
    #[test]
    fn empty_selection_is_base(
        base in 0i64..100_000,
        raw in prop::collection::vec(option_strategy(), 0..12),
    ) {
        let options = build_options(&raw);
        prop_assert_eq!(total_price(Money::sar(base), &options, &Selection::new()), Money::sar(base));
    }

    #[test]
    fn price_asc_is_non_decreasing(raw in prop::collection::vec(product_strategy(), 0..20)) {
        let list = CatalogQuery::new()
            .with_sort(SortOption::PriceAsc)
            .apply(&build_products(&raw));
        for pair in list.windows(2) {
            prop_assert!(pair[0].price_sar <= pair[1].price_sar);
        }
    }

    #[test]
    fn price_desc_is_non_increasing(raw in prop::collection::vec(product_strategy(), 0..20)) {
        let list = CatalogQuery::new()
            .with_sort(SortOption::PriceDesc)
            .apply(&build_products(&raw));
        for pair in list.windows(2) {
            prop_assert!(pair[0].price_sar >= pair[1].price_sar);
        }
    }

    #[test]
    fn name_asc_is_non_decreasing(raw in prop::collection::vec(product_strategy(), 0..20)) {
        let list = CatalogQuery::new()
            .with_sort(SortOption::NameAsc)
            .apply(&build_products(&raw));
        for pair in list.windows(2) {
            prop_assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
        }
    }

    /// Filtering keeps exactly the matching products, whatever the sort.
    #[test]
    fn filter_keeps_only_matches(
        raw in prop::collection::vec(product_strategy(), 0..20),
        cat in 0..3usize,
        sort in prop::sample::select(SortOption::ALL.to_vec()),
    ) {
        let products = build_products(&raw);
        let category = Category::ALL[cat];
        let list = CatalogQuery::new().with_category(category).with_sort(sort).apply(&products);

        prop_assert_eq!(list.len(), products.iter().filter(|p| p.category == category).count());
        prop_assert!(list.iter().all(|p| p.category == category));
    }
}
