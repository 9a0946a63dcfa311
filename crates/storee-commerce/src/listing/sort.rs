//! Sort options for the catalog.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options offered on the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Newest first remotely; listing order locally.
    #[default]
    Default,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Name A-Z.
    NameAsc,
}

impl SortOption {
    /// Options in the order the sort menu lists them.
    pub const ALL: [SortOption; 4] = [
        SortOption::Default,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
    ];

    /// Parse a `sort` parameter. Anything unrecognised is `Default`.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "price_asc" => SortOption::PriceAsc,
            "price_desc" => SortOption::PriceDesc,
            "name_asc" => SortOption::NameAsc,
            _ => SortOption::Default,
        }
    }

    /// Value of the `sort` parameter; empty for `Default`.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOption::Default => "",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::NameAsc => "name_asc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Default => "Default",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
        }
    }

    /// Column and direction for the remote read.
    pub fn remote_order(&self) -> (&'static str, bool) {
        match self {
            SortOption::Default => ("created_at", false),
            SortOption::PriceAsc => ("price_sar", true),
            SortOption::PriceDesc => ("price_sar", false),
            SortOption::NameAsc => ("name", true),
        }
    }

    /// Comparator for local sorting. `None` keeps the input order.
    pub fn compare(&self) -> Option<fn(&Product, &Product) -> Ordering> {
        match self {
            SortOption::Default => None,
            SortOption::PriceAsc => Some(compare_price_asc),
            SortOption::PriceDesc => Some(compare_price_desc),
            SortOption::NameAsc => Some(compare_names),
        }
    }
}

fn compare_price_asc(a: &Product, b: &Product) -> Ordering {
    a.price_sar.cmp(&b.price_sar)
}

fn compare_price_desc(a: &Product, b: &Product) -> Ordering {
    b.price_sar.cmp(&a.price_sar)
}

/// Case-insensitive name order, ties broken by the exact name.
fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}
