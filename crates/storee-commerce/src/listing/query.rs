//! Catalog query: what the shop page asks for.

use crate::catalog::{Category, Product};
use crate::listing::SortOption;
use serde::{Deserialize, Serialize};
use storee_core::QueryParams;
use storee_data::TableQuery;

/// Collection holding product rows.
pub const PRODUCTS_TABLE: &str = "products";

/// Filters and sort order for a catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Only this category.
    pub category: Option<Category>,
    /// Only this exact material label.
    pub material: Option<String>,
    /// Sort order.
    pub sort: SortOption,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `category`, `material` and `sort` from request parameters.
    ///
    /// Empty values mean "unset". An unknown category key is ignored.
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            category: params.get_non_empty("category").and_then(Category::from_key),
            material: params.get_non_empty("material").map(str::to_string),
            sort: params
                .get("sort")
                .map(SortOption::parse)
                .unwrap_or_default(),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Whether any filter is set (sort does not count).
    pub fn is_filtered(&self) -> bool {
        self.category.is_some() || self.material.is_some()
    }

    /// The equality-filtered, ordered read against the products collection.
    pub fn to_table_query(&self) -> TableQuery {
        let mut query = TableQuery::from(PRODUCTS_TABLE);
        if let Some(category) = self.category {
            query = query.eq("category", category.key());
        }
        if let Some(material) = &self.material {
            query = query.eq("material", material);
        }
        let (column, ascending) = self.sort.remote_order();
        query.order(column, ascending)
    }

    /// Whether a product passes the filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.map_or(true, |c| product.category == c)
            && self
                .material
                .as_deref()
                .map_or(true, |m| product.material == m)
    }

    /// Filter and sort a local product list the way the remote read would.
    ///
    /// The sort is stable; `Default` keeps the input order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut list: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        if let Some(compare) = self.sort.compare() {
            list.sort_by(compare);
        }
        list
    }

    /// Encode as request parameters, dropping unset values.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(category) = self.category {
            params.insert("category", category.key());
        }
        if let Some(material) = &self.material {
            params.insert("material", material.as_str());
        }
        if self.sort != SortOption::Default {
            params.insert("sort", self.sort.as_param());
        }
        params
    }
}

/// Distinct material labels in first-seen order.
pub fn materials(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|m| *m == product.material) {
            seen.push(product.material.clone());
        }
    }
    seen
}
