//! Catalog listing: filters, sort order and their local application.

mod query;
mod sort;

pub use query::{materials, CatalogQuery, PRODUCTS_TABLE};
pub use sort::SortOption;
