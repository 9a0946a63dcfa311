//! Table query builder.

use std::fmt;

/// Comparison applied by a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Neq,
}

impl FilterOp {
    fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "eq",
            FilterOp::Neq => "neq",
        }
    }
}

/// A single column filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub op: FilterOp,
    pub value: String,
}

/// Sort order on one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub column: String,
    pub ascending: bool,
}

/// A read against one collection of the table store.
///
/// Renders to the REST form the store understands:
/// `/rest/v1/products?select=*&category=eq.sofa&order=price_sar.asc&limit=6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: String,
    select: String,
    filters: Vec<Filter>,
    order: Option<Ordering>,
    limit: Option<usize>,
    single: bool,
}

impl TableQuery {
    /// Start a query selecting every column of `table`.
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
            single: false,
        }
    }

    /// Restrict the selected columns (`"id,name"`).
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = columns.into();
        self
    }

    /// Keep rows where `column == value`.
    pub fn eq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            op: FilterOp::Eq,
            value: value.to_string(),
        });
        self
    }

    /// Keep rows where `column != value`.
    pub fn neq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            op: FilterOp::Neq,
            value: value.to_string(),
        });
        self
    }

    /// Order by one column. A later call replaces the earlier ordering.
    pub fn order(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order = Some(Ordering {
            column: column.into(),
            ascending,
        });
        self
    }

    /// Cap the number of rows returned.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Expect exactly one row, returned as a bare object.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Whether the read expects one bare object rather than an array.
    pub fn is_single(&self) -> bool {
        self.single
    }

    /// Render the path and query string, relative to the store's base URL.
    pub fn to_path(&self) -> String {
        let mut params = vec![format!("select={}", self.select)];

        for filter in &self.filters {
            params.push(format!(
                "{}={}.{}",
                urlencoding::encode(&filter.column),
                filter.op.as_str(),
                urlencoding::encode(&filter.value)
            ));
        }

        if let Some(order) = &self.order {
            params.push(format!(
                "order={}.{}",
                urlencoding::encode(&order.column),
                if order.ascending { "asc" } else { "desc" }
            ));
        }

        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }

        format!("/rest/v1/{}?{}", self.table, params.join("&"))
    }
}

impl fmt::Display for TableQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_select() {
        assert_eq!(
            TableQuery::from("products").to_path(),
            "/rest/v1/products?select=*"
        );
    }

    #[test]
    fn test_featured_query() {
        let q = TableQuery::from("products")
            .eq("is_featured", true)
            .limit(6);
        assert_eq!(
            q.to_path(),
            "/rest/v1/products?select=*&is_featured=eq.true&limit=6"
        );
    }

    #[test]
    fn test_filters_are_encoded() {
        let q = TableQuery::from("products")
            .eq("category", "sofa")
            .eq("material", "MDF + Leather")
            .order("price_sar", true);
        assert_eq!(
            q.to_path(),
            "/rest/v1/products?select=*&category=eq.sofa&material=eq.MDF%20%2B%20Leather&order=price_sar.asc"
        );
    }

    #[test]
    fn test_related_query() {
        let q = TableQuery::from("products")
            .eq("category", "bed")
            .neq("slug", "dune-platform-bed")
            .limit(4);
        assert!(q
            .to_path()
            .ends_with("category=eq.bed&slug=neq.dune-platform-bed&limit=4"));
    }

    #[test]
    fn test_later_order_replaces_earlier() {
        let q = TableQuery::from("products")
            .order("name", true)
            .order("created_at", false);
        let path = q.to_path();
        assert!(path.ends_with("order=created_at.desc"));
        assert!(!path.contains("name.asc"));
    }

    #[test]
    fn test_single_does_not_change_path() {
        let q = TableQuery::from("products").eq("slug", "x").single();
        assert!(q.is_single());
        assert_eq!(q.to_path(), "/rest/v1/products?select=*&slug=eq.x");
    }
}
