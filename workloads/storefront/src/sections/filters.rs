//! Shop page: header, filters bar and results.

use storee_sdk::storee_commerce::catalog::Category;
use storee_sdk::storee_commerce::listing::{CatalogQuery, SortOption};
use storee_sdk::storee_commerce::storefront::Listing;
use storee_sdk::storee_streaming::escape_html;

use super::card::render_product_grid;

pub fn render_shop_header() -> String {
    r#"<section class="page-header" data-section="shop-header">
    <p class="breadcrumb"><a href="/">Home</a><span aria-hidden="true">›</span>Shop</p>
    <h1>Our Collection</h1>
    <p class="lead">Sofas, beds and dining pieces, curated for Saudi homes.</p>
</section>"#
        .to_string()
}

/// Link to the shop with `query` plus one change applied.
fn shop_href(query: &CatalogQuery) -> String {
    let params = query.to_params();
    if params.is_empty() {
        "/shop".to_string()
    } else {
        format!("/shop?{}", params.to_query_string())
    }
}

/// Category pills are links; material and sort are a GET form.
pub fn render_filters(query: &CatalogQuery, materials: &[String], count: usize) -> String {
    let mut pills = String::new();
    let all = CatalogQuery {
        category: None,
        ..query.clone()
    };
    pills.push_str(&pill("All", &shop_href(&all), query.category.is_none()));
    for category in Category::ALL {
        let target = query.clone().with_category(category);
        pills.push_str(&pill(
            category.label(),
            &shop_href(&target),
            query.category == Some(category),
        ));
    }

    let selected_material = query.material.as_deref().unwrap_or("");
    let mut material_options = format!(
        r#"<option value=""{}>All Materials</option>"#,
        selected_attr(selected_material.is_empty())
    );
    for material in materials {
        material_options.push_str(&format!(
            r#"<option value="{0}"{1}>{0}</option>"#,
            escape_html(material),
            selected_attr(material == selected_material)
        ));
    }

    let sort_options: String = SortOption::ALL
        .iter()
        .map(|sort| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                sort.as_param(),
                selected_attr(*sort == query.sort),
                escape_html(sort.display_name())
            )
        })
        .collect();

    let category_field = query
        .category
        .map(|c| format!(r#"<input type="hidden" name="category" value="{}">"#, c.key()))
        .unwrap_or_default();

    format!(
        r#"<section class="filters" data-section="filters">
    <div class="pills" role="group" aria-label="Filter by category">{pills}</div>
    <form class="filter-form" method="get" action="/shop">
        {category_field}
        <label for="material-filter" class="sr-only">Filter by material</label>
        <select id="material-filter" name="material" onchange="this.form.submit()">{material_options}</select>
        <label for="sort-select" class="sr-only">Sort by</label>
        <select id="sort-select" name="sort" onchange="this.form.submit()">{sort_options}</select>
        <noscript><button type="submit" class="btn btn-small">Apply</button></noscript>
        <span class="count">{count} pieces</span>
    </form>
</section>"#,
        pills = pills,
        category_field = category_field,
        material_options = material_options,
        sort_options = sort_options,
        count = count,
    )
}

fn pill(label: &str, href: &str, active: bool) -> String {
    format!(
        r#"<a class="pill{}" href="{}" aria-pressed="{}">{}</a>"#,
        if active { " active" } else { "" },
        escape_html(href),
        active,
        escape_html(label)
    )
}

fn selected_attr(selected: bool) -> &'static str {
    if selected {
        " selected"
    } else {
        ""
    }
}

/// The grid, with the demo badge when the listing is not from the store,
/// or an empty state with a reset link.
pub fn render_shop_results(listing: &Listing) -> String {
    if listing.products.is_empty() {
        return r#"<section class="results empty" data-section="results">
    <h3>No pieces found</h3>
    <p>Try a different category or material.</p>
    <a class="btn btn-outline" href="/shop">Clear filters</a>
</section>"#
            .to_string();
    }

    let badge = if listing.is_demo {
        r#"<p class="demo-badge"><span class="badge">Demo Mode – Connect the store to load real products</span></p>"#
    } else {
        ""
    };

    format!(
        r#"<section class="results" data-section="results">{}{}</section>"#,
        badge,
        render_product_grid(&listing.products)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storee_sdk::storee_commerce::demo::demo_products;
    use storee_sdk::storee_commerce::listing::materials;

    #[test]
    fn test_filters_keep_other_params_in_pills() {
        let query = CatalogQuery::new()
            .with_category(Category::Bed)
            .with_sort(SortOption::PriceAsc);
        let html = render_filters(&query, &materials(&demo_products()), 5);

        assert!(html.contains(r#"<a class="pill" href="/shop?sort=price_asc" aria-pressed="false">All</a>"#));
        assert!(html.contains(r#"<a class="pill active" href="/shop?category=bed&amp;sort=price_asc" aria-pressed="true">Beds</a>"#));
        assert!(html.contains(r#"<option value="price_asc" selected>Price: Low to High</option>"#));
        assert!(html.contains(r#"<input type="hidden" name="category" value="bed">"#));
        assert!(html.contains("5 pieces"));
    }

    #[test]
    fn test_material_select() {
        let query = CatalogQuery::new().with_material("MDF + Leather");
        let html = render_filters(&query, &materials(&demo_products()), 1);
        assert!(html.contains(r#"<option value="">All Materials</option>"#));
        assert!(html.contains(r#"<option value="MDF + Leather" selected>MDF + Leather</option>"#));
    }

    #[test]
    fn test_results_states() {
        let empty = Listing { products: vec![], is_demo: true };
        assert!(render_shop_results(&empty).contains("Clear filters"));

        let demo = Listing { products: demo_products(), is_demo: true };
        let html = render_shop_results(&demo);
        assert!(html.contains("Demo Mode"));
        assert_eq!(html.matches("class=\"product-card\"").count(), 15);

        let live = Listing { products: demo_products(), is_demo: false };
        assert!(!render_shop_results(&live).contains("Demo Mode"));
    }
}
