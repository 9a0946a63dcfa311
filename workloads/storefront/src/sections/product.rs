//! Product page: breadcrumb, details, price and the order form.

use storee_sdk::storee_commerce::catalog::{Product, VariantGroup};
use storee_sdk::storee_commerce::content::SAUDI_AREAS;
use storee_sdk::storee_commerce::pricing::{PriceBreakdown, Selection};
use storee_sdk::storee_streaming::escape_html;

use super::variants::render_variant_selector;

pub fn render_breadcrumb(product: &Product) -> String {
    format!(
        r#"<nav class="breadcrumb" aria-label="Breadcrumb" data-section="breadcrumb">
    <a href="/">Home</a><span aria-hidden="true">›</span>
    <a href="/shop">Shop</a><span aria-hidden="true">›</span>
    <a href="/shop?category={key}">{label}</a><span aria-hidden="true">›</span>
    <span aria-current="page">{name}</span>
</nav>"#,
        key = product.category.key(),
        label = product.category.label(),
        name = escape_html(&product.name),
    )
}

/// What the shopper has chosen on this page.
pub struct OrderState<'a> {
    pub groups: &'a [VariantGroup],
    pub selection: &'a Selection,
    pub breakdown: &'a PriceBreakdown,
    pub area: Option<&'a str>,
    pub order_url: &'a str,
}

/// Name, price and the GET form carrying variant and area choices.
///
/// The displayed price is the breakdown total, and the order button links
/// to the chat with the current choices filled in.
pub fn render_product_info(product: &Product, state: &OrderState<'_>) -> String {
    let featured = if product.is_featured {
        r#"<span class="badge badge-gold">Featured</span>"#
    } else {
        ""
    };

    let description = product
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| format!(r#"<p class="description">{}</p>"#, escape_html(d)))
        .unwrap_or_default();

    let adjustments = if state.breakdown.has_adjustments() {
        let rows: String = state
            .breakdown
            .adjustments
            .iter()
            .filter(|a| !a.delta.is_zero())
            .map(|a| {
                format!(
                    "<li>{}: {} <span>{}</span></li>",
                    escape_html(&a.group),
                    escape_html(&a.value),
                    escape_html(&a.delta.delta_label())
                )
            })
            .collect();
        format!(
            r#"<ul class="price-breakdown"><li>Base <span>{}</span></li>{}</ul>"#,
            state.breakdown.base.display(),
            rows
        )
    } else {
        String::new()
    };

    let chosen_area = state.area.unwrap_or("");
    let mut areas = format!(
        r#"<option value=""{}>Select your city</option>"#,
        if chosen_area.is_empty() { " selected" } else { "" }
    );
    for area in SAUDI_AREAS {
        areas.push_str(&format!(
            r#"<option value="{0}"{1}>{0}</option>"#,
            escape_html(area),
            if area == chosen_area { " selected" } else { "" }
        ));
    }

    format!(
        r#"<div class="product-info" data-section="product-info">
    <div class="badges"><span class="badge">{category}</span>{featured}</div>
    <h1>{name}</h1>
    <p class="material">{material}</p>
    <p class="price" aria-live="polite">{total}</p>
    {adjustments}
    {description}
    <form class="order-form" method="get" action="/product/{slug}">
        {variants}
        <label for="area-selector">Delivery city</label>
        <select id="area-selector" name="area" onchange="this.form.submit()">{areas}</select>
        <p class="hint">Delivery across the Kingdom, confirmed on WhatsApp.</p>
        <noscript><button type="submit" class="btn btn-outline">Update price</button></noscript>
    </form>
    <a class="btn btn-whatsapp btn-block" href="{order_url}" target="_blank" rel="noopener noreferrer" aria-label="Order {name} on WhatsApp">Order on WhatsApp</a>
    <p class="hint">Your order is confirmed by our team on WhatsApp.</p>
</div>"#,
        category = product.category.label(),
        featured = featured,
        name = escape_html(&product.name),
        material = escape_html(&product.material),
        total = state.breakdown.total.display(),
        adjustments = adjustments,
        description = description,
        slug = escape_html(&product.slug),
        variants = render_variant_selector(state.groups, state.selection),
        areas = areas,
        order_url = escape_html(state.order_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storee_sdk::storee_commerce::catalog::group_variants;
    use storee_sdk::storee_commerce::demo::{demo_detail_product, demo_variants};

    #[test]
    fn test_info_shows_total_and_area() {
        let product = demo_detail_product();
        let variants = demo_variants();
        let groups = group_variants(&variants);
        let selection = Selection::new().with("Size", "3-Seater");
        let breakdown = PriceBreakdown::compute(product.price_sar, &variants, &selection);
        let state = OrderState {
            groups: &groups,
            selection: &selection,
            breakdown: &breakdown,
            area: Some("Jeddah"),
            order_url: "https://wa.me/1?text=a&b",
        };

        let html = render_product_info(&product, &state);
        assert!(html.contains(r#"<p class="price" aria-live="polite">9,700 SAR</p>"#));
        assert!(html.contains("<li>Base <span>8,500 SAR</span></li>"));
        assert!(html.contains(r#"<option value="Jeddah" selected>Jeddah</option>"#));
        assert!(html.contains(r#"href="https://wa.me/1?text=a&amp;b""#));
        assert!(html.contains(r#"action="/product/sahara-modular-sofa""#));
    }

    #[test]
    fn test_breadcrumb_links_category() {
        let html = render_breadcrumb(&demo_detail_product());
        assert!(html.contains(r#"<a href="/shop?category=sofa">Sofas</a>"#));
        assert!(html.contains("Sahara Modular Sofa"));
    }
}
