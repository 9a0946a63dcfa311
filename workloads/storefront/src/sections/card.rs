//! Product cards and grids.

use storee_sdk::storee_commerce::catalog::{placeholder_tone, Product};
use storee_sdk::storee_commerce::demo::product_image_path;
use storee_sdk::storee_streaming::escape_html;

/// One product tile linking to its detail page.
///
/// Shows the bundled photo when the slug has one, otherwise a tinted
/// placeholder with the product's initial.
pub fn render_product_card(product: &Product) -> String {
    let name = escape_html(&product.name);
    let price = product.price_sar.display();

    let image = match product_image_path(&product.slug) {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" loading="lazy" class="card-image">"#,
            src, name
        ),
        None => format!(
            r#"<div class="card-image placeholder tone-{}"><span>{}</span></div>"#,
            placeholder_tone(&product.id),
            escape_html(&product.initial())
        ),
    };

    let badge = if product.is_featured {
        r#"<span class="badge badge-gold">Featured</span>"#
    } else {
        ""
    };

    format!(
        r#"<a class="product-card" href="/product/{slug}" aria-label="View {name} – {price}">
    <div class="card-media">{image}{badge}</div>
    <div class="card-body">
        <p class="card-category">{category}</p>
        <h3 class="card-name">{name}</h3>
        <p class="card-material">{material}</p>
        <p class="card-price">{price}</p>
    </div>
</a>"#,
        slug = escape_html(&product.slug),
        name = name,
        price = price,
        image = image,
        badge = badge,
        category = product.category.label(),
        material = escape_html(&product.material),
    )
}

/// Cards in a responsive grid.
pub fn render_product_grid(products: &[Product]) -> String {
    let cards: String = products.iter().map(render_product_card).collect();
    format!(r#"<div class="product-grid">{}</div>"#, cards)
}
