use storee_sdk::storee_commerce::catalog::Product;

use super::card::render_product_grid;

/// "You may also like". Empty when there is nothing to show, so the
/// section is left out.
pub fn render_related(products: &[Product]) -> String {
    if products.is_empty() {
        return String::new();
    }
    format!(
        r#"<section class="related" data-section="related">
    <h2>You May Also Like</h2>
    {}
</section>"#,
        render_product_grid(products)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storee_sdk::storee_commerce::demo::demo_products;

    #[test]
    fn test_related_hidden_when_empty() {
        assert_eq!(render_related(&[]), "");
    }

    #[test]
    fn test_related_renders_cards() {
        let products: Vec<Product> = demo_products().into_iter().take(2).collect();
        let html = render_related(&products);
        assert!(html.contains("You May Also Like"));
        assert!(html.contains(&products[1].name));
    }
}
