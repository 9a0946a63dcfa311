//! End-to-end reads through a mocked table store.

use futures::executor::block_on;
use storee_commerce::demo::demo_products;
use storee_commerce::prelude::*;
use storee_core::{QueryParams, RequestId, SiteConfig};
use storee_data::{MockTransport, TableClient};
use storee_observability::StructuredLogger;

fn storefront(transport: MockTransport) -> Storefront<RemoteCatalog<MockTransport>> {
    let (logger, _) = StructuredLogger::capturing(RequestId::from_string("it"));
    Storefront::new(
        RemoteCatalog::new(TableClient::new("https://store.test", "anon", transport)),
        logger,
    )
}

#[test]
fn zero_rows_serves_demo_filtered_by_the_same_criteria() {
    let shop = storefront(MockTransport::new().respond("/products", 200, "[]"));
    let query = CatalogQuery::from_params(&QueryParams::parse(
        "category=bed&material=Oak+Wood&sort=name_asc",
    ));

    let listing = block_on(shop.list(&query));

    let expected: Vec<Product> = demo_products()
        .into_iter()
        .filter(|p| p.category == Category::Bed && p.material == "Oak Wood")
        .collect();
    assert!(listing.is_demo);
    assert_eq!(listing.products, expected);
    assert_eq!(listing.products[0].slug, "dune-platform-bed");
}

#[test]
fn failed_read_and_empty_read_give_the_same_listing() {
    let query = CatalogQuery::new()
        .with_category(Category::Sofa)
        .with_sort(SortOption::PriceDesc);

    let empty = block_on(storefront(MockTransport::new().respond("/products", 200, "[]")).list(&query));
    let failed = block_on(storefront(MockTransport::new().respond("/products", 503, "")).list(&query));

    assert_eq!(empty, failed);
    assert_eq!(empty.products[0].slug, "al-noor-sectional");
}

#[test]
fn offline_detail_page_prices_the_demo_variants() {
    let (logger, lines) = StructuredLogger::capturing(RequestId::from_string("it"));
    let shop = Storefront::new(OfflineCatalog, logger);

    let detail = block_on(shop.product("anything"));
    let groups = group_variants(&detail.variants);
    let selection = Selection::from_params(&QueryParams::parse("Size=L-Shape&Color=Charcoal+Grey"), &groups);

    assert_eq!(groups.len(), 2);
    assert_eq!(
        total_price(detail.product.price_sar, &detail.variants, &selection).display(),
        "11,000 SAR"
    );
    assert!(lines.lock().unwrap().iter().any(|l| l.contains("serving demo catalog")));
}

#[test]
fn contact_link_carries_the_form_verbatim() {
    let mut config = SiteConfig::default();
    config.whatsapp.number = "966512345678".to_string();
    let link = WhatsAppLink::from_config(&config);

    let contact = ContactRequest::new("Ali", "0500000000", "Hello");
    let message = contact.message(link.brand());
    let url = link.contact_url(&contact);

    assert!(message.contains("Ali"));
    assert!(message.contains("0500000000"));
    assert!(message.contains("Hello"));
    assert!(url.starts_with("https://wa.me/966512345678?text="));
    let text = url.split_once("?text=").map(|(_, t)| t).unwrap_or_default();
    assert_eq!(urlencoding::decode(text).unwrap(), message);
}

#[test]
fn order_link_from_a_remote_product() {
    let transport = MockTransport::new()
        .respond("product_variants", 200, r#"[
            {"id":"v1","product_id":"p9","variant_name":"Chairs","variant_value":"4 Chairs","price_delta":-1400},
            {"id":"v2","product_id":"p9","variant_name":"Chairs","variant_value":"6 Chairs","price_delta":0}
        ]"#)
        .respond("product_images", 200, r#"[{"id":"i1","product_id":"p9","url":"https://cdn.test/1.jpg","alt":null}]"#)
        .respond("/products", 200, r#"{"id":"p9","name":"Sultana Dining Set","slug":"sultana-dining-set","category":"dining","material":"Teak + Travertine","price_sar":9800,"is_featured":false}"#);
    let shop = storefront(transport);

    let detail = block_on(shop.product("sultana-dining-set"));
    let selection = Selection::new().with("Chairs", "4 Chairs");
    let order = OrderRequest::new(&detail.product.name, &detail.product.material, &selection, None);

    assert!(!detail.is_demo);
    assert_eq!(detail.images.len(), 1);
    assert_eq!(total_price(detail.product.price_sar, &detail.variants, &selection), Money::sar(8400));
    assert_eq!(
        order.message("Shahed Storee"),
        "Hello Shahed Storee, I want to order: Sultana Dining Set. Material: Teak + Travertine. \
         Variants: Chairs: 4 Chairs. Please confirm delivery to: Not specified."
    );
}
