//! Page assembly: which sections a route shows, in which order, and the
//! shell around them.

use chrono::Datelike;
use storee_sdk::storee_commerce::catalog::{group_variants, Category};
use storee_sdk::storee_commerce::content::{policy, BRAND};
use storee_sdk::storee_commerce::demo::demo_products;
use storee_sdk::storee_commerce::listing::{materials, CatalogQuery};
use storee_sdk::storee_commerce::pricing::{PriceBreakdown, Selection};
use storee_sdk::storee_commerce::store::CatalogSource;
use storee_sdk::storee_commerce::storefront::Storefront;
use storee_sdk::storee_commerce::whatsapp::{ContactRequest, OrderRequest, WhatsAppLink};
use storee_sdk::storee_commerce::CommerceError;
use storee_sdk::storee_core::{RequestContext, Route, SiteConfig};
use storee_sdk::storee_streaming::{HeadContent, Shell};

use crate::sections::*;
use crate::styles::STOREFRONT_STYLES;

/// Per-request site settings the renderers need.
#[derive(Debug, Clone)]
pub struct Site {
    pub link: WhatsAppLink,
    /// Year printed in the footer.
    pub year: i32,
}

impl Site {
    pub fn new(link: WhatsAppLink, year: i32) -> Self {
        Self { link, year }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(WhatsAppLink::from_config(config), chrono::Utc::now().year())
    }

    /// Configured store name, the same one the WhatsApp greeting uses.
    pub fn brand(&self) -> &str {
        self.link.brand()
    }

    fn title(&self, page: &str) -> String {
        format!("{} | {}", page, self.brand())
    }
}

/// A rendered page, ready to stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub title: String,
    /// Path highlighted in the navigation.
    pub nav_path: &'static str,
    /// Named sections in display order. Empty fragments are skipped
    /// when streaming.
    pub sections: Vec<(&'static str, String)>,
}

impl Page {
    fn new(title: impl Into<String>, nav_path: &'static str) -> Self {
        Self {
            status: 200,
            title: title.into(),
            nav_path,
            sections: Vec::new(),
        }
    }

    fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    fn section(mut self, name: &'static str, html: String) -> Self {
        self.sections.push((name, html));
        self
    }

    /// Sections with content, for the sink.
    pub fn visible_sections(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.sections
            .iter()
            .filter(|(_, html)| !html.is_empty())
            .map(|(name, html)| (*name, html.as_str()))
    }

    /// The frame around the sections: head, navigation and footer.
    pub fn shell(&self, site: &Site) -> Shell {
        Shell::new(
            HeadContent::new(self.title.as_str())
                .with_meta("viewport", "width=device-width, initial-scale=1")
                .with_meta("description", BRAND.sub_tagline)
                .with_style(STOREFRONT_STYLES),
        )
        .with_body_start(format!(
            "<body>\n{}",
            render_nav(self.nav_path, site.brand())
        ))
        .with_body_end(render_footer(site.year, site.brand(), &site.link.chat_url()))
    }

    /// The whole document at once.
    pub fn render(&self, site: &Site) -> String {
        self.shell(site)
            .render_page(self.visible_sections().map(|(_, html)| html))
    }
}

/// Build the page for a GET request.
pub async fn render_page<S: CatalogSource>(
    route: &Route,
    ctx: &RequestContext,
    shop: &Storefront<S>,
    site: &Site,
) -> Page {
    let params = &ctx.query;
    let chat_url = site.link.chat_url();

    match route {
        Route::Home => {
            let tab = params
                .get_non_empty("tab")
                .and_then(Category::from_key)
                .unwrap_or(Category::Sofa);
            let (featured, collection) = futures::join!(shop.featured(), shop.collection(tab));

            Page::new(format!("{} | {}", site.brand(), BRAND.tagline), "/")
                .section("hero", render_hero())
                .section("marquee", render_marquee())
                .section("featured", render_featured(&featured))
                .section("collections", render_collections(tab, &collection))
                .section("about", render_about_story())
                .section("quality", render_quality())
                .section("faq", render_faq_preview())
                .section("cta", render_cta_banner(&chat_url))
        }
        Route::Shop => {
            let query = CatalogQuery::from_params(params);
            let listing = shop.list(&query).await;
            let options = materials(&demo_products());

            Page::new(site.title("Shop"), "/shop")
                .section("shop-header", render_shop_header())
                .section(
                    "filters",
                    render_filters(&query, &options, listing.products.len()),
                )
                .section("results", render_shop_results(&listing))
        }
        Route::Product { slug } => {
            let detail = shop.product(slug).await;
            let product = &detail.product;

            let groups = group_variants(&detail.variants);
            let selection = Selection::from_params(params, &groups);
            let breakdown = PriceBreakdown::compute(product.price_sar, &detail.variants, &selection);
            let area = params.get_non_empty("area");
            let order = OrderRequest::new(&product.name, &product.material, &selection, area);
            let order_url = site.link.order_url(&order);

            let state = OrderState {
                groups: &groups,
                selection: &selection,
                breakdown: &breakdown,
                area,
                order_url: &order_url,
            };

            // Related products follow the requested slug, so a demo
            // fallback still hides the product it stands in for.
            let related = shop.related(slug, product.category).await;

            Page::new(site.title(&product.name), "/shop")
                .section("breadcrumb", render_breadcrumb(product))
                .section(
                    "gallery",
                    render_gallery(&product.slug, &product.name, &detail.images, params),
                )
                .section("product-info", render_product_info(product, &state))
                .section("related", render_related(&related))
        }
        Route::About => Page::new(site.title("About"), "/about")
            .section("about", render_about_page(&chat_url)),
        Route::Contact => contact_page(&ContactRequest::default(), None, site),
        Route::Faq => {
            Page::new(site.title("FAQ"), "/faq").section("faq", render_faq_page(&chat_url))
        }
        Route::Policies => {
            let active = policy(params.get("section").unwrap_or_default());
            Page::new(site.title(active.title), "/policies")
                .section("policies", render_policies(active.key))
        }
        Route::NotFound => Page::new(site.title("Not Found"), "")
            .with_status(404)
            .section("not-found", render_not_found(&ctx.path)),
    }
}

fn contact_page(form: &ContactRequest, error: Option<&str>, site: &Site) -> Page {
    Page::new(site.title("Contact"), "/contact").section(
        "contact",
        render_contact_page(form, error, &site.link.chat_url()),
    )
}

/// Result of posting the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Send the shopper to this WhatsApp link.
    Redirect(String),
    /// Show the form again with the problem.
    Invalid(Page),
}

/// Whether a `POST /contact` carries a body `submit_contact` can read.
///
/// The form posts `application/x-www-form-urlencoded`; a request with no
/// content type is read the same way.
pub fn accepts_form(ctx: &RequestContext) -> bool {
    match ctx.header("content-type") {
        None => true,
        Some(value) => value
            .split(';')
            .next()
            .map(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
            .unwrap_or(false),
    }
}

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Handle a `POST /contact` body.
pub fn submit_contact(body: &str, site: &Site) -> ContactOutcome {
    let form = ContactRequest::from_form(body);
    match form.validate() {
        Ok(()) => ContactOutcome::Redirect(site.link.contact_url(&form)),
        Err(e) => {
            let reason = match e {
                CommerceError::ValidationError(reason) => reason,
                other => other.to_string(),
            };
            ContactOutcome::Invalid(contact_page(&form, Some(&reason), site).with_status(422))
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use storee_sdk::storee_commerce::store::OfflineCatalog;
    use storee_sdk::storee_core::{Method, RequestId};
    use storee_sdk::storee_observability::StructuredLogger;

    use super::*;

    fn site() -> Site {
        Site::new(WhatsAppLink::new("966500000000", "Shahed Storee"), 2026)
    }

    fn offline() -> Storefront<OfflineCatalog> {
        let (logger, _) = StructuredLogger::capturing(RequestId::from_string("t"));
        Storefront::new(OfflineCatalog, logger)
    }

    fn page(path_with_query: &str) -> Page {
        let ctx = RequestContext::new(Method::Get, path_with_query);
        block_on(render_page(&Route::resolve(&ctx.path), &ctx, &offline(), &site()))
    }

    fn names(page: &Page) -> Vec<&'static str> {
        page.visible_sections().map(|(name, _)| name).collect()
    }

    #[test]
    fn test_home_sections_in_order() {
        let home = page("/?tab=bed");
        assert_eq!(
            names(&home),
            vec!["hero", "marquee", "featured", "collections", "about", "quality", "faq", "cta"]
        );
        let collections = &home.sections[3].1;
        assert!(collections.contains("Dune Platform Bed"));
    }

    #[test]
    fn test_shop_filters_demo_catalog() {
        let shop = page("/shop?category=dining&sort=price_desc");
        assert_eq!(shop.status, 200);
        let results = &shop.sections[2].1;
        assert!(results.contains("Majlis Round Table"));
        assert!(!results.contains("Sahara Modular Sofa"));
        let majlis = results.find("Majlis Round Table").unwrap_or(usize::MAX);
        let chairs = results.find("Breeze Dining Chairs").unwrap_or(0);
        assert!(majlis < chairs);
    }

    #[test]
    fn test_product_page_reflects_selection() {
        let product = page("/product/anything?Size=L-Shape&area=Jeddah");
        assert_eq!(product.title, "Sahara Modular Sofa | Shahed Storee");
        assert_eq!(names(&product), vec!["breadcrumb", "gallery", "product-info"]);

        let info = &product.sections[2].1;
        assert!(info.contains("11,000 SAR"));
        assert!(info.contains("Please%20confirm%20delivery%20to%3A%20Jeddah."));
        assert!(info.contains("Size%3A%20L-Shape"));
    }

    #[test]
    fn test_not_found_status() {
        let missing = page("/nope/deeper");
        assert_eq!(missing.status, 404);
        assert_eq!(names(&missing), vec!["not-found"]);
        assert!(missing.sections[0].1.contains("<code>/nope/deeper</code>"));
    }

    #[test]
    fn test_policies_section_param() {
        let policies = page("/policies?section=privacy");
        assert_eq!(policies.title, "Privacy Policy | Shahed Storee");
    }

    #[test]
    fn test_render_wraps_sections_in_shell() {
        let about = page("/about");
        let html = about.render(&site());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>About | Shahed Storee</title>"));
        assert!(html.contains(r#"<a href="/about" aria-current="page" class="active">About</a>"#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_configured_brand_reaches_every_page_part() {
        let mut config = SiteConfig::default();
        config.brand = "Acme Home".to_string();
        let site = Site::new(WhatsAppLink::from_config(&config), 2026);

        let ctx = RequestContext::new(Method::Get, "/about");
        let about = block_on(render_page(&Route::About, &ctx, &offline(), &site));
        assert_eq!(about.title, "About | Acme Home");

        let html = about.render(&site);
        assert!(html.contains("<title>About | Acme Home</title>"));
        assert!(html.contains(r#"<a class="brand" href="/">Acme Home</a>"#));
        assert!(html.contains("© 2026 Acme Home. All rights reserved."));

        let root = RequestContext::new(Method::Get, "/");
        let home = block_on(render_page(&Route::Home, &root, &offline(), &site));
        assert!(home.title.starts_with("Acme Home | "));
    }

    #[test]
    fn test_contact_post_content_type() {
        let post = |headers: &[(&str, &str)]| {
            RequestContext::new(Method::Post, "/contact").with_headers(headers.iter().copied())
        };
        assert!(accepts_form(&post(&[])));
        assert!(accepts_form(&post(&[(
            "Content-Type",
            "application/x-www-form-urlencoded; charset=UTF-8"
        )])));
        assert!(!accepts_form(&post(&[("content-type", "application/json")])));
        assert!(!accepts_form(&post(&[("content-type", "multipart/form-data; boundary=x")])));
    }

    #[test]
    fn test_contact_submission() {
        match submit_contact("name=Ali&phone=0500000000&message=Hello", &site()) {
            ContactOutcome::Redirect(url) => {
                assert!(url.starts_with("https://wa.me/966500000000?text=Hello%20Shahed%20Storee"))
            }
            other => panic!("expected redirect, got {:?}", other),
        }

        match submit_contact("name=Ali", &site()) {
            ContactOutcome::Invalid(page) => {
                assert_eq!(page.status, 422);
                assert!(page.sections[0].1.contains("missing phone, message"));
            }
            other => panic!("expected invalid form, got {:?}", other),
        }
    }
}
