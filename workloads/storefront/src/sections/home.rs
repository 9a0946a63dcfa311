//! Home page sections.

use storee_sdk::storee_commerce::catalog::Category;
use storee_sdk::storee_commerce::content::{
    faq_preview, ABOUT_SECTION, ABOUT_STATS, BRAND, COLLECTIONS_SECTION, COLLECTION_TABS,
    CTA_BANNER, FEATURED_CTA, FEATURED_SECTION, HERO, MARQUEE_ITEMS, QUALITY_PILLARS,
    QUALITY_SECTION,
};
use storee_sdk::storee_commerce::storefront::Listing;
use storee_sdk::storee_streaming::escape_html;

use super::card::render_product_grid;
use super::faq::render_faq_items;

pub fn render_hero() -> String {
    let badges: String = HERO
        .badges
        .iter()
        .map(|b| format!(r#"<li class="badge">{}</li>"#, escape_html(b)))
        .collect();

    format!(
        r#"<section class="hero" data-section="hero">
    <h1>{line1}<br>{line2}</h1>
    <p class="lead">{sub}</p>
    <div class="hero-actions">
        <a class="btn btn-gold" href="{primary_href}">{primary}</a>
        <a class="btn btn-outline" href="{secondary_href}">{secondary}</a>
    </div>
    <ul class="hero-badges" role="list">{badges}</ul>
</section>"#,
        line1 = escape_html(HERO.headline[0]),
        line2 = escape_html(HERO.headline[1]),
        sub = escape_html(BRAND.sub_tagline),
        primary_href = HERO.primary.href,
        primary = escape_html(HERO.primary.label),
        secondary_href = HERO.secondary.href,
        secondary = escape_html(HERO.secondary.label),
        badges = badges,
    )
}

pub fn render_marquee() -> String {
    let items: String = MARQUEE_ITEMS
        .iter()
        .map(|item| format!("<span>{}</span>", item))
        .collect::<Vec<_>>()
        .join("<span aria-hidden=\"true\">✦</span>");
    format!(
        r#"<div class="marquee" data-section="marquee" aria-hidden="true">{}</div>"#,
        items
    )
}

pub fn render_featured(listing: &Listing) -> String {
    format!(
        r#"<section class="featured" data-section="featured">
    <p class="eyebrow">{eyebrow}</p>
    <h2>{headline}</h2>
    <p>{description}</p>
    {grid}
    <a class="btn btn-outline" href="{cta_href}">{cta}</a>
</section>"#,
        eyebrow = escape_html(FEATURED_SECTION.eyebrow),
        headline = escape_html(FEATURED_SECTION.headline),
        description = escape_html(FEATURED_SECTION.description),
        grid = render_product_grid(&listing.products),
        cta_href = FEATURED_CTA.href,
        cta = escape_html(FEATURED_CTA.label),
    )
}

/// Collection tabs are links (`?tab=bed`); the active tab's products follow.
pub fn render_collections(active: Category, listing: &Listing) -> String {
    let tabs: String = COLLECTION_TABS
        .iter()
        .map(|tab| {
            let selected = *tab == active;
            format!(
                r#"<a role="tab" aria-selected="{}" class="tab{}" href="/?tab={}#collections">{}</a>"#,
                selected,
                if selected { " active" } else { "" },
                tab.key(),
                tab.label()
            )
        })
        .collect();

    format!(
        r#"<section class="collections" id="collections" data-section="collections">
    <p class="eyebrow">{eyebrow}</p>
    <h2>{headline}</h2>
    <div class="tabs" role="tablist">{tabs}</div>
    {grid}
    <a class="btn btn-outline" href="/shop?category={key}">View all {label}</a>
</section>"#,
        eyebrow = escape_html(COLLECTIONS_SECTION.eyebrow),
        headline = escape_html(COLLECTIONS_SECTION.headline),
        tabs = tabs,
        grid = render_product_grid(&listing.products),
        key = active.key(),
        label = active.label(),
    )
}

pub fn render_about_story() -> String {
    let paragraphs: String = ABOUT_SECTION
        .description
        .split("\n\n")
        .map(|p| format!("<p>{}</p>", escape_html(p)))
        .collect();
    let stats: String = ABOUT_STATS
        .iter()
        .map(|s| {
            format!(
                r#"<div class="stat"><strong>{}</strong><span>{}</span></div>"#,
                escape_html(s.value),
                escape_html(s.label)
            )
        })
        .collect();

    format!(
        r#"<section class="story" data-section="story">
    <p class="eyebrow">{}</p>
    <h2>{}</h2>
    {}
    <div class="stats">{}</div>
    <a class="btn btn-outline" href="/about">Our Story</a>
</section>"#,
        escape_html(ABOUT_SECTION.eyebrow),
        escape_html(ABOUT_SECTION.headline),
        paragraphs,
        stats
    )
}

pub fn render_quality() -> String {
    let pillars: String = QUALITY_PILLARS
        .iter()
        .map(|p| {
            format!(
                r#"<div class="card"><span class="icon" aria-hidden="true">{}</span><h3>{}</h3><p>{}</p></div>"#,
                p.icon,
                escape_html(p.title),
                escape_html(p.description)
            )
        })
        .collect();

    format!(
        r#"<section class="quality" data-section="quality">
    <p class="eyebrow">{}</p>
    <h2>{}</h2>
    <p>{}</p>
    <div class="card-row">{}</div>
</section>"#,
        escape_html(QUALITY_SECTION.eyebrow),
        escape_html(QUALITY_SECTION.headline),
        escape_html(QUALITY_SECTION.description),
        pillars
    )
}

pub fn render_faq_preview() -> String {
    format!(
        r#"<section class="faq-preview" data-section="faq-preview">
    <p class="eyebrow">FAQ</p>
    <h2>Questions, answered</h2>
    {}
    <a class="btn btn-outline" href="/faq">See all questions</a>
</section>"#,
        render_faq_items(faq_preview())
    )
}

/// Closing banner; its button opens a chat.
pub fn render_cta_banner(chat_url: &str) -> String {
    format!(
        r#"<section class="cta-banner" data-section="cta">
    <h2>{}</h2>
    <p>{}</p>
    <a class="btn btn-whatsapp" href="{}" target="_blank" rel="noopener noreferrer">{}</a>
</section>"#,
        escape_html(CTA_BANNER.headline),
        escape_html(CTA_BANNER.subheadline),
        escape_html(chat_url),
        escape_html(CTA_BANNER.label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storee_sdk::storee_commerce::demo::demo_products;

    #[test]
    fn test_collections_marks_active_tab() {
        let listing = Listing {
            products: demo_products().into_iter().filter(|p| p.category == Category::Bed).take(4).collect(),
            is_demo: true,
        };
        let html = render_collections(Category::Bed, &listing);
        assert!(html.contains(r#"aria-selected="true" class="tab active" href="/?tab=bed#collections">Beds</a>"#));
        assert!(html.contains(r#"aria-selected="false" class="tab" href="/?tab=sofa#collections">Sofas</a>"#));
        assert_eq!(html.matches("class=\"product-card\"").count(), 4);
        assert!(html.contains("/shop?category=bed"));
    }

    #[test]
    fn test_faq_preview_has_four_questions() {
        assert_eq!(render_faq_preview().matches("<details").count(), 4);
    }

    #[test]
    fn test_hero_headline_lines() {
        assert!(render_hero().contains("Timeless Furniture,<br>Crafted for Modern Living"));
    }
}
