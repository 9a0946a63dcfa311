//! Navigation, footer and the floating chat button.

use storee_sdk::storee_commerce::content::{
    copyright, BRAND, FOOTER_DESCRIPTION, FOOTER_SECTIONS, NAV_CTA, NAV_LINKS, SOCIAL_LINKS,
};
use storee_sdk::storee_streaming::escape_html;

/// Top navigation. `active` is the path of the current page.
pub fn render_nav(active: &str, brand: &str) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|link| {
            let current = if link.href == active {
                r#" aria-current="page" class="active""#
            } else {
                ""
            };
            format!(
                r#"<li><a href="{}"{}>{}</a></li>"#,
                link.href,
                current,
                escape_html(link.label)
            )
        })
        .collect();

    format!(
        r#"<header class="site-header">
    <nav class="site-nav" aria-label="Main">
        <a class="brand" href="/">{brand}</a>
        <ul class="nav-links" role="list">{links}</ul>
        <a class="btn btn-gold" href="{cta_href}">{cta}</a>
    </nav>
</header>
<main class="page">
"#,
        brand = escape_html(brand),
        links = links,
        cta_href = NAV_CTA.href,
        cta = escape_html(NAV_CTA.label),
    )
}

/// Site footer and closing tags.
pub fn render_footer(year: i32, brand: &str, chat_url: &str) -> String {
    let sections: String = FOOTER_SECTIONS
        .iter()
        .map(|section| {
            let links: String = section
                .links
                .iter()
                .map(|l| format!(r#"<li><a href="{}">{}</a></li>"#, escape_html(l.href), escape_html(l.label)))
                .collect();
            format!(
                r#"<div class="footer-col"><h4>{}</h4><ul role="list">{}</ul></div>"#,
                escape_html(section.title),
                links
            )
        })
        .collect();

    let social: String = SOCIAL_LINKS
        .iter()
        .map(|l| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                escape_html(l.href),
                escape_html(l.label)
            )
        })
        .collect::<Vec<_>>()
        .join(" · ");

    format!(
        r#"</main>
<footer class="site-footer">
    <div class="footer-grid">
        <div class="footer-col">
            <p class="brand">{brand}</p>
            <p>{description}</p>
            <p class="social">{social}</p>
        </div>
        {sections}
        <div class="footer-col">
            <h4>Contact</h4>
            <p>{address}</p>
            <p>{phone}</p>
            <p><a href="mailto:{email}">{email}</a></p>
        </div>
    </div>
    <p class="copyright">{copyright}</p>
</footer>
{floating}
</body>
</html>"#,
        brand = escape_html(brand),
        description = escape_html(FOOTER_DESCRIPTION),
        social = social,
        sections = sections,
        address = escape_html(BRAND.address),
        phone = escape_html(BRAND.phone),
        email = escape_html(BRAND.email),
        copyright = escape_html(&copyright(year, brand)),
        floating = render_floating_whatsapp(chat_url),
    )
}

/// Chat button pinned to the corner of every page.
pub fn render_floating_whatsapp(chat_url: &str) -> String {
    format!(
        r#"<a class="floating-whatsapp" href="{}" target="_blank" rel="noopener noreferrer" aria-label="Chat on WhatsApp">Chat with us</a>"#,
        escape_html(chat_url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_marks_active_link() {
        let html = render_nav("/shop", "Shahed Storee");
        assert!(html.contains(r#"<a href="/shop" aria-current="page" class="active">Shop</a>"#));
        assert!(html.contains(r#"<a href="/about">About</a>"#));
    }

    #[test]
    fn test_footer_links_and_chat() {
        let html = render_footer(2026, "Shahed Storee", "https://wa.me/966500000000");
        assert!(html.contains("/policies?section=returns#returns"));
        assert!(html.contains("Terms &amp; Conditions"));
        assert!(html.contains("© 2026 Shahed Storee. All rights reserved."));
        assert!(html.contains(r#"class="floating-whatsapp" href="https://wa.me/966500000000""#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_brand_is_configurable() {
        let nav = render_nav("/", "Acme & Sons");
        assert!(nav.contains(r#"<a class="brand" href="/">Acme &amp; Sons</a>"#));

        let footer = render_footer(2026, "Acme & Sons", "https://wa.me/1");
        assert!(footer.contains(r#"<p class="brand">Acme &amp; Sons</p>"#));
        assert!(footer.contains("© 2026 Acme &amp; Sons. All rights reserved."));
        assert!(!footer.contains("Shahed Storee"));
    }
}
