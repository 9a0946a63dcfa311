use storee_sdk::storee_commerce::content::{ABOUT_PAGE, ABOUT_STATS, BRAND};
use storee_sdk::storee_streaming::escape_html;

pub fn render_about_page(chat_url: &str) -> String {
    let paragraphs: String = ABOUT_PAGE
        .body
        .iter()
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

    let values: String = ABOUT_PAGE
        .values
        .iter()
        .map(|v| {
            format!(
                r#"<div class="card"><span class="icon" aria-hidden="true">{}</span><h3>{}</h3><p>{}</p></div>"#,
                v.icon,
                escape_html(v.title),
                escape_html(v.description)
            )
        })
        .collect();

    format!(
        r#"<section class="about-page" data-section="about">
    <span class="badge badge-gold">Our Story</span>
    <h1>{headline}</h1>
    <div class="story">{paragraphs}</div>
    <div class="stats">{stats}</div>
    <h2>What We Stand For</h2>
    <div class="cards">{values}</div>
    <div class="cta">
        <p>{tagline}</p>
        <a class="btn btn-whatsapp" href="{chat_url}" target="_blank" rel="noopener noreferrer">Talk to us on WhatsApp</a>
    </div>
</section>"#,
        headline = escape_html(ABOUT_PAGE.headline),
        paragraphs = paragraphs,
        stats = stats,
        values = values,
        tagline = escape_html(BRAND.tagline),
        chat_url = escape_html(chat_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_page_has_story_and_values() {
        let html = render_about_page("https://wa.me/1");
        assert_eq!(html.matches(r#"<div class="card">"#).count(), 4);
        assert!(html.contains("Crafting Beautiful Spaces"));
        assert!(html.contains("<h3>Sustainability</h3>"));
        assert!(html.contains(r#"href="https://wa.me/1""#));
    }
}
