//! Policies page: sidebar plus the selected document.

use storee_sdk::storee_commerce::content::{parse_policy, policy, Inline, PolicyBlock, POLICIES};
use storee_sdk::storee_streaming::escape_html;

fn render_block(block: &PolicyBlock<'_>) -> String {
    match block {
        PolicyBlock::Heading(text) => format!("<h3>{}</h3>", escape_html(text)),
        PolicyBlock::Item(text) => format!("<li>{}</li>", escape_html(text)),
        PolicyBlock::Break => "<br>".to_string(),
        PolicyBlock::Paragraph(parts) => {
            let inner: String = parts
                .iter()
                .map(|part| match part {
                    Inline::Text(text) => escape_html(text),
                    Inline::Strong(text) => format!("<strong>{}</strong>", escape_html(text)),
                })
                .collect();
            format!("<p>{}</p>", inner)
        }
    }
}

/// `active_key` picks the document; unknown keys show shipping.
pub fn render_policies(active_key: &str) -> String {
    let active = policy(active_key);

    let sidebar: String = POLICIES
        .iter()
        .map(|p| {
            format!(
                r##"<a class="policy-link{}" href="/policies?section={}#{}"{}>{}</a>"##,
                if p.key == active.key { " active" } else { "" },
                p.key,
                p.key,
                if p.key == active.key {
                    r#" aria-current="page""#
                } else {
                    ""
                },
                escape_html(p.label)
            )
        })
        .collect();

    let body: String = parse_policy(active.body).iter().map(render_block).collect();

    format!(
        r#"<section class="policies" data-section="policies">
    <h1>Policies</h1>
    <div class="policies-layout">
        <nav class="policy-nav" aria-label="Policies">{sidebar}</nav>
        <article id="{key}" class="policy-body">
            <h2>{title}</h2>
            {body}
        </article>
    </div>
</section>"#,
        sidebar = sidebar,
        key = active.key,
        title = escape_html(active.title),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policies_renders_selected_document() {
        let html = render_policies("returns");
        assert!(html.contains("<h2>Return Policy</h2>"));
        assert!(html.contains(r#"<article id="returns""#));
        assert!(html.contains("<h3>Return Window</h3>"));
        assert!(html.contains("<li>Custom and made-to-order items are non-returnable</li>"));
        assert!(html.contains(
            r#"<a class="policy-link active" href="/policies?section=returns#returns" aria-current="page">Returns</a>"#
        ));
    }

    #[test]
    fn test_unknown_section_shows_shipping() {
        let html = render_policies("warranty");
        assert!(html.contains("<h2>Shipping Policy</h2>"));
    }

    #[test]
    fn test_inline_strong() {
        let block = PolicyBlock::Paragraph(vec![Inline::Text("a "), Inline::Strong("b")]);
        assert_eq!(render_block(&block), "<p>a <strong>b</strong></p>");
    }
}
