//! FAQ accordion.

use storee_sdk::storee_commerce::content::{Faq, FAQS};
use storee_sdk::storee_streaming::escape_html;

/// Questions as `<details>` elements, first one open.
pub fn render_faq_items(faqs: &[Faq]) -> String {
    let items: String = faqs
        .iter()
        .enumerate()
        .map(|(i, faq)| {
            format!(
                r#"<details class="faq-item"{}><summary>{}</summary><p>{}</p></details>"#,
                if i == 0 { " open" } else { "" },
                escape_html(faq.question),
                escape_html(faq.answer)
            )
        })
        .collect();
    format!(r#"<div class="accordion">{}</div>"#, items)
}

pub fn render_faq_page(chat_url: &str) -> String {
    format!(
        r#"<section class="faq-page" data-section="faq">
    <span class="badge badge-gold">FAQ</span>
    <h1>Frequently Asked Questions</h1>
    <p class="lead">Everything you need to know about ordering, delivery and our pieces.</p>
    {}
    <div class="faq-more">
        <p>Still have a question?</p>
        <a class="btn btn-whatsapp" href="{}" target="_blank" rel="noopener noreferrer">Chat on WhatsApp</a>
    </div>
</section>"#,
        render_faq_items(&FAQS),
        escape_html(chat_url)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_page_lists_all_questions() {
        let html = render_faq_page("https://wa.me/1");
        assert_eq!(html.matches("<details").count(), 8);
        assert_eq!(html.matches(" open>").count(), 1);
        assert!(html.contains("Are prices negotiable?"));
        assert!(html.contains("we&#x27;ll guide you"));
    }
}
