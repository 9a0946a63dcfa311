use storee_sdk::storee_streaming::escape_html;

pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<section class="not-found" data-section="not-found">
    <h1>Page not found</h1>
    <p>Nothing lives at <code>{}</code>.</p>
    <a class="btn btn-gold" href="/shop">Browse the collection</a>
    <a class="btn btn-outline" href="/">Back home</a>
</section>"#,
        escape_html(path)
    )
}
