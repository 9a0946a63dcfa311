//! Contact page. The form posts back here and is answered with a
//! redirect to WhatsApp.

use storee_sdk::storee_commerce::content::{BRAND, CONTACT_PAGE};
use storee_sdk::storee_commerce::whatsapp::ContactRequest;
use storee_sdk::storee_streaming::escape_html;

/// `form` refills the fields after a rejected submission, `error` says
/// why it was rejected.
pub fn render_contact_page(form: &ContactRequest, error: Option<&str>, chat_url: &str) -> String {
    let error = error
        .map(|e| format!(r#"<p class="form-error" role="alert">{}</p>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<section class="contact-page" data-section="contact">
    <span class="badge badge-gold">Contact</span>
    <h1>{headline}</h1>
    <p class="lead">{subheadline}</p>
    <div class="contact-layout">
        <form class="contact-form" method="post" action="/contact">
            <h2>{form_title}</h2>
            {error}
            <label for="contact-name">Name</label>
            <input id="contact-name" name="name" type="text" required value="{name}">
            <label for="contact-phone">Phone</label>
            <input id="contact-phone" name="phone" type="tel" required value="{phone}">
            <label for="contact-message">Message</label>
            <textarea id="contact-message" name="message" rows="5" required>{message}</textarea>
            <button type="submit" class="btn btn-whatsapp btn-block">{submit}</button>
            <p class="hint">{disclaimer}</p>
        </form>
        <aside class="contact-details">
            <h3>Visit</h3>
            <p>{address}</p>
            <h3>Call</h3>
            <p>{phone_label}</p>
            <h3>Email</h3>
            <p><a href="mailto:{email}">{email}</a></p>
            <h3>Hours</h3>
            <p>{hours}</p>
            <a class="btn btn-outline" href="{chat_url}" target="_blank" rel="noopener noreferrer">{whatsapp_label}</a>
        </aside>
    </div>
</section>"#,
        headline = escape_html(CONTACT_PAGE.headline),
        subheadline = escape_html(CONTACT_PAGE.subheadline),
        form_title = escape_html(CONTACT_PAGE.form_title),
        error = error,
        name = escape_html(&form.name),
        phone = escape_html(&form.phone),
        message = escape_html(&form.message),
        submit = escape_html(CONTACT_PAGE.submit),
        disclaimer = escape_html(CONTACT_PAGE.disclaimer),
        address = escape_html(BRAND.address),
        phone_label = escape_html(BRAND.phone),
        email = escape_html(BRAND.email),
        hours = escape_html(CONTACT_PAGE.hours),
        chat_url = escape_html(chat_url),
        whatsapp_label = escape_html(BRAND.whatsapp_label),
    )
}
