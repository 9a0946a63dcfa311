/// Inline stylesheet for every page.
pub const STOREFRONT_STYLES: &str = r#"
:root { --gold: #b8925a; --ink: #1f1b16; --cream: #faf7f2; --muted: #6f665c; --line: #e8e1d6; --wa: #25d366; }
* { box-sizing: border-box; }
body { margin: 0; font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; color: var(--ink); background: var(--cream); line-height: 1.6; }
a { color: inherit; }
h1, h2, h3 { font-family: 'Playfair Display', Georgia, serif; line-height: 1.2; }
.page { max-width: 1200px; margin: 0 auto; padding: 2rem 1.5rem 4rem; }

/* Header */
.site-header { position: sticky; top: 0; z-index: 10; background: rgba(250, 247, 242, 0.95); border-bottom: 1px solid var(--line); }
.site-nav { max-width: 1200px; margin: 0 auto; padding: 1rem 1.5rem; display: flex; align-items: center; gap: 2rem; }
.site-nav .brand { font-family: 'Playfair Display', Georgia, serif; font-size: 1.4rem; text-decoration: none; }
.nav-links { display: flex; gap: 1.5rem; list-style: none; margin: 0 auto 0 0; padding: 0; }
.nav-links a { text-decoration: none; color: var(--muted); }
.nav-links a.active { color: var(--ink); border-bottom: 2px solid var(--gold); }

/* Buttons and badges */
.btn { display: inline-block; padding: 0.75rem 1.5rem; border-radius: 999px; text-decoration: none; font-weight: 600; border: 1px solid transparent; cursor: pointer; }
.btn-gold { background: var(--gold); color: white; }
.btn-outline { border-color: var(--ink); background: transparent; }
.btn-whatsapp { background: var(--wa); color: white; }
.btn-block { display: block; width: 100%; text-align: center; margin-top: 1rem; }
.badge { display: inline-block; font-size: 0.75rem; letter-spacing: 0.08em; text-transform: uppercase; padding: 0.2rem 0.6rem; border-radius: 999px; background: var(--line); }
.badge-gold { background: var(--gold); color: white; }

/* Home */
.hero { padding: 4rem 0; display: grid; gap: 1.5rem; }
.hero h1 { font-size: clamp(2.5rem, 6vw, 4.5rem); margin: 0; }
.marquee { overflow: hidden; white-space: nowrap; border-block: 1px solid var(--line); padding: 0.75rem 0; color: var(--muted); }
.marquee span { margin-right: 2.5rem; }
.tabs { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
.tabs a { padding: 0.5rem 1.2rem; border-radius: 999px; text-decoration: none; border: 1px solid var(--line); }
.tabs a.active { background: var(--ink); color: white; }
.stats { display: flex; gap: 3rem; margin: 2rem 0; }
.stat strong { display: block; font-size: 2rem; color: var(--gold); }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 1.5rem; }
.card { background: white; border: 1px solid var(--line); border-radius: 16px; padding: 1.5rem; }
.cta-banner { background: var(--ink); color: white; border-radius: 24px; padding: 3rem; text-align: center; margin-top: 4rem; }

/* Product grid */
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }
.product-card { display: block; text-decoration: none; background: white; border-radius: 16px; overflow: hidden; border: 1px solid var(--line); }
.card-media { position: relative; aspect-ratio: 4 / 3; }
.card-media .badge { position: absolute; top: 0.75rem; left: 0.75rem; }
.card-image { width: 100%; height: 100%; object-fit: cover; }
.card-body { padding: 1rem 1.25rem 1.25rem; }
.card-category { font-size: 0.75rem; text-transform: uppercase; color: var(--muted); margin: 0; }
.card-name { margin: 0.25rem 0; font-size: 1.1rem; }
.card-material { color: var(--muted); margin: 0; }
.card-price { font-weight: 700; margin: 0.5rem 0 0; }
.placeholder { display: flex; align-items: center; justify-content: center; font-size: 3rem; font-family: 'Playfair Display', Georgia, serif; color: white; }
.tone-0 { background: #c9b79c; } .tone-1 { background: #a68a64; } .tone-2 { background: #8c7b6b; }
.tone-3 { background: #b5a489; } .tone-4 { background: #7d6e5d; } .tone-5 { background: #d4c4a8; }

/* Shop */
.filters { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; margin: 1.5rem 0; }
.pill { padding: 0.4rem 1rem; border-radius: 999px; border: 1px solid var(--line); text-decoration: none; }
.pill.active { background: var(--ink); color: white; }
.result-count { margin-left: auto; color: var(--muted); }
.empty-state { text-align: center; padding: 4rem 0; color: var(--muted); }
.demo-note { font-size: 0.85rem; color: var(--muted); }

/* Product page */
.breadcrumb { display: flex; gap: 0.5rem; font-size: 0.85rem; color: var(--muted); margin-bottom: 1.5rem; }
.breadcrumb a { text-decoration: none; }
.gallery { position: relative; border-radius: 16px; overflow: hidden; background: white; }
.gallery-main img, .gallery-main .placeholder { width: 100%; aspect-ratio: 1; object-fit: cover; }
.gallery-arrow { position: absolute; top: 45%; padding: 0.5rem 0.9rem; background: white; border-radius: 50%; text-decoration: none; font-size: 1.5rem; }
.gallery-arrow.prev { left: 1rem; } .gallery-arrow.next { right: 1rem; }
.gallery-dots { display: flex; justify-content: center; gap: 0.4rem; padding: 0.75rem; }
.gallery-thumbs { display: flex; gap: 0.5rem; padding: 0 0.75rem 0.75rem; }
.product-info { padding: 2rem 0; }
.product-info .price { font-size: 2rem; font-weight: 700; color: var(--gold); margin: 0.5rem 0; }
.price-breakdown { list-style: none; padding: 0; color: var(--muted); font-size: 0.9rem; }
.price-breakdown span { float: right; }
.variant-group { border: none; padding: 0; margin: 1rem 0; }
.chip { display: inline-block; margin: 0.25rem; padding: 0.4rem 0.9rem; border: 1px solid var(--line); border-radius: 999px; cursor: pointer; }
.chip.active { border-color: var(--ink); background: var(--ink); color: white; }
.chip input { position: absolute; opacity: 0; }
.delta { font-size: 0.8rem; color: var(--gold); }
.order-form select { width: 100%; padding: 0.6rem; border-radius: 8px; border: 1px solid var(--line); }
.hint { font-size: 0.8rem; color: var(--muted); }

/* Content pages */
.accordion details { border-bottom: 1px solid var(--line); padding: 1rem 0; }
.accordion summary { cursor: pointer; font-weight: 600; }
.policies-layout { display: grid; grid-template-columns: 200px 1fr; gap: 2rem; }
.policy-nav { display: flex; flex-direction: column; gap: 0.5rem; }
.policy-link { text-decoration: none; color: var(--muted); }
.policy-link.active { color: var(--ink); font-weight: 600; }
.contact-layout { display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; }
.contact-form { display: grid; gap: 0.5rem; background: white; padding: 2rem; border-radius: 16px; }
.contact-form input, .contact-form textarea { padding: 0.7rem; border-radius: 8px; border: 1px solid var(--line); font: inherit; }
.form-error { color: #b3261e; }
.not-found { text-align: center; padding: 5rem 0; }

/* Footer */
.site-footer { background: var(--ink); color: #d9d2c7; padding: 3rem 1.5rem 1.5rem; }
.footer-grid { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 2rem; }
.site-footer a { color: #d9d2c7; text-decoration: none; }
.copyright { text-align: center; font-size: 0.8rem; margin-top: 2rem; }
.floating-whatsapp { position: fixed; right: 1.5rem; bottom: 1.5rem; background: var(--wa); color: white; padding: 0.9rem 1.3rem; border-radius: 999px; text-decoration: none; font-weight: 600; box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2); }

@media (max-width: 768px) {
    .nav-links { display: none; }
    .policies-layout, .contact-layout { grid-template-columns: 1fr; }
    .stats { flex-direction: column; gap: 1rem; }
}
"#;
