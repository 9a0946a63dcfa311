//! Product image gallery driven by the `image` query parameter.

use storee_sdk::storee_commerce::catalog::ProductImage;
use storee_sdk::storee_core::QueryParams;
use storee_sdk::storee_streaming::escape_html;

/// Placeholder slides shown when a product has no images.
pub const PLACEHOLDER_SLIDES: usize = 3;

/// One gallery slide; `url` is `None` for a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub url: Option<String>,
    pub alt: String,
}

/// The product's images, or three placeholders named after the product.
pub fn gallery_slides(images: &[ProductImage], product_name: &str) -> Vec<Slide> {
    if images.is_empty() {
        return (0..PLACEHOLDER_SLIDES)
            .map(|i| Slide {
                url: None,
                alt: format!("{} view {}", product_name, i + 1),
            })
            .collect();
    }
    images
        .iter()
        .map(|img| Slide {
            url: Some(img.url.clone()),
            alt: img.alt_or(product_name).to_string(),
        })
        .collect()
}

/// Map any requested index onto `0..len`, wrapping both ways.
pub fn wrap_index(requested: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    requested.rem_euclid(len as i64) as usize
}

/// Read the active slide from `image=N`; missing or garbage means 0.
pub fn active_slide(params: &QueryParams, len: usize) -> usize {
    let requested = params
        .get("image")
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(0);
    wrap_index(requested, len)
}

fn slide_href(slug: &str, params: &QueryParams, index: usize) -> String {
    let mut params = params.clone();
    params.insert("image", index.to_string());
    format!("/product/{}?{}#gallery", slug, params.to_query_string())
}

fn render_slide(slide: &Slide, index: usize, initial: &str) -> String {
    match &slide.url {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" class="gallery-image">"#,
            escape_html(url),
            escape_html(&slide.alt)
        ),
        None => format!(
            r#"<div class="gallery-image placeholder tone-{}" role="img" aria-label="{}"><span>{}</span></div>"#,
            index % PLACEHOLDER_SLIDES,
            escape_html(&slide.alt),
            escape_html(initial)
        ),
    }
}

/// Main slide, prev/next arrows, dots and thumbnails. Navigation is only
/// rendered when there is more than one slide.
pub fn render_gallery(
    slug: &str,
    product_name: &str,
    images: &[ProductImage],
    params: &QueryParams,
) -> String {
    let slides = gallery_slides(images, product_name);
    let len = slides.len();
    let active = active_slide(params, len);
    let initial: String = product_name.chars().take(1).collect();

    let main = render_slide(&slides[active], active, &initial);

    let mut nav = String::new();
    if len > 1 {
        let prev = (active + len - 1) % len;
        let next = (active + 1) % len;
        nav.push_str(&format!(
            r#"<a class="gallery-arrow prev" href="{}" aria-label="Previous image">‹</a><a class="gallery-arrow next" href="{}" aria-label="Next image">›</a>"#,
            escape_html(&slide_href(slug, params, prev)),
            escape_html(&slide_href(slug, params, next)),
        ));

        let dots: String = (0..len)
            .map(|i| {
                format!(
                    r#"<a class="dot{}" href="{}" aria-label="Go to image {}"></a>"#,
                    if i == active { " active" } else { "" },
                    escape_html(&slide_href(slug, params, i)),
                    i + 1
                )
            })
            .collect();
        nav.push_str(&format!(r#"<div class="gallery-dots">{}</div>"#, dots));
    }

    let thumbs = if len > 1 {
        let items: String = slides
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                let inner = match &slide.url {
                    Some(url) => format!(r#"<img src="{}" alt="">"#, escape_html(url)),
                    None => format!(r#"<div class="placeholder tone-{}"></div>"#, i % PLACEHOLDER_SLIDES),
                };
                format!(
                    r#"<a class="thumb{}" href="{}" aria-label="View image {}">{}</a>"#,
                    if i == active { " active" } else { "" },
                    escape_html(&slide_href(slug, params, i)),
                    i + 1,
                    inner
                )
            })
            .collect();
        format!(r#"<div class="gallery-thumbs">{}</div>"#, items)
    } else {
        String::new()
    };

    format!(
        r#"<div class="gallery" id="gallery">
    <div class="gallery-main">{}{}</div>
    {}
</div>"#,
        main, nav, thumbs
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storee_sdk::storee_commerce::ImageId;

    fn image(url: &str) -> ProductImage {
        ProductImage {
            id: ImageId::new(url),
            product_id: None,
            url: url.to_string(),
            alt: None,
        }
    }

    #[test]
    fn test_placeholders_when_no_images() {
        let slides = gallery_slides(&[], "Dune Bed");
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[2].alt, "Dune Bed view 3");
        assert!(slides.iter().all(|s| s.url.is_none()));
    }

    #[test]
    fn test_wrap_index_both_ways() {
        assert_eq!(wrap_index(3, 3), 0);
        assert_eq!(wrap_index(-1, 3), 2);
        assert_eq!(wrap_index(7, 3), 1);
        assert_eq!(wrap_index(5, 0), 0);
    }

    #[test]
    fn test_arrows_wrap_and_keep_selection() {
        let params = QueryParams::parse("Size=3-Seater&image=0");
        let html = render_gallery("sahara", "Sahara", &[], &params);

        assert!(html.contains(r#"href="/product/sahara?Size=3-Seater&amp;image=2#gallery" aria-label="Previous image""#));
        assert!(html.contains(r#"href="/product/sahara?Size=3-Seater&amp;image=1#gallery" aria-label="Next image""#));
        assert_eq!(html.matches("aria-label=\"Go to image").count(), 3);
    }

    #[test]
    fn test_single_image_has_no_navigation() {
        let html = render_gallery("x", "X", &[image("https://cdn/1.jpg")], &QueryParams::new());
        assert!(html.contains(r#"<img src="https://cdn/1.jpg" alt="X" class="gallery-image">"#));
        assert!(!html.contains("gallery-arrow"));
        assert!(!html.contains("gallery-thumbs"));
    }

    #[test]
    fn test_out_of_range_image_param_wraps() {
        let images = [image("a"), image("b")];
        let html = render_gallery("x", "X", &images, &QueryParams::parse("image=5"));
        assert!(html.contains(r#"<img src="b" alt="X" class="gallery-image">"#));
    }
}
