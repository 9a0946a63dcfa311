//! Variant selector: one radio group per variant group.

use storee_sdk::storee_commerce::catalog::VariantGroup;
use storee_sdk::storee_commerce::pricing::Selection;
use storee_sdk::storee_streaming::escape_html;

/// Radio groups for the product form. Each option shows its price delta
/// when it changes the price. Renders nothing for a product without
/// variants.
pub fn render_variant_selector(groups: &[VariantGroup], selection: &Selection) -> String {
    if groups.is_empty() {
        return String::new();
    }

    let fieldsets: String = groups
        .iter()
        .map(|group| {
            let chosen = selection.get(&group.name);
            let options: String = group
                .options
                .iter()
                .map(|option| {
                    let checked = chosen == Some(option.value.as_str());
                    let delta = if option.price_delta.is_zero() {
                        String::new()
                    } else {
                        format!(
                            r#" <span class="delta">{}</span>"#,
                            escape_html(&option.price_delta.delta_label())
                        )
                    };
                    format!(
                        r#"<label class="chip{active}"><input type="radio" name="{name}" value="{value}"{checked} onchange="this.form.submit()"> {value}{delta}</label>"#,
                        active = if checked { " active" } else { "" },
                        name = escape_html(&group.name),
                        value = escape_html(&option.value),
                        checked = if checked { " checked" } else { "" },
                        delta = delta,
                    )
                })
                .collect();

            format!(
                r#"<fieldset class="variant-group" role="radiogroup"><legend>{}: <span class="chosen">{}</span></legend>{}</fieldset>"#,
                escape_html(&group.name),
                escape_html(chosen.unwrap_or("Select")),
                options
            )
        })
        .collect();

    format!(r#"<div class="variants">{}</div>"#, fieldsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storee_sdk::storee_commerce::catalog::group_variants;
    use storee_sdk::storee_commerce::demo::demo_variants;

    #[test]
    fn test_selector_shows_choice_and_deltas() {
        let groups = group_variants(&demo_variants());
        let selection = Selection::new().with("Size", "L-Shape");
        let html = render_variant_selector(&groups, &selection);

        assert!(html.contains("<legend>Size: <span class=\"chosen\">L-Shape</span></legend>"));
        assert!(html.contains("<legend>Color: <span class=\"chosen\">Select</span></legend>"));
        assert!(html.contains(r#"value="L-Shape" checked"#));
        assert!(html.contains(r#"3-Seater <span class="delta">+1,200 SAR</span>"#));
        assert!(!html.contains(r#"2-Seater <span class="delta">"#));
    }

    #[test]
    fn test_no_groups_renders_nothing() {
        assert_eq!(render_variant_selector(&[], &Selection::new()), "");
    }
}
