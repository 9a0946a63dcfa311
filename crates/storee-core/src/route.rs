//! The storefront page table.

/// A page of the storefront, resolved from a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Shop,
    Product { slug: String },
    About,
    Contact,
    Faq,
    Policies,
    NotFound,
}

impl Route {
    /// Resolve a request path (query string already removed).
    ///
    /// Trailing slashes are ignored, so `/shop/` is the catalog.
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Home,
            "/shop" => Route::Shop,
            "/about" => Route::About,
            "/contact" => Route::Contact,
            "/faq" => Route::Faq,
            "/policies" => Route::Policies,
            other => match other.strip_prefix("/product/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => Route::Product {
                    slug: slug.to_string(),
                },
                _ => Route::NotFound,
            },
        }
    }

    /// Canonical path for links.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Shop => "/shop".to_string(),
            Route::Product { slug } => format!("/product/{}", slug),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Faq => "/faq".to_string(),
            Route::Policies => "/policies".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Shop => "shop",
            Route::Product { .. } => "product",
            Route::About => "about",
            Route::Contact => "contact",
            Route::Faq => "faq",
            Route::Policies => "policies",
            Route::NotFound => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_pages() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/shop"), Route::Shop);
        assert_eq!(Route::resolve("/shop/"), Route::Shop);
        assert_eq!(Route::resolve("/faq"), Route::Faq);
        assert_eq!(Route::resolve("/policies"), Route::Policies);
    }

    #[test]
    fn test_product_slug() {
        assert_eq!(
            Route::resolve("/product/sahara-modular-sofa"),
            Route::Product {
                slug: "sahara-modular-sofa".to_string()
            }
        );
        assert_eq!(Route::resolve("/product/"), Route::NotFound);
        assert_eq!(Route::resolve("/product/a/b"), Route::NotFound);
    }

    #[test]
    fn test_unknown_is_not_found() {
        assert_eq!(Route::resolve("/checkout"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Home, Route::Shop, Route::About, Route::Faq] {
            assert_eq!(Route::resolve(&route.path()), route);
        }
    }
}
