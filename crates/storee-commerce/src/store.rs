//! Where catalog rows come from.

use async_trait::async_trait;
use storee_data::{FetchError, TableClient, TableQuery, Transport};

use crate::catalog::{Product, ProductImage, VariantOption};
use crate::ids::ProductId;
use crate::listing::PRODUCTS_TABLE;

/// Collection holding variant option rows.
pub const VARIANTS_TABLE: &str = "product_variants";

/// Collection holding product image rows.
pub const IMAGES_TABLE: &str = "product_images";

/// Read access to the three catalog collections.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Run a product read.
    async fn products(&self, query: &TableQuery) -> Result<Vec<Product>, FetchError>;

    /// Look up one product by slug.
    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, FetchError>;

    /// Variant options of a product, in stored order.
    async fn variants(&self, product_id: &ProductId) -> Result<Vec<VariantOption>, FetchError>;

    /// Images of a product, in stored order.
    async fn images(&self, product_id: &ProductId) -> Result<Vec<ProductImage>, FetchError>;
}

/// Catalog backed by the hosted table store.
pub struct RemoteCatalog<T> {
    client: TableClient<T>,
}

impl<T: Transport> RemoteCatalog<T> {
    pub fn new(client: TableClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &TableClient<T> {
        &self.client
    }
}

#[async_trait(?Send)]
impl<T: Transport> CatalogSource for RemoteCatalog<T> {
    async fn products(&self, query: &TableQuery) -> Result<Vec<Product>, FetchError> {
        self.client.fetch_rows(query).await
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, FetchError> {
        let query = TableQuery::from(PRODUCTS_TABLE).eq("slug", slug);
        self.client.fetch_single(&query).await
    }

    async fn variants(&self, product_id: &ProductId) -> Result<Vec<VariantOption>, FetchError> {
        let query = TableQuery::from(VARIANTS_TABLE).eq("product_id", product_id);
        self.client.fetch_rows(&query).await
    }

    async fn images(&self, product_id: &ProductId) -> Result<Vec<ProductImage>, FetchError> {
        let query = TableQuery::from(IMAGES_TABLE).eq("product_id", product_id);
        self.client.fetch_rows(&query).await
    }
}

/// Stand-in used when no store is configured. Every read fails with
/// `FetchError::NotConfigured`, which sends callers to the demo catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineCatalog;

#[async_trait(?Send)]
impl CatalogSource for OfflineCatalog {
    async fn products(&self, _query: &TableQuery) -> Result<Vec<Product>, FetchError> {
        Err(FetchError::NotConfigured)
    }

    async fn product_by_slug(&self, _slug: &str) -> Result<Option<Product>, FetchError> {
        Err(FetchError::NotConfigured)
    }

    async fn variants(&self, _product_id: &ProductId) -> Result<Vec<VariantOption>, FetchError> {
        Err(FetchError::NotConfigured)
    }

    async fn images(&self, _product_id: &ProductId) -> Result<Vec<ProductImage>, FetchError> {
        Err(FetchError::NotConfigured)
    }
}

/// A catalog that may or may not be connected, chosen at startup.
pub enum AnyCatalog<T> {
    Remote(RemoteCatalog<T>),
    Offline(OfflineCatalog),
}

impl<T: Transport> AnyCatalog<T> {
    /// Connect when the configuration names a store, otherwise go offline.
    pub fn from_config(config: &storee_core::SiteConfig, transport: T) -> Self {
        match TableClient::from_config(config, transport) {
            Ok(client) => AnyCatalog::Remote(RemoteCatalog::new(client)),
            Err(_) => AnyCatalog::Offline(OfflineCatalog),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, AnyCatalog::Remote(_))
    }
}

#[async_trait(?Send)]
impl<T: Transport> CatalogSource for AnyCatalog<T> {
    async fn products(&self, query: &TableQuery) -> Result<Vec<Product>, FetchError> {
        match self {
            AnyCatalog::Remote(c) => c.products(query).await,
            AnyCatalog::Offline(c) => c.products(query).await,
        }
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, FetchError> {
        match self {
            AnyCatalog::Remote(c) => c.product_by_slug(slug).await,
            AnyCatalog::Offline(c) => c.product_by_slug(slug).await,
        }
    }

    async fn variants(&self, product_id: &ProductId) -> Result<Vec<VariantOption>, FetchError> {
        match self {
            AnyCatalog::Remote(c) => c.variants(product_id).await,
            AnyCatalog::Offline(c) => c.variants(product_id).await,
        }
    }

    async fn images(&self, product_id: &ProductId) -> Result<Vec<ProductImage>, FetchError> {
        match self {
            AnyCatalog::Remote(c) => c.images(product_id).await,
            AnyCatalog::Offline(c) => c.images(product_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use storee_core::SiteConfig;
    use storee_data::MockTransport;

    use super::*;

    #[test]
    fn test_remote_variants_query() {
        let transport = MockTransport::new().respond(
            "product_variants",
            200,
            r#"[{"id":"v1","product_id":"p1","variant_name":"Size","variant_value":"King","price_delta":500}]"#,
        );
        let catalog = RemoteCatalog::new(TableClient::new("https://s", "k", transport));
        let variants = block_on(catalog.variants(&ProductId::new("p1"))).unwrap();

        assert_eq!(variants.len(), 1);
        let sent = &catalog.client().transport().requests()[0];
        assert_eq!(sent.url, "https://s/rest/v1/product_variants?select=*&product_id=eq.p1");
    }

    #[test]
    fn test_offline_always_not_configured() {
        let err = block_on(OfflineCatalog.product_by_slug("x")).unwrap_err();
        assert!(matches!(err, FetchError::NotConfigured));
    }

    #[test]
    fn test_any_catalog_from_config() {
        let offline = AnyCatalog::from_config(&SiteConfig::default(), MockTransport::new());
        assert!(!offline.is_remote());

        let mut config = SiteConfig::default();
        config.store.url = Some("https://s".to_string());
        config.store.anon_key = Some("k".to_string());
        let remote = AnyCatalog::from_config(&config, MockTransport::new());
        assert!(remote.is_remote());
    }
}
