//! Table-store client.

use serde::de::DeserializeOwned;
use serde::Serialize;
use storee_core::{Method, SiteConfig};

use crate::query::TableQuery;
use crate::transport::{HttpRequest, Transport};

/// Error type for fetch operations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Table store is not configured")]
    NotConfigured,
}

/// The store answers a `single` read that matched nothing with this status.
const NOT_ACCEPTABLE: u16 = 406;

const JSON: &str = "application/json";

/// Accept type that makes the store answer one object instead of an array.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Authenticated client for the hosted table store.
///
/// Every request carries the key twice, as `apikey` and as a bearer
/// token, which is what the store's gateway expects.
pub struct TableClient<T> {
    base_url: String,
    api_key: String,
    transport: T,
}

impl<T: Transport> TableClient<T> {
    /// Create a client for `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, transport: T) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            transport,
        }
    }

    /// Create a read-only client from site configuration.
    pub fn from_config(config: &SiteConfig, transport: T) -> Result<Self, FetchError> {
        if !config.is_store_configured() {
            return Err(FetchError::NotConfigured);
        }
        match (&config.store.url, &config.store.anon_key) {
            (Some(url), Some(key)) => Ok(Self::new(url.as_str(), key.as_str(), transport)),
            _ => Err(FetchError::NotConfigured),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(&self, method: Method, path: &str, accept: &str) -> HttpRequest {
        HttpRequest::new(method, format!("{}{}", self.base_url, path))
            .with_header("apikey", self.api_key.as_str())
            .with_header("Authorization", format!("Bearer {}", self.api_key))
            .with_header("Accept", accept)
    }

    /// A GET for `query`; single-row queries ask for a bare object.
    fn read_request(&self, query: &TableQuery) -> HttpRequest {
        let accept = if query.is_single() { SINGLE_OBJECT } else { JSON };
        self.request(Method::Get, &query.to_path(), accept)
    }

    /// Run a read and decode every returned row.
    pub async fn fetch_rows<R: DeserializeOwned>(
        &self,
        query: &TableQuery,
    ) -> Result<Vec<R>, FetchError> {
        let request = self.read_request(query);
        let url = request.url.clone();
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
                url,
            });
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| FetchError::Deserialization(e.to_string()))
    }

    /// Run a read that should match at most one row.
    ///
    /// Returns `Ok(None)` when nothing matched.
    pub async fn fetch_single<R: DeserializeOwned>(
        &self,
        query: &TableQuery,
    ) -> Result<Option<R>, FetchError> {
        let request = self.read_request(&query.clone().single());
        let url = request.url.clone();
        let response = self.transport.send(request).await?;

        if response.status == NOT_ACCEPTABLE {
            return Ok(None);
        }
        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
                url,
            });
        }

        serde_json::from_slice(&response.body)
            .map(Some)
            .map_err(|e| FetchError::Deserialization(e.to_string()))
    }

    /// Insert rows, merging with existing rows that collide on `on_conflict`.
    ///
    /// Returns the stored rows as the store echoes them back.
    pub async fn upsert_rows<B, R>(
        &self,
        table: &str,
        rows: &[B],
        on_conflict: Option<&str>,
    ) -> Result<Vec<R>, FetchError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(rows).map_err(|e| FetchError::Request(e.to_string()))?;

        let path = match on_conflict {
            Some(column) => format!(
                "/rest/v1/{}?on_conflict={}",
                table,
                urlencoding::encode(column)
            ),
            None => format!("/rest/v1/{}", table),
        };

        let request = self
            .request(Method::Post, &path, JSON)
            .with_header("Content-Type", "application/json")
            .with_header("Prefer", "resolution=merge-duplicates,return=representation")
            .with_body(body);
        let url = request.url.clone();
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
                url,
            });
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| FetchError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde::Deserialize;

    use super::*;
    use crate::transport::MockTransport;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Row {
        slug: String,
    }

    fn client(transport: MockTransport) -> TableClient<MockTransport> {
        TableClient::new("https://demo.supabase.co/", "anon-key", transport)
    }

    #[test]
    fn test_fetch_rows_sends_auth_headers() {
        let c = client(MockTransport::new().respond("products", 200, r#"[{"slug":"a"}]"#));
        let rows: Vec<Row> =
            block_on(c.fetch_rows(&TableQuery::from("products").limit(1))).unwrap();

        assert_eq!(rows, vec![Row { slug: "a".into() }]);
        let sent = &c.transport().requests()[0];
        assert_eq!(sent.url, "https://demo.supabase.co/rest/v1/products?select=*&limit=1");
        assert_eq!(sent.header("apikey"), Some("anon-key"));
        assert_eq!(sent.header("authorization"), Some("Bearer anon-key"));
        assert_eq!(sent.header("accept"), Some("application/json"));
    }

    #[test]
    fn test_http_error_status() {
        let c = client(MockTransport::new().respond("products", 500, "oops"));
        let err = block_on(c.fetch_rows::<Row>(&TableQuery::from("products"))).unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 500, .. }));
    }

    #[test]
    fn test_bad_json_is_deserialization_error() {
        let c = client(MockTransport::new().respond("products", 200, "{not json"));
        let err = block_on(c.fetch_rows::<Row>(&TableQuery::from("products"))).unwrap_err();
        assert!(matches!(err, FetchError::Deserialization(_)));
    }

    #[test]
    fn test_fetch_single_miss_is_none() {
        let c = client(MockTransport::new().respond("products", 406, "{}"));
        let row: Option<Row> =
            block_on(c.fetch_single(&TableQuery::from("products").eq("slug", "x"))).unwrap();
        assert!(row.is_none());
        let sent = &c.transport().requests()[0];
        assert_eq!(sent.header("accept"), Some("application/vnd.pgrst.object+json"));
    }

    #[test]
    fn test_upsert_posts_json_with_conflict_column() {
        let c = client(MockTransport::new().respond("products", 201, r#"[{"slug":"a"}]"#));
        let stored: Vec<Row> = block_on(c.upsert_rows(
            "products",
            &[Row { slug: "a".into() }],
            Some("slug"),
        ))
        .unwrap();

        assert_eq!(stored.len(), 1);
        let sent = &c.transport().requests()[0];
        assert_eq!(sent.method, Method::Post);
        assert!(sent.url.ends_with("/rest/v1/products?on_conflict=slug"));
        assert_eq!(sent.body.as_deref(), Some(br#"[{"slug":"a"}]"#.as_slice()));
    }

    #[test]
    fn test_from_config_requires_store() {
        let config = SiteConfig::default();
        assert!(matches!(
            TableClient::from_config(&config, MockTransport::new()),
            Err(FetchError::NotConfigured)
        ));
    }
}
