//! Outbound HTTP transports.
//!
//! The table client never talks to the network directly. Inside the Spin
//! runtime requests go through the host's outbound HTTP; native tools use
//! reqwest; tests use `MockTransport`.

use std::sync::Mutex;

use async_trait::async_trait;
use storee_core::Method;

use crate::client::FetchError;

/// A fully-formed outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response.
///
/// Futures are not required to be `Send`: Spin's outbound HTTP futures
/// are single-threaded.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, FetchError>;
}

/// Outbound HTTP through the Spin host.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for SpinTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, FetchError> {
        use spin_sdk::http::{Method as SpinMethod, Request, Response};

        let method = match request.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Patch => SpinMethod::Patch,
            Method::Delete => SpinMethod::Delete,
            Method::Head => SpinMethod::Head,
            Method::Options => SpinMethod::Options,
        };

        let mut builder = Request::builder();
        builder.method(method);
        builder.uri(request.url.as_str());
        for (key, value) in &request.headers {
            builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder.body(body);
        }

        let response: Response = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        Ok(RawResponse::new(*response.status(), response.into_body()))
    }
}

/// Outbound HTTP through reqwest, for tools running on the host.
#[cfg(feature = "native")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "native")]
impl ReqwestTransport {
    /// Create a transport with a per-request timeout.
    pub fn new(timeout: std::time::Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Connection(e.to_string()))?;
        Ok(Self { client })
    }
}

#[cfg(feature = "native")]
#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, FetchError> {
        let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let mut builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(request.url.clone())
            } else {
                FetchError::Connection(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Connection(e.to_string()))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }
}

enum MockReply {
    Response(RawResponse),
    Fail(String),
}

/// In-memory transport with canned replies keyed on a URL fragment.
///
/// Routes are matched in registration order; the first route whose
/// fragment occurs in the request URL answers. Unmatched requests fail
/// with a connection error. Every request is recorded.
#[derive(Default)]
pub struct MockTransport {
    routes: Vec<(String, MockReply)>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests whose URL contains `fragment` with a JSON body.
    pub fn respond(mut self, fragment: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        let body: String = body.into();
        self.routes.push((
            fragment.into(),
            MockReply::Response(RawResponse::new(status, body.into_bytes())),
        ));
        self
    }

    /// Fail requests whose URL contains `fragment` with a connection error.
    pub fn fail(mut self, fragment: impl Into<String>, message: impl Into<String>) -> Self {
        self.routes
            .push((fragment.into(), MockReply::Fail(message.into())));
        self
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, FetchError> {
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(request.clone());
        }

        let reply = self
            .routes
            .iter()
            .find(|(fragment, _)| request.url.contains(fragment.as_str()))
            .map(|(_, reply)| reply);

        match reply {
            Some(MockReply::Response(response)) => Ok(response.clone()),
            Some(MockReply::Fail(message)) => Err(FetchError::Connection(message.clone())),
            None => Err(FetchError::Connection(format!(
                "no mock route for {}",
                request.url
            ))),
        }
    }
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, FetchError> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn test_mock_matches_first_route() {
        let transport = MockTransport::new()
            .respond("product_variants", 200, "[1]")
            .respond("products", 200, "[2]");

        let resp = block_on(transport.send(HttpRequest::new(
            Method::Get,
            "https://x/rest/v1/product_variants?select=*",
        )))
        .unwrap();
        assert_eq!(resp.body, b"[1]");
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_mock_unmatched_is_connection_error() {
        let transport = MockTransport::new();
        let err = block_on(transport.send(HttpRequest::new(Method::Get, "https://x/")))
            .unwrap_err();
        assert!(matches!(err, FetchError::Connection(_)));
    }

    #[test]
    fn test_request_header_lookup() {
        let req = HttpRequest::new(Method::Get, "u").with_header("apikey", "k");
        assert_eq!(req.header("APIKEY"), Some("k"));
        assert_eq!(req.header("authorization"), None);
    }
}
