//! The per-item request description.
//!
//! A [`RequestSpec`] is built once per input item and handed to the
//! [`HttpClient`](crate::transport::HttpClient) port. It is plain data —
//! deterministic and comparable — so request construction is testable
//! without any IO.

use http::Method;
use serde_json::Value;

use helium_credential::HeliumApiCredential;

/// A fully-described HTTP request: method, URL, query pairs, JSON body
/// and headers. Built per item, never reused across items.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL without the query string.
    pub url: String,
    /// Query parameters in insertion order. Values are already
    /// stringified; percent-encoding is the transport's job.
    pub query: Vec<(String, String)>,
    /// JSON request body, for mutating operations.
    pub body: Option<Value>,
    /// Request headers in insertion order.
    pub headers: Vec<(String, String)>,
}

impl RequestSpec {
    /// Start a spec with the given method and URL.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// Start a GET spec.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Start a POST spec.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Start a PATCH spec.
    #[must_use]
    pub fn patch(url: impl Into<String>) -> Self {
        Self::new(Method::PATCH, url)
    }

    /// Start a DELETE spec.
    #[must_use]
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a query parameter only when a value is present.
    ///
    /// This is where the omission policies
    /// ([`omit_if_empty`](crate::params::omit_if_empty),
    /// [`omit_if_zero`](crate::params::omit_if_zero)) plug in.
    #[must_use]
    pub fn query_opt(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.query.push((key.into(), value));
        }
        self
    }

    /// Set the JSON body.
    #[must_use]
    pub fn json_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Append `Authorization: Bearer <key>` when the credential carries
    /// an API key.
    #[must_use]
    pub fn bearer_auth(self, credential: &HeliumApiCredential) -> Self {
        match &credential.api_key {
            Some(key) => self.header("Authorization", format!("Bearer {}", key.expose())),
            None => self,
        }
    }

    /// Append `Content-Type: application/json`.
    #[must_use]
    pub fn content_type_json(self) -> Self {
        self.header("Content-Type", "application/json")
    }

    /// Append `Accept: application/json`.
    ///
    /// The accounts resource historically sends `Accept` where every
    /// other resource sends `Content-Type`; both helpers exist so each
    /// builder states which convention it follows.
    #[must_use]
    pub fn accept_json(self) -> Self {
        self.header("Accept", "application/json")
    }

    /// Look up a header value by name (exact match).
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}
