//! HTTP client port and the reqwest driver.
//!
//! The dispatcher talks to the wire exclusively through [`HttpClient`],
//! so tests inject stubs and hosts may swap their own transport.
//! [`ReqwestClient`] is the production driver. Policy that belongs to
//! the transport (timeouts, proxies, TLS) stays in the driver; the port
//! itself imposes none.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::request::RequestSpec;

/// A failed HTTP call, as seen by the dispatcher.
///
/// Two shapes share this type: pure transport failures (no `status`) and
/// remote rejections (`status` set, `body` carrying the API's structured
/// error verbatim when it sent one).
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct TransportFailure {
    /// Human-readable failure message.
    pub message: String,
    /// HTTP status code, when a response was received.
    pub status: Option<u16>,
    /// Decoded response body, when the API sent one.
    pub body: Option<Value>,
}

impl TransportFailure {
    /// A failure with no response at all (DNS, connect, abort).
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            body: None,
        }
    }

    /// A non-2xx response.
    pub fn rejection(status: u16, message: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
            body,
        }
    }

    /// Returns `true` when the failure carries a response status.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        self.status.is_some()
    }
}

/// Port trait for executing a [`RequestSpec`].
///
/// `Ok` is the decoded JSON response body. Implementations must not
/// retry, cache, or paginate; those concerns belong to neither this
/// layer nor its drivers.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Execute the request and decode the JSON response.
    async fn send(&self, spec: &RequestSpec) -> Result<Value, TransportFailure>;
}

/// Production driver backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Driver with reqwest's default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver over a preconfigured client (timeouts, proxy, UA).
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, spec: &RequestSpec) -> Result<Value, TransportFailure> {
        let url = Url::parse(&spec.url)
            .map_err(|err| TransportFailure::network(format!("invalid url `{}`: {err}", spec.url)))?;

        let mut request = self.client.request(spec.method.clone(), url);

        for (key, value) in &spec.headers {
            request = request.header(key, value);
        }
        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| TransportFailure::network(err.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| TransportFailure::network(err.to_string()))?;

        // Empty bodies decode to null; anything else must be JSON.
        let value: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|err| {
                TransportFailure::network(format!("response is not valid JSON: {err}"))
            })?
        };

        if status.is_success() {
            Ok(value)
        } else {
            Err(TransportFailure::rejection(
                status.as_u16(),
                rejection_message(status.as_u16(), &value),
                (!value.is_null()).then_some(value),
            ))
        }
    }
}

/// Best human-readable message for a rejection: the body's `error` or
/// `message` field when present, the status line otherwise.
fn rejection_message(status: u16, body: &Value) -> String {
    body.get("error")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .map_or_else(
            || {
                http::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .map_or_else(|| format!("HTTP {status}"), |reason| format!("{status} {reason}"))
            },
            str::to_owned,
        )
}
