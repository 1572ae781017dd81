use std::fmt;

use serde::Deserialize;

/// An API key that redacts its contents in `Debug` and `Display`.
///
/// Deserializes transparently from a plain JSON string so host-supplied
/// credential data maps straight onto it; it deliberately does not
/// implement `Serialize`, so the secret cannot round-trip back out
/// through this crate.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct ApiKey {
    inner: String,
}

impl ApiKey {
    /// Wrap a secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Access the underlying value.
    ///
    /// The name is deliberately loud; call sites that expose the secret
    /// should be easy to audit.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
