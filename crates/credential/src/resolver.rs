use async_trait::async_trait;

use crate::credential::HeliumApiCredential;

/// Error type for credential resolution.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum CredentialError {
    /// The host has no credential configured under the requested key.
    #[error("credential `{0}` is not configured")]
    NotConfigured(String),

    /// The host's credential store failed to produce the credential.
    #[error("credential store: {0}")]
    Store(String),
}

impl CredentialError {
    /// Error for a missing credential key.
    pub fn not_configured(key: impl Into<String>) -> Self {
        Self::NotConfigured(key.into())
    }

    /// Error for a failing credential backend.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }
}

/// Port trait for resolving the node's credential from the host.
///
/// Implemented by the host runtime; the dispatcher calls it exactly once
/// per batch and treats the result as immutable for the batch's duration.
#[async_trait]
pub trait CredentialResolver: Send + Sync {
    /// Resolve the `heliumNetworkApi` credential.
    async fn resolve(&self) -> Result<HeliumApiCredential, CredentialError>;
}

/// Resolver that returns a fixed credential. Useful in tests and for
/// hosts that resolve credentials ahead of dispatch.
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(pub HeliumApiCredential);

#[async_trait]
impl CredentialResolver for StaticCredential {
    async fn resolve(&self) -> Result<HeliumApiCredential, CredentialError> {
        Ok(self.0.clone())
    }
}
