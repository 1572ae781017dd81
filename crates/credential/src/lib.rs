//! # Helium Credential
//!
//! The `heliumNetworkApi` credential consumed by the Helium Network node:
//! an optional API key plus the API base URL, with the host-facing
//! description of both fields.
//!
//! Secret material is wrapped in [`ApiKey`], which redacts its contents in
//! `Debug` and `Display` so credentials cannot leak through logging.
//! Resolution from the host's credential store goes through the
//! [`CredentialResolver`] port; this crate never touches storage itself.

/// The credential type and its host-facing description.
pub mod credential;
/// The async resolution port implemented by the host runtime.
pub mod resolver;
/// Redacting wrapper for secret values.
pub mod secret;

pub use credential::{CredentialDescription, HeliumApiCredential, DEFAULT_BASE_URL};
pub use resolver::{CredentialError, CredentialResolver, StaticCredential};
pub use secret::ApiKey;
