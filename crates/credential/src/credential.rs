use std::fmt;

use helium_parameter::prelude::*;
use serde::Deserialize;

use crate::secret::ApiKey;

/// Base URL used when the credential does not override it.
pub const DEFAULT_BASE_URL: &str = "https://api.helium.io/v1";

/// The `heliumNetworkApi` credential.
///
/// Supplied by the host per invocation and immutable for the duration of
/// a batch. The API key is optional — the public Helium API answers
/// unauthenticated reads — while the base URL is always present, falling
/// back to [`DEFAULT_BASE_URL`].
#[derive(Clone, Deserialize)]
pub struct HeliumApiCredential {
    /// API key for the Helium Network Console, if configured.
    #[serde(default, rename = "apiKey")]
    pub api_key: Option<ApiKey>,

    /// Base URL for the Helium Network API.
    #[serde(default = "default_base_url", rename = "baseUrl")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

impl HeliumApiCredential {
    /// Credential with no API key and the default base URL.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }

    /// Credential with an API key and the default base URL.
    #[must_use]
    pub fn with_api_key(key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: Some(key.into()),
            base_url: default_base_url(),
        }
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for HeliumApiCredential {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl fmt::Debug for HeliumApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeliumApiCredential")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Host-facing description of a credential type: its key, display name,
/// and the fields the host should collect from the user.
#[derive(Debug, Clone)]
pub struct CredentialDescription {
    /// Key the host references this credential type by.
    pub key: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Link to the upstream API documentation.
    pub documentation_url: &'static str,
    /// Whether the node refuses to run without this credential.
    pub required: bool,
    /// The fields the host collects.
    pub fields: ParameterCollection,
}

impl CredentialDescription {
    /// The description of the `heliumNetworkApi` credential.
    #[must_use]
    pub fn helium_network_api() -> Self {
        Self {
            key: "heliumNetworkApi",
            name: "Helium Network API",
            documentation_url: "https://docs.helium.com/api/",
            required: true,
            fields: ParameterCollection::new()
                .with(ParameterDef::Text(
                    TextParameter::new("apiKey", "API Key")
                        .described("API key for Helium Network Console")
                        .with_default("")
                        .sensitive(),
                ))
                .with(ParameterDef::Text(
                    TextParameter::new("baseUrl", "API Base URL")
                        .described("Base URL for Helium Network API")
                        .required()
                        .with_default(DEFAULT_BASE_URL),
                )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_uses_default_base_url() {
        let cred = HeliumApiCredential::anonymous();
        assert!(cred.api_key.is_none());
        assert_eq!(cred.base_url, "https://api.helium.io/v1");
    }

    #[test]
    fn with_api_key_and_base_url() {
        let cred = HeliumApiCredential::with_api_key("test-api-key")
            .with_base_url("https://staging.helium.example/v1");

        assert_eq!(cred.api_key.as_ref().unwrap().expose(), "test-api-key");
        assert_eq!(cred.base_url, "https://staging.helium.example/v1");
    }

    #[test]
    fn deserialize_full_credential() {
        let cred: HeliumApiCredential = serde_json::from_str(
            r#"{"apiKey": "secret", "baseUrl": "https://api.helium.io/v1"}"#,
        )
        .unwrap();

        assert_eq!(cred.api_key.as_ref().unwrap().expose(), "secret");
        assert_eq!(cred.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn deserialize_applies_base_url_default() {
        let cred: HeliumApiCredential = serde_json::from_str("{}").unwrap();
        assert!(cred.api_key.is_none());
        assert_eq!(cred.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn debug_redacts_api_key() {
        let cred = HeliumApiCredential::with_api_key("secret");
        let debug = format!("{cred:?}");
        assert!(debug.contains("ApiKey(***)"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn description_declares_both_fields() {
        let desc = CredentialDescription::helium_network_api();
        assert_eq!(desc.key, "heliumNetworkApi");
        assert!(desc.required);
        assert_eq!(desc.fields.len(), 2);

        let api_key = desc.fields.get_by_key("apiKey").unwrap();
        assert!(!api_key.is_required());
        assert!(api_key.metadata().sensitive);

        let base_url = desc.fields.get_by_key("baseUrl").unwrap();
        assert!(base_url.is_required());
        assert_eq!(
            base_url.default_value(),
            Some(serde_json::json!(DEFAULT_BASE_URL))
        );
    }
}
