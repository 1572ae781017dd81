use helium_credential::CredentialError;

/// Error type for node execution.
///
/// Distinguishes caller mistakes (missing parameters, unknown selectors)
/// from remote rejections and plain transport failures so the batch
/// driver can classify the first failure in fail-fast mode.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum NodeError {
    /// A required parameter is missing or a selector could not be
    /// resolved. Caller error; never retried, never defaulted.
    #[error("validation: {0}")]
    Validation(String),

    /// The remote API rejected the request. Carries the response status
    /// when one was received and the structured error body verbatim when
    /// the API sent one.
    #[error("api: {message}")]
    Api {
        /// Human-readable message, usually lifted from the error body.
        message: String,
        /// HTTP status code, when the failure carries one.
        status: Option<u16>,
        /// Structured error body, surfaced verbatim when available.
        body: Option<serde_json::Value>,
    },

    /// The HTTP client could not complete the call at all.
    #[error("transport: {0}")]
    Transport(String),

    /// Credential resolution failed before any item was processed.
    #[error("credential: {0}")]
    Credential(String),
}

impl NodeError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an API error with no status or body.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            status: None,
            body: None,
        }
    }

    /// Create an API error carrying the response status and body.
    pub fn api_response(
        message: impl Into<String>,
        status: u16,
        body: Option<serde_json::Value>,
    ) -> Self {
        Self::Api {
            message: message.into(),
            status: Some(status),
            body,
        }
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Error for a missing required parameter.
    pub fn missing_parameter(key: &str) -> Self {
        Self::Validation(format!("required parameter `{key}` is missing"))
    }

    /// The bare human-readable message, without the kind prefix.
    ///
    /// This is what continue-on-fail output records carry in their
    /// `error` field.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::Transport(msg) | Self::Credential(msg) => msg,
            Self::Api { message, .. } => message,
        }
    }

    /// Returns `true` for remote API rejections.
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns `true` for caller errors.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The response status, when the failure carries one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<CredentialError> for NodeError {
    fn from(err: CredentialError) -> Self {
        Self::Credential(err.to_string())
    }
}
