use serde::{Deserialize, Serialize};

use crate::metadata::ParameterMetadata;

/// A single-line text input parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextParameter {
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// Default value used when the field is left empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl TextParameter {
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            default: None,
        }
    }

    /// Set the description shown as help text.
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = Some(description.into());
        self
    }

    /// Mark this parameter as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.metadata.required = true;
        self
    }

    /// Set the default value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the placeholder shown in the empty input field.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.metadata.placeholder = Some(placeholder.into());
        self
    }

    /// Mark the value as secret, masked in the UI and logs.
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.metadata.sensitive = true;
        self
    }
}
