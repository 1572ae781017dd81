use serde::{Deserialize, Serialize};

use crate::metadata::ParameterMetadata;

/// A date-and-time picker parameter.
///
/// Values are carried as ISO 8601 strings end to end; the remote API
/// consumes them verbatim, so no parsing happens at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTimeParameter {
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// Default value (ISO 8601), used when the field is left empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl DateTimeParameter {
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
}
