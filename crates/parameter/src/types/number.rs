use serde::{Deserialize, Serialize};

use crate::metadata::ParameterMetadata;

/// Options specific to number parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberOptions {
    /// Minimum allowed value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Maximum allowed value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// A numeric input parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberParameter {
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// Default value used when the field is left untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<NumberOptions>,
}

impl NumberParameter {
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            default: None,
            options: None,
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
    pub fn with_default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }

    /// Constrain the accepted range.
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.options = Some(NumberOptions {
            min: Some(min),
            max: Some(max),
        });
        self
    }
}
