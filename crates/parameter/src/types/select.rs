use serde::{Deserialize, Serialize};

use crate::metadata::ParameterMetadata;
use crate::option::SelectOption;

/// A single-choice dropdown parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectParameter {
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// Default selection, matching one of the option values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    /// The enumerated choices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl SelectParameter {
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            default: None,
            options: Vec::new(),
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

    /// Set the default selection.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<serde_json::Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Add one choice to the enumerated set.
    #[must_use]
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    /// Declare the full choice set from `(name, value)` pairs.
    #[must_use]
    pub fn with_choices<I, N, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.options
            .extend(choices.into_iter().map(|(n, v)| SelectOption::new(n, v)));
        self
    }
}
