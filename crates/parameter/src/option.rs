use serde::{Deserialize, Serialize};

/// A single choice in a select parameter's enumerated set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Human-readable display label (e.g. `"Day"`).
    pub name: String,

    /// The value produced when this option is selected (e.g. `"day"`).
    pub value: serde_json::Value,

    /// Optional tooltip or help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SelectOption {
    /// Create a new option with the given label and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: None,
        }
    }
}
