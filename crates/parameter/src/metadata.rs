use serde::{Deserialize, Serialize};

/// Descriptive metadata shared by every parameter definition.
///
/// This is the human-facing half of a definition: the machine key the
/// resolver is queried with, the label and help text the editor renders,
/// and the required flag the host enforces before dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMetadata {
    /// Key the parameter resolver is queried with (e.g. `"cursor"`).
    pub key: String,

    /// Human-readable display name (e.g. `"Cursor"`).
    pub name: String,

    /// Longer description shown as tooltip or help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the user must provide a value.
    #[serde(default)]
    pub required: bool,

    /// Placeholder text shown in empty input fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Whether the value should be masked in the UI and logs.
    #[serde(default)]
    pub sensitive: bool,
}

impl ParameterMetadata {
    /// Create metadata with the required key and display name.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}
