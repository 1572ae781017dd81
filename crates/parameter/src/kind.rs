use serde::{Deserialize, Serialize};

/// The kind of a parameter, determining its UI widget and value semantics.
///
/// The Helium node declares exactly four kinds: free-form strings,
/// numbers, ISO 8601 date-times, and single choices from an enumerated
/// set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    /// Single-line text input.
    Text,
    /// Numeric input.
    Number,
    /// Date and time picker, carried on the wire as an ISO 8601 string.
    DateTime,
    /// Single choice from an enumerated option set.
    Select,
}

impl ParameterKind {
    /// The wire name of this kind, as used in serialized schemas.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::DateTime => "date_time",
            Self::Select => "select",
        }
    }
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
