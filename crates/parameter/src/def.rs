use serde::{Deserialize, Serialize};

use crate::kind::ParameterKind;
use crate::metadata::ParameterMetadata;
use crate::types::{DateTimeParameter, NumberParameter, SelectParameter, TextParameter};

/// A concrete parameter definition, tagged by kind.
///
/// The `type` field in JSON determines which variant is used during
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterDef {
    /// Free-form string input.
    Text(TextParameter),
    /// Numeric input.
    Number(NumberParameter),
    /// ISO 8601 date-time input.
    DateTime(DateTimeParameter),
    /// Single choice from an enumerated set.
    Select(SelectParameter),
}

impl ParameterDef {
    /// The unique key identifying this parameter.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.metadata().key
    }

    /// The human-readable display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata().name
    }

    /// The parameter kind.
    #[must_use]
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Text(_) => ParameterKind::Text,
            Self::Number(_) => ParameterKind::Number,
            Self::DateTime(_) => ParameterKind::DateTime,
            Self::Select(_) => ParameterKind::Select,
        }
    }

    /// Access the shared metadata for this parameter.
    #[must_use]
    pub fn metadata(&self) -> &ParameterMetadata {
        match self {
            Self::Text(p) => &p.metadata,
            Self::Number(p) => &p.metadata,
            Self::DateTime(p) => &p.metadata,
            Self::Select(p) => &p.metadata,
        }
    }

    /// Whether this parameter is required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.metadata().required
    }

    /// The declared default, as a JSON value.
    ///
    /// Returns `None` when the definition declares no default.
    #[must_use]
    pub fn default_value(&self) -> Option<serde_json::Value> {
        match self {
            Self::Text(p) => p.default.clone().map(serde_json::Value::from),
            Self::Number(p) => p.default.map(serde_json::Value::from),
            Self::DateTime(p) => p.default.clone().map(serde_json::Value::from),
            Self::Select(p) => p.default.clone(),
        }
    }
}
