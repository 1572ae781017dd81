//! Parameter resolution port and typed readers.
//!
//! The host owns parameter storage and expression evaluation; the node
//! only ever asks "what is the value of `key` for item `i`". Typed
//! readers on top of the port convert a missing required value into a
//! [`NodeError::Validation`] instead of silently defaulting.

use serde_json::Value;

use crate::error::NodeError;

/// Port trait for resolving a named parameter value for one input item.
///
/// Implemented by the host runtime. Returning `None` means the user left
/// the field untouched; typed readers then apply the declared default or
/// fail, depending on whether the parameter is required.
pub trait ParameterResolver: Send + Sync {
    /// The value of `key` for the item at `item_index`, if any.
    fn resolve(&self, key: &str, item_index: usize) -> Option<Value>;
}

/// Typed parameter reads for a single item, bound to its index.
///
/// Thin view over a [`ParameterResolver`]; request builders take one of
/// these instead of threading the resolver and index separately.
#[derive(Clone, Copy)]
pub struct ItemParameters<'a> {
    resolver: &'a dyn ParameterResolver,
    index: usize,
}

impl<'a> ItemParameters<'a> {
    /// Bind a resolver to one item index.
    #[must_use]
    pub fn new(resolver: &'a dyn ParameterResolver, index: usize) -> Self {
        Self { resolver, index }
    }

    /// The index of the item these parameters belong to.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// A required string value. Missing or non-string is a caller error.
    pub fn required_string(&self, key: &str) -> Result<String, NodeError> {
        match self.resolver.resolve(key, self.index) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(NodeError::validation(format!(
                "parameter `{key}` must be a string, got {other}"
            ))),
            None => Err(NodeError::missing_parameter(key)),
        }
    }

    /// An optional string value, falling back to the declared default.
    pub fn optional_string(&self, key: &str, default: &str) -> Result<String, NodeError> {
        match self.resolver.resolve(key, self.index) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(NodeError::validation(format!(
                "parameter `{key}` must be a string, got {other}"
            ))),
            None => Ok(default.to_owned()),
        }
    }

    /// A required numeric value.
    pub fn required_number(&self, key: &str) -> Result<f64, NodeError> {
        match self.resolver.resolve(key, self.index) {
            Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
                NodeError::validation(format!("parameter `{key}` is not a finite number"))
            }),
            Some(other) => Err(NodeError::validation(format!(
                "parameter `{key}` must be a number, got {other}"
            ))),
            None => Err(NodeError::missing_parameter(key)),
        }
    }

    /// An optional numeric value, falling back to the declared default.
    pub fn optional_number(&self, key: &str, default: f64) -> Result<f64, NodeError> {
        match self.resolver.resolve(key, self.index) {
            Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
                NodeError::validation(format!("parameter `{key}` is not a finite number"))
            }),
            Some(other) => Err(NodeError::validation(format!(
                "parameter `{key}` must be a number, got {other}"
            ))),
            None => Ok(default),
        }
    }
}

impl std::fmt::Debug for ItemParameters<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemParameters")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// "Empty string means unset" policy for optional string parameters.
///
/// The upstream API treats an empty cursor/time filter as absent, so an
/// empty value must not appear in the query string at all.
#[must_use]
pub fn omit_if_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// "Zero means unset" policy for optional numeric parameters.
///
/// Inherited wire behavior: `limit`, `lat` and `lng` at exactly `0` are
/// dropped from the query or body. A legitimate latitude/longitude of
/// exactly 0 therefore cannot be sent through fields using this policy —
/// a known limitation of the upstream contract, kept intentionally.
#[must_use]
pub fn omit_if_zero(value: f64) -> Option<f64> {
    if value == 0.0 { None } else { Some(value) }
}

/// Format a numeric parameter for a query string or URL path segment.
///
/// Integral values print without a trailing `.0` (`100`, not `100.0`),
/// matching how the original templated numbers into URLs.
#[must_use]
pub fn format_number(value: f64) -> String {
    value.to_string()
}
