use serde::{Deserialize, Serialize};

use crate::def::ParameterDef;

/// An ordered collection of parameter definitions.
///
/// Order matters: the host renders fields in declaration order, and the
/// dispatcher reads them in the same order the original node declares.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterCollection {
    parameters: Vec<ParameterDef>,
}

impl ParameterCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter definition (builder-style, consuming).
    #[must_use]
    pub fn with(mut self, param: ParameterDef) -> Self {
        self.parameters.push(param);
        self
    }

    /// Add a parameter definition in place.
    pub fn add(&mut self, param: ParameterDef) -> &mut Self {
        self.parameters.push(param);
        self
    }

    /// Get a parameter by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ParameterDef> {
        self.parameters.get(index)
    }

    /// Get a parameter by its key.
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<&ParameterDef> {
        self.parameters.iter().find(|p| p.key() == key)
    }

    /// Check whether a parameter with the given key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.parameters.iter().any(|p| p.key() == key)
    }

    /// Iterate over all parameter keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(ParameterDef::key)
    }

    /// Iterate over the required parameters only.
    pub fn required(&self) -> impl Iterator<Item = &ParameterDef> {
        self.parameters.iter().filter(|p| p.is_required())
    }

    /// The number of parameters in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Iterate over all parameter definitions.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterDef> {
        self.parameters.iter()
    }
}

impl IntoIterator for ParameterCollection {
    type Item = ParameterDef;
    type IntoIter = std::vec::IntoIter<ParameterDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterCollection {
    type Item = &'a ParameterDef;
    type IntoIter = std::slice::Iter<'a, ParameterDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

impl FromIterator<ParameterDef> for ParameterCollection {
    fn from_iter<I: IntoIterator<Item = ParameterDef>>(iter: I) -> Self {
        Self {
            parameters: iter.into_iter().collect(),
        }
    }
}
