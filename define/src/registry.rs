//! The model registry: a name-keyed arena of model descriptors.
//!
//! The registry is populated by the host framework during schema
//! translation and handed to the normalization passes, which mutate the
//! contained models in place. Iteration order is name order, so passes
//! over the registry are deterministic regardless of build order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Model;

/// Registration-time misuse of the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A model with the same name is already registered.
    #[error("model '{name}' is already registered")]
    DuplicateModel {
        /// The conflicting model name.
        name: String,
    },
}

/// Name to [`Model`] lookup, owned by the host and mutated by the
/// normalization passes.
///
/// ## Examples
///
/// ```
/// use polyform_define::{Model, Registry};
///
/// let mut registry = Registry::new();
/// registry.register(Model::new("Check")).unwrap();
/// assert!(registry.contains("Check"));
/// assert!(registry.register(Model::new("Check")).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    models: BTreeMap<String, Model>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model, rejecting duplicate names.
    ///
    /// ## Errors
    ///
    /// Returns [`RegistryError::DuplicateModel`] when a model with the
    /// same name is already present.
    pub fn register(&mut self, model: Model) -> Result<(), RegistryError> {
        if self.models.contains_key(&model.name) {
            return Err(RegistryError::DuplicateModel { name: model.name });
        }
        self.models.insert(model.name.clone(), model);
        Ok(())
    }

    /// Adds or replaces a model, returning any previous entry.
    pub fn insert(&mut self, model: Model) -> Option<Model> {
        self.models.insert(model.name.clone(), model)
    }

    /// Removes a model by name.
    pub fn remove(&mut self, name: &str) -> Option<Model> {
        self.models.remove(name)
    }

    /// Looks up a model by name.
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// Mutable lookup by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Model> {
        self.models.get_mut(name)
    }

    /// True when a model with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Registered model names, in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Iterates the registered models, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Mutable iteration over the registered models, in name order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Model> {
        self.models.values_mut()
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when no model is registered.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<Model> for Registry {
    /// Collects models into a registry; later models replace earlier
    /// ones with the same name.
    fn from_iter<I: IntoIterator<Item = Model>>(iter: I) -> Self {
        let mut registry = Self::new();
        for model in iter {
            registry.insert(model);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_duplicates() {
        let mut registry = Registry::new();
        registry.register(Model::new("Check")).unwrap();

        let err = registry.register(Model::new("Check")).unwrap_err();
        match err {
            RegistryError::DuplicateModel { name } => assert_eq!(name, "Check"),
        }
    }

    #[test]
    fn insert_replaces_and_returns_previous() {
        let mut registry = Registry::new();
        registry.register(Model::new("Check")).unwrap();

        let previous = registry.insert(Model::new("Check"));
        assert!(previous.is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn names_iterate_sorted() {
        let registry: Registry = ["ThresholdCheck", "Check", "DeadmanCheck"]
            .into_iter()
            .map(Model::new)
            .collect();

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["Check", "DeadmanCheck", "ThresholdCheck"]);
    }

    #[test]
    fn remove_then_lookup_misses() {
        let mut registry: Registry = [Model::new("Check")].into_iter().collect();
        assert!(registry.remove("Check").is_some());
        assert!(registry.get("Check").is_none());
        assert!(registry.is_empty());
    }
}
