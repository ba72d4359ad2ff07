//! Discriminator descriptors for polymorphic model families.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Describes how the variants of a polymorphic family are told apart.
///
/// `property_name` is the property every variant carries; `mapping`
/// associates each mapping key (the value that property takes on the
/// wire) with the variant model declaring it.
///
/// ## Examples
///
/// ```
/// use polyform_define::Discriminator;
///
/// let disc = Discriminator::new("type")
///     .map("deadman", "DeadmanCheck")
///     .map("threshold", "ThresholdCheck");
///
/// assert_eq!(disc.key_for("DeadmanCheck"), Some("deadman"));
/// assert_eq!(disc.key_for("CustomCheck"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discriminator {
    /// Property the variants are distinguished by.
    pub property_name: String,
    /// Mapping key to variant model name.
    pub mapping: BTreeMap<String, String>,
}

impl Discriminator {
    /// Creates a discriminator on the given property with an empty mapping.
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            mapping: BTreeMap::new(),
        }
    }

    /// Adds a mapping entry from key to variant model name.
    pub fn map(mut self, key: impl Into<String>, model: impl Into<String>) -> Self {
        self.mapping.insert(key.into(), model.into());
        self
    }

    /// Returns the mapping key whose value is the given model name.
    pub fn key_for(&self, model_name: &str) -> Option<&str> {
        self.mapping
            .iter()
            .find(|(_, model)| model.as_str() == model_name)
            .map(|(key, _)| key.as_str())
    }
}
