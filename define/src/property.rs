//! Property descriptors for schema-derived models.
//!
//! A [`Property`] describes a single field of a generated model: its wire
//! name, target-language datatype, and the flags the rendering stage reads
//! (required, read-only, enum, last-in-list). Properties are owned by a
//! [`Model`](crate::Model) and are identified by `base_name` within it.

use serde::{Deserialize, Serialize};

/// A single property of a generated model.
///
/// Within a model, a property's identity is its `base_name` (the wire
/// name as it appears in the source schema). `name` is the language-level
/// field name and usually matches `base_name` unless the generator
/// rewrote it.
///
/// ## Examples
///
/// ```
/// use polyform_define::Property;
///
/// let level = Property::new("level", "CheckStatusLevel")
///     .required()
///     .enumerated();
///
/// assert_eq!(level.base_name, "level");
/// assert!(level.required);
/// assert!(level.default_value.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Language-level field name.
    pub name: String,
    /// Wire name from the source schema; property identity within a model.
    pub base_name: String,
    /// Target-language datatype hint (e.g. `"String"`, `"CheckStatusLevel"`).
    ///
    /// Used when formatting enum-constant defaults, where the constant is
    /// qualified by the datatype.
    pub datatype: String,
    /// Whether the source schema lists this property as required.
    pub required: bool,
    /// Whether the property is an enumeration.
    pub is_enum: bool,
    /// Read-only properties are emitted by the server and cannot be
    /// re-assigned in a flattened initializer.
    pub read_only: bool,
    /// Rendering flag: true for every property except the last in its list.
    pub has_more: bool,
    /// Resolved default value in target-language literal syntax.
    pub default_value: Option<String>,
}

impl Property {
    /// Creates a property with `name` doubling as the wire name.
    pub fn new(name: impl Into<String>, datatype: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            base_name: name.clone(),
            name,
            datatype: datatype.into(),
            required: false,
            is_enum: false,
            read_only: false,
            has_more: false,
            default_value: None,
        }
    }

    /// Sets a wire name differing from the field name.
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    /// Marks the property as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the property as an enumeration.
    pub fn enumerated(mut self) -> Self {
        self.is_enum = true;
        self
    }

    /// Marks the property as read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Sets the default value literal.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}
