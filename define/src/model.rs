//! Model descriptors: the nodes of the registry graph the normalizer
//! mutates.
//!
//! A [`Model`] owns its property list and refers to related models by
//! registry name only. Parent and child links are stable string IDs into
//! the [`Registry`](crate::Registry), never live references, so models
//! can be removed or replaced without dangling pointers.
//!
//! The required, read-write and read-only subsets of the property list
//! are derived views over `vars`, as are the aggregate flags
//! ([`Model::has_required`], [`Model::has_only_read_only`]). Only the
//! projected parent variables in [`Extensions`] are a stored list,
//! because renderers consume them as an independently mutated sequence.

use serde::{Deserialize, Serialize};

use crate::discriminator::Discriminator;
use crate::property::Property;

/// Auxiliary annotations attached to a model for the rendering stage.
///
/// `parent_vars` is the flattened view of inherited properties used by
/// renderers without native inheritance. Every entry is a clone owned by
/// this model; mutating it never affects the model it was projected from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extensions {
    /// True when `parent_vars` is non-empty.
    pub has_parent_vars: bool,
    /// Cloned, ordered list of inherited properties.
    pub parent_vars: Vec<Property>,
    /// Output-file identifier of the parent model.
    pub parent_filename: Option<String>,
    /// The resolved discriminator mapping key for a variant model.
    pub discriminator_value: Option<String>,
}

/// A named, schema-derived model descriptor.
///
/// ## Examples
///
/// ```
/// use polyform_define::{Model, Property};
///
/// let base = Model::new("CheckBase")
///     .with_var(Property::new("id", "String").read_only())
///     .with_var(Property::new("name", "String").required());
///
/// assert!(base.has_required());
/// assert_eq!(base.read_write_vars().count(), 1);
/// assert_eq!(base.class_filename(), "check_base");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Registry name of this model.
    pub name: String,
    /// Ordered property list; the single source of truth for all subsets.
    pub vars: Vec<Property>,
    /// Registry name of the parent model, if any.
    pub parent: Option<String>,
    /// Registry names of the child models.
    pub children: Vec<String>,
    /// Discriminator carried by this model, if it is a family root or
    /// an intermediate discriminator bearer.
    pub discriminator: Option<Discriminator>,
    /// Rendering annotations.
    pub extensions: Extensions,
}

impl Model {
    /// Creates an empty model with the given registry name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vars: Vec::new(),
            parent: None,
            children: Vec::new(),
            discriminator: None,
            extensions: Extensions::default(),
        }
    }

    /// Appends a property, keeping `has_more` flags consistent.
    pub fn with_var(mut self, var: Property) -> Self {
        self.push_var(var);
        self
    }

    /// Attaches a discriminator descriptor.
    pub fn with_discriminator(mut self, discriminator: Discriminator) -> Self {
        self.discriminator = Some(discriminator);
        self
    }

    /// Appends a property, keeping `has_more` flags consistent.
    pub fn push_var(&mut self, var: Property) {
        self.vars.push(var);
        mark_has_more(&mut self.vars);
    }

    /// Removes the property with the given base name, if declared.
    pub fn remove_var(&mut self, base_name: &str) -> Option<Property> {
        let index = self.vars.iter().position(|v| v.base_name == base_name)?;
        let removed = self.vars.remove(index);
        mark_has_more(&mut self.vars);
        Some(removed)
    }

    /// Returns the declared property with the given base name.
    pub fn var(&self, base_name: &str) -> Option<&Property> {
        self.vars.iter().find(|v| v.base_name == base_name)
    }

    /// Mutable access to the declared property with the given base name.
    pub fn var_mut(&mut self, base_name: &str) -> Option<&mut Property> {
        self.vars.iter_mut().find(|v| v.base_name == base_name)
    }

    /// True when the model declares a property with the given base name.
    pub fn declares(&self, base_name: &str) -> bool {
        self.var(base_name).is_some()
    }

    /// The required subset of `vars`, in declaration order.
    pub fn required_vars(&self) -> impl Iterator<Item = &Property> {
        self.vars.iter().filter(|v| v.required)
    }

    /// The writable subset of `vars`, in declaration order.
    pub fn read_write_vars(&self) -> impl Iterator<Item = &Property> {
        self.vars.iter().filter(|v| !v.read_only)
    }

    /// The read-only subset of `vars`, in declaration order.
    pub fn read_only_vars(&self) -> impl Iterator<Item = &Property> {
        self.vars.iter().filter(|v| v.read_only)
    }

    /// True when at least one declared property is required.
    pub fn has_required(&self) -> bool {
        self.vars.iter().any(|v| v.required)
    }

    /// True when the model declares properties and all are read-only.
    pub fn has_only_read_only(&self) -> bool {
        !self.vars.is_empty() && self.vars.iter().all(|v| v.read_only)
    }

    /// True when the model has registered child models.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Output-file identifier derived from the model name.
    ///
    /// ## Examples
    ///
    /// ```
    /// use polyform_define::Model;
    ///
    /// assert_eq!(Model::new("DeadmanCheck").class_filename(), "deadman_check");
    /// assert_eq!(
    ///     Model::new("HTTPNotificationEndpoint").class_filename(),
    ///     "http_notification_endpoint"
    /// );
    /// ```
    pub fn class_filename(&self) -> String {
        to_snake_case(&self.name)
    }
}

/// Re-marks the not-last-in-list flag after any list mutation.
fn mark_has_more(vars: &mut [Property]) {
    let len = vars.len();
    for (index, var) in vars.iter_mut().enumerate() {
        var.has_more = index + 1 < len;
    }
}

/// Converts a PascalCase model name to snake_case, keeping acronym runs
/// together ("HTTPClient" becomes "http_client").
fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        let starts_word = c.is_uppercase()
            && i > 0
            && (chars[i - 1].is_lowercase()
                || chars[i - 1].is_ascii_digit()
                || (i + 1 < chars.len() && chars[i + 1].is_lowercase() && chars[i - 1].is_uppercase()));
        if starts_word {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> Model {
        Model::new("CheckBase")
            .with_var(Property::new("id", "String").read_only())
            .with_var(Property::new("name", "String").required())
            .with_var(Property::new("status", "String"))
    }

    #[test]
    fn push_var_marks_has_more() {
        let model = sample_model();
        assert!(model.vars[0].has_more);
        assert!(model.vars[1].has_more);
        assert!(!model.vars[2].has_more);
    }

    #[test]
    fn remove_var_remarks_has_more() {
        let mut model = sample_model();
        let removed = model.remove_var("status").unwrap();
        assert_eq!(removed.base_name, "status");
        assert!(model.vars[0].has_more);
        assert!(!model.vars[1].has_more);
        assert!(model.remove_var("status").is_none());
    }

    #[test]
    fn derived_subsets_follow_flags() {
        let model = sample_model();
        let required: Vec<_> = model.required_vars().map(|v| v.base_name.as_str()).collect();
        assert_eq!(required, ["name"]);
        let writable: Vec<_> = model.read_write_vars().map(|v| v.base_name.as_str()).collect();
        assert_eq!(writable, ["name", "status"]);
        assert!(model.has_required());
        assert!(!model.has_only_read_only());
    }

    #[test]
    fn has_only_read_only_requires_nonempty_vars() {
        assert!(!Model::new("Empty").has_only_read_only());
        let model = Model::new("Links")
            .with_var(Property::new("self", "String").read_only())
            .with_var(Property::new("next", "String").read_only());
        assert!(model.has_only_read_only());
    }

    #[test]
    fn class_filename_snake_cases_acronyms() {
        assert_eq!(Model::new("Check").class_filename(), "check");
        assert_eq!(Model::new("PostCheck").class_filename(), "post_check");
        assert_eq!(
            Model::new("PagerDutyNotificationEndpoint").class_filename(),
            "pager_duty_notification_endpoint"
        );
        assert_eq!(Model::new("HTTPClient").class_filename(), "http_client");
    }

    #[test]
    fn extensions_default_is_empty() {
        let model = Model::new("Check");
        assert!(!model.extensions.has_parent_vars);
        assert!(model.extensions.parent_vars.is_empty());
        assert!(model.extensions.parent_filename.is_none());
        assert!(model.extensions.discriminator_value.is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let model = sample_model().with_discriminator(
            crate::Discriminator::new("type").map("deadman", "DeadmanCheck"),
        );
        let json = serde_json::to_string(&model).unwrap();
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}
