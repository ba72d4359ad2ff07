//! Parent-variable projection.
//!
//! Renderers without native inheritance consume a model's "parent vars":
//! a flattened, cloned view of the properties it inherits. Projection
//! always clones, so per-model rendering mutation (list flags, resolved
//! defaults) never leaks between models sharing an ancestor.

use polyform_define::{Model, Property};

/// Projects `source_vars` onto `target` as its inherited-property view.
///
/// Clones every source property in order, drops clones whose base name
/// collides with a read-only property `target` declares itself (a
/// property cannot be inherited and overridden once the child declares it
/// read-only), re-marks the not-last-in-list flags, and records the list
/// together with the parent's output-file identifier on
/// `target.extensions`. `source_vars` is never mutated.
///
/// ## Examples
///
/// ```
/// use polyform_define::{Model, Property};
/// use polyform_gen::parent_vars::project_parent_vars;
///
/// let base = Model::new("CheckBase")
///     .with_var(Property::new("name", "String").required())
///     .with_var(Property::new("status", "String"));
/// let mut leaf = Model::new("DeadmanCheck");
///
/// let source: Vec<Property> = base.read_write_vars().cloned().collect();
/// project_parent_vars(&mut leaf, &base, &source);
///
/// assert!(leaf.extensions.has_parent_vars);
/// assert_eq!(leaf.extensions.parent_vars.len(), 2);
/// assert_eq!(leaf.extensions.parent_filename.as_deref(), Some("check_base"));
/// ```
pub fn project_parent_vars(target: &mut Model, parent: &Model, source_vars: &[Property]) {
    let shadowed: Vec<String> = target
        .read_only_vars()
        .map(|v| v.base_name.clone())
        .collect();

    let mut projected: Vec<Property> = source_vars
        .iter()
        .filter(|v| !shadowed.iter().any(|s| s == &v.base_name))
        .cloned()
        .collect();
    mark_has_more(&mut projected);

    target.extensions.has_parent_vars = !projected.is_empty();
    target.extensions.parent_vars = projected;
    target.extensions.parent_filename = Some(parent.class_filename());
}

/// Merges two property lists, de-duplicating by base name.
///
/// Keeps every `primary` entry, appends the `secondary` entries whose
/// base name is not already present, and re-marks the not-last-in-list
/// flags on the merged clones.
pub fn merge_unique(primary: &[Property], secondary: &[Property]) -> Vec<Property> {
    let mut merged: Vec<Property> = primary.to_vec();
    for var in secondary {
        if !merged.iter().any(|m| m.base_name == var.base_name) {
            merged.push(var.clone());
        }
    }
    mark_has_more(&mut merged);
    merged
}

fn mark_has_more(vars: &mut [Property]) {
    let len = vars.len();
    for (index, var) in vars.iter_mut().enumerate() {
        var.has_more = index + 1 < len;
    }
}
