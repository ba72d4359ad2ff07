//! Inheritance and discriminator normalization for one polymorphic
//! model family.
//!
//! Schema translation leaves a discriminated one-of family as a loose
//! set of layered models: a root, a `<Root>Base` model with the shared
//! fields, often an intermediate `<Root>Discriminator` model carrying
//! the descriptor, leaf variants, per-variant `<Leaf>Base` models and a
//! `Post<Root>` request sibling. [`normalize_family`] rewrites that set
//! into one of two consistent topologies, selected by
//! [`Capabilities::compile_time_inheritance`]:
//!
//! - **compile-time**: a real parent chain (root to sub-base to leaf) is
//!   rebuilt, an intermediate bearer is stripped of the descriptor, and
//!   the discriminator property stays declared exactly once along each
//!   leaf's chain
//! - **flattened**: no parent chain survives; every leaf and the root
//!   self-declare the discriminator property, and each leaf's inherited
//!   fields are projected into its parent-vars extension
//!
//! In both modes every leaf ends up with the discriminator property's
//! default value resolved to its own mapping key, formatted for the
//! target by [`EnumDefaultStyle::format`](polyform_define::EnumDefaultStyle::format).
//!
//! Normalization mutates the registry in place and is not idempotent:
//! it assumes a fresh, pre-normalized family, and re-running it on the
//! same family is unsupported (with a separate discriminator model the
//! second run fails fast, because the bearer's descriptor was cleared).

use polyform_define::{Capabilities, Model, Property, Registry};

use crate::errors::NormalizerError;
use crate::parent_vars::{merge_unique, project_parent_vars};

/// Normalizes the polymorphic family rooted at `root`.
///
/// `variant_prefixes` lists the family's variants in rendering order;
/// each prefix combined with the root names a leaf model
/// (`"Deadman"` + `"Check"` resolves `DeadmanCheck`). The registry must
/// contain the root, its `<root>Base` model and every leaf; the
/// `<root>Discriminator` model, per-leaf `<leaf>Base` models and the
/// `Post<root>` sibling are picked up when present.
///
/// On failure the registry is left as mutated so far: leaves are
/// processed independently, so a failure on one leaf keeps the prior
/// leaves' mutations (best-effort, not atomic).
///
/// ## Examples
///
/// ```
/// use polyform_define::Capabilities;
/// use polyform_definitions::{CHECK_VARIANTS, define_check_family};
/// use polyform_gen::inheritance::normalize_family;
///
/// let mut registry = define_check_family();
/// normalize_family("Check", CHECK_VARIANTS, &mut registry, &Capabilities::python()).unwrap();
///
/// let deadman = registry.get("DeadmanCheck").unwrap();
/// assert_eq!(
///     deadman.var("type").unwrap().default_value.as_deref(),
///     Some("\"deadman\"")
/// );
/// assert!(registry.get("Check").unwrap().parent.is_none());
/// ```
///
/// ## Errors
///
/// - [`NormalizerError::MissingModel`] - the root, its base, or a leaf
///   is absent from the registry
/// - [`NormalizerError::MissingDiscriminator`] - the resolved bearer has
///   no discriminator descriptor
/// - [`NormalizerError::UnmappedVariant`] - a leaf is not listed in the
///   discriminator mapping table
/// - [`NormalizerError::MissingDiscriminatorProperty`] - a leaf declares
///   the discriminator property neither itself nor through its inherited
///   parent vars
pub fn normalize_family(
    root: &str,
    variant_prefixes: &[&str],
    registry: &mut Registry,
    capabilities: &Capabilities,
) -> Result<(), NormalizerError> {
    tracing::debug!(
        "normalizing family '{root}' with {} variants",
        variant_prefixes.len()
    );

    // Step 1: resolve the discriminator bearer.
    let base_name = format!("{root}Base");
    lookup(registry, root, root)?;
    let base = lookup(registry, root, &base_name)?.clone();

    let bearer_name = {
        let candidate = format!("{root}Discriminator");
        if registry.contains(&candidate) {
            candidate
        } else {
            root.to_string()
        }
    };
    let discriminator = lookup(registry, root, &bearer_name)?
        .discriminator
        .clone()
        .ok_or_else(|| NormalizerError::MissingDiscriminator {
            family: root.to_string(),
            bearer: bearer_name.clone(),
        })?;
    tracing::debug!("family '{root}': discriminator bearer is '{bearer_name}'");

    // Step 2: reset the bearer and re-parent it onto the base.
    {
        let source: Vec<Property> = base.read_write_vars().cloned().collect();
        let bearer = lookup_mut(registry, root, &bearer_name)?;
        bearer.children.clear();
        bearer.parent = Some(base_name.clone());
        project_parent_vars(bearer, &base, &source);
    }

    // Step 3: attach each variant.
    for prefix in variant_prefixes {
        let leaf_name = format!("{prefix}{root}");
        lookup(registry, root, &leaf_name)?;

        let sub_base_name = format!("{leaf_name}Base");
        let sub_base = registry.get(&sub_base_name).cloned();

        // The leaf's flattened view: sub-base fields first, then the
        // shared base fields it does not already cover.
        if let Some(sub_base) = &sub_base {
            let source = merge_unique(&sub_base.vars, &base.vars);
            let leaf = lookup_mut(registry, root, &leaf_name)?;
            leaf.parent = Some(sub_base_name.clone());
            project_parent_vars(leaf, sub_base, &source);
        }

        // Re-parent the attachment point (sub-base when present, the
        // leaf itself otherwise).
        let attachment_name = if sub_base.is_some() {
            sub_base_name
        } else {
            leaf_name.clone()
        };

        if capabilities.compile_time_inheritance {
            let root_model = lookup(registry, root, root)?.clone();
            let seed = root_model.extensions.parent_vars.clone();
            let attachment = lookup_mut(registry, root, &attachment_name)?;
            attachment.parent = Some(root.to_string());
            project_parent_vars(attachment, &root_model, &seed);
        } else {
            let bearer_model = lookup(registry, root, &bearer_name)?.clone();
            let source: Vec<Property> = base.read_write_vars().cloned().collect();
            let attachment = lookup_mut(registry, root, &attachment_name)?;
            attachment.parent = Some(bearer_name.clone());
            project_parent_vars(attachment, &bearer_model, &source);
        }

        // Link the attachment point into the chain owner's parent-vars
        // chain, so chained Base levels neither drop nor duplicate
        // inherited fields.
        if attachment_name != bearer_name {
            let chain_owner = if capabilities.compile_time_inheritance {
                root
            } else {
                bearer_name.as_str()
            };
            let owner_vars = lookup(registry, root, chain_owner)?
                .extensions
                .parent_vars
                .clone();
            let attachment = lookup_mut(registry, root, &attachment_name)?;
            attachment.extensions.parent_vars =
                merge_unique(&attachment.extensions.parent_vars, &owner_vars);
            attachment.extensions.has_parent_vars =
                !attachment.extensions.parent_vars.is_empty();
        }

        // Resolve the mapping key and pin the discriminator property's
        // default to it.
        let key = discriminator
            .key_for(&leaf_name)
            .ok_or_else(|| NormalizerError::UnmappedVariant {
                family: root.to_string(),
                variant: leaf_name.clone(),
                bearer: bearer_name.clone(),
            })?
            .to_string();

        let property = discriminator.property_name.as_str();
        let style = capabilities.enum_default;
        let leaf = lookup_mut(registry, root, &leaf_name)?;
        let own_index = leaf
            .vars
            .iter()
            .position(|v| v.required && v.base_name == property);
        if let Some(index) = own_index {
            let var = &mut leaf.vars[index];
            var.default_value = Some(style.format(&key, &var.datatype));
        } else if let Some(var) = leaf
            .extensions
            .parent_vars
            .iter_mut()
            .find(|v| v.required && v.base_name == property)
        {
            var.default_value = Some(style.format(&key, &var.datatype));
        } else {
            return Err(NormalizerError::MissingDiscriminatorProperty {
                family: root.to_string(),
                model: leaf_name,
                property: property.to_string(),
            });
        }

        leaf.extensions.discriminator_value = Some(key.clone());
        tracing::debug!("family '{root}': variant '{leaf_name}' resolved to key '{key}'");
    }

    // Step 4: the root, and a Post sibling when present, become the
    // rendering roots of the family.
    let children: Vec<String> = variant_prefixes
        .iter()
        .map(|prefix| format!("{prefix}{root}"))
        .collect();
    let mut family_roots = vec![root.to_string()];
    let post_name = format!("Post{root}");
    if registry.contains(&post_name) {
        family_roots.push(post_name);
    }
    for name in &family_roots {
        let model = lookup_mut(registry, root, name)?;
        model.discriminator = Some(discriminator.clone());
        model.children = children.clone();
    }

    // Step 5: flattened targets have no base class to extend. No parent
    // link survives anywhere in the family, the rendering roots
    // self-declare the discriminator property (cloned from the bearer),
    // and each leaf self-declares it from its resolved inherited clone.
    if !capabilities.compile_time_inheritance {
        let bearer_prop = lookup(registry, root, &bearer_name)?
            .var(&discriminator.property_name)
            .cloned();
        for name in &family_roots {
            let model = lookup_mut(registry, root, name)?;
            model.parent = None;
            if !model.declares(&discriminator.property_name) {
                let prop = bearer_prop.clone().ok_or_else(|| {
                    NormalizerError::MissingDiscriminatorProperty {
                        family: root.to_string(),
                        model: bearer_name.clone(),
                        property: discriminator.property_name.clone(),
                    }
                })?;
                model.push_var(prop);
            }
        }

        let mut members = vec![base_name.clone(), bearer_name.clone()];
        for prefix in variant_prefixes {
            let leaf_name = format!("{prefix}{root}");
            let sub_base_name = format!("{leaf_name}Base");
            if registry.contains(&sub_base_name) {
                members.push(sub_base_name);
            }
            members.push(leaf_name);
        }
        for name in &members {
            let model = lookup_mut(registry, root, name)?;
            model.parent = None;
        }

        for prefix in variant_prefixes {
            let leaf_name = format!("{prefix}{root}");
            let leaf = lookup_mut(registry, root, &leaf_name)?;
            if !leaf.declares(&discriminator.property_name) {
                // the inherited clone already carries the resolved default
                let inherited = leaf
                    .extensions
                    .parent_vars
                    .iter()
                    .find(|v| v.base_name == discriminator.property_name)
                    .cloned();
                if let Some(var) = inherited {
                    leaf.push_var(var);
                }
            }
        }
    }

    // Step 6: an intermediate bearer no longer declares the property or
    // the descriptor; both now live on the leaves or the roots.
    if bearer_name != base_name && bearer_name != root {
        let bearer = lookup_mut(registry, root, &bearer_name)?;
        bearer.remove_var(&discriminator.property_name);
        bearer.discriminator = None;
    }

    Ok(())
}

fn lookup<'a>(
    registry: &'a Registry,
    family: &str,
    name: &str,
) -> Result<&'a Model, NormalizerError> {
    registry.get(name).ok_or_else(|| NormalizerError::MissingModel {
        family: family.to_string(),
        model: name.to_string(),
    })
}

fn lookup_mut<'a>(
    registry: &'a mut Registry,
    family: &str,
    name: &str,
) -> Result<&'a mut Model, NormalizerError> {
    registry
        .get_mut(name)
        .ok_or_else(|| NormalizerError::MissingModel {
            family: family.to_string(),
            model: name.to_string(),
        })
}
