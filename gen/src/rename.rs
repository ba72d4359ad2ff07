//! Registry-level model renaming.
//!
//! Translation often produces awkward or colliding model names
//! (`RetentionRule` where the client wants `BucketRetentionRules`,
//! `UserResponse` where it wants `User`). Renaming re-keys the model and
//! rewrites every reference to it, so later passes and the rendering
//! stage only ever see the final name.

use polyform_define::Registry;

use crate::errors::NormalizerError;

/// Renames a model and rewrites all references to it.
///
/// Rewritten references: parent links, child lists, discriminator
/// mapping values, property datatypes (own, and projected parent vars)
/// and the projected parent-filename annotation. Renaming a model to its
/// own name is a no-op.
///
/// ## Examples
///
/// ```
/// use polyform_define::{Model, Property, Registry};
/// use polyform_gen::rename::rename_model;
///
/// let mut registry: Registry = [
///     Model::new("RetentionRule"),
///     Model::new("Bucket").with_var(Property::new("retentionRules", "RetentionRule")),
/// ]
/// .into_iter()
/// .collect();
///
/// rename_model(&mut registry, "RetentionRule", "BucketRetentionRules").unwrap();
///
/// assert!(registry.contains("BucketRetentionRules"));
/// let bucket = registry.get("Bucket").unwrap();
/// assert_eq!(bucket.var("retentionRules").unwrap().datatype, "BucketRetentionRules");
/// ```
///
/// ## Errors
///
/// - [`NormalizerError::UnknownModel`] - `from` is not registered
/// - [`NormalizerError::RenameCollision`] - `to` is already registered
pub fn rename_model(
    registry: &mut Registry,
    from: &str,
    to: &str,
) -> Result<(), NormalizerError> {
    if from == to {
        return Ok(());
    }
    if registry.contains(to) {
        return Err(NormalizerError::RenameCollision {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    let mut model = registry
        .remove(from)
        .ok_or_else(|| NormalizerError::UnknownModel {
            model: from.to_string(),
        })?;
    model.name = to.to_string();
    let filename = model.class_filename();
    registry.insert(model);

    for model in registry.iter_mut() {
        if model.parent.as_deref() == Some(from) {
            model.parent = Some(to.to_string());
            model.extensions.parent_filename = Some(filename.clone());
        }
        for child in &mut model.children {
            if child == from {
                *child = to.to_string();
            }
        }
        if let Some(disc) = &mut model.discriminator {
            for variant in disc.mapping.values_mut() {
                if variant == from {
                    *variant = to.to_string();
                }
            }
        }
        for var in &mut model.vars {
            if var.datatype == from {
                var.datatype = to.to_string();
            }
        }
        for var in &mut model.extensions.parent_vars {
            if var.datatype == from {
                var.datatype = to.to_string();
            }
        }
    }

    tracing::debug!("renamed model '{from}' to '{to}'");
    Ok(())
}

/// Applies a rename table in order, stopping at the first failure.
///
/// ## Errors
///
/// Propagates the first error from [`rename_model`].
pub fn apply_renames(
    registry: &mut Registry,
    renames: &[(&str, &str)],
) -> Result<(), NormalizerError> {
    for (from, to) in renames {
        rename_model(registry, from, to)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyform_define::{Discriminator, Model, Property};

    fn user_registry() -> Registry {
        let mut response = Model::new("UserResponse")
            .with_var(Property::new("id", "String").read_only())
            .with_var(Property::new("name", "String").required());
        response.children = vec!["AdminUserResponse".to_string()];

        let mut admin = Model::new("AdminUserResponse");
        admin.parent = Some("UserResponse".to_string());
        admin.extensions.parent_filename = Some("user_response".to_string());

        let owner = Model::new("ResourceOwner").with_var(Property::new("user", "UserResponse"));

        [response, admin, owner].into_iter().collect()
    }

    #[test]
    fn rename_rewrites_every_reference() {
        let mut registry = user_registry();

        rename_model(&mut registry, "UserResponse", "User").unwrap();

        assert!(!registry.contains("UserResponse"));
        let user = registry.get("User").unwrap();
        assert_eq!(user.name, "User");
        assert_eq!(user.children, ["AdminUserResponse"]);

        let admin = registry.get("AdminUserResponse").unwrap();
        assert_eq!(admin.parent.as_deref(), Some("User"));
        assert_eq!(admin.extensions.parent_filename.as_deref(), Some("user"));

        let owner = registry.get("ResourceOwner").unwrap();
        assert_eq!(owner.var("user").unwrap().datatype, "User");
    }

    #[test]
    fn rename_rewrites_discriminator_mappings() {
        let mut registry: Registry = [
            Model::new("Check").with_discriminator(
                Discriminator::new("type").map("custom", "CustomCheck"),
            ),
            Model::new("CustomCheck"),
        ]
        .into_iter()
        .collect();

        rename_model(&mut registry, "CustomCheck", "ScriptCheck").unwrap();

        let disc = registry.get("Check").unwrap().discriminator.as_ref().unwrap();
        assert_eq!(disc.key_for("ScriptCheck"), Some("custom"));
        assert_eq!(disc.key_for("CustomCheck"), None);
    }

    #[test]
    fn rename_to_occupied_name_is_rejected() {
        let mut registry = user_registry();
        let err = rename_model(&mut registry, "UserResponse", "ResourceOwner").unwrap_err();
        assert!(matches!(err, NormalizerError::RenameCollision { .. }));
        // nothing was removed
        assert!(registry.contains("UserResponse"));
    }

    #[test]
    fn rename_of_unknown_model_is_rejected() {
        let mut registry = user_registry();
        let err = rename_model(&mut registry, "Missing", "Anything").unwrap_err();
        assert!(matches!(err, NormalizerError::UnknownModel { .. }));
    }

    #[test]
    fn rename_to_same_name_is_a_no_op() {
        let mut registry = user_registry();
        rename_model(&mut registry, "UserResponse", "UserResponse").unwrap();
        assert!(registry.contains("UserResponse"));
    }

    #[test]
    fn apply_renames_folds_a_table() {
        let mut registry: Registry = [
            Model::new("RetentionRule"),
            Model::new("Resource"),
        ]
        .into_iter()
        .collect();

        apply_renames(
            &mut registry,
            &[
                ("RetentionRule", "BucketRetentionRules"),
                ("Resource", "PermissionResource"),
            ],
        )
        .unwrap();

        assert!(registry.contains("BucketRetentionRules"));
        assert!(registry.contains("PermissionResource"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn swap_style_chains_are_ordered() {
        // "UserResponse" becomes "User" only after "User" was renamed
        // away, mirroring the production rename tables.
        let mut registry: Registry = [Model::new("User"), Model::new("UserResponse")]
            .into_iter()
            .collect();

        apply_renames(
            &mut registry,
            &[("User", "PostUser"), ("UserResponse", "User")],
        )
        .unwrap();

        assert!(registry.contains("PostUser"));
        assert!(registry.contains("User"));
        assert!(!registry.contains("UserResponse"));
    }
}
