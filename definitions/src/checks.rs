//! The monitoring-check model family.
//!
//! Mirrors the schema layering a one-of with discriminator produces
//! during translation: a `Check` root, a `CheckBase` model with the
//! shared fields, an intermediate `CheckDiscriminator` model carrying the
//! discriminator descriptor, three variants with differing shapes, and a
//! `PostCheck` request sibling.
//!
//! The variants are deliberately uneven so the family covers every
//! attachment path:
//!
//! - `DeadmanCheck` has a sub-base and declares the discriminator
//!   property itself
//! - `ThresholdCheck` has a sub-base and inherits the discriminator
//!   property from it
//! - `CustomCheck` has no sub-base at all

use polyform_define::{Discriminator, Model, Property, Registry};

/// Root model name of the check family.
pub const CHECK_ROOT: &str = "Check";

/// Variant prefixes of the check family, in rendering order.
pub const CHECK_VARIANTS: &[&str] = &["Deadman", "Threshold", "Custom"];

/// Builds the pre-normalization registry for the check family.
pub fn define_check_family() -> Registry {
    [
        Model::new("Check"),
        Model::new("PostCheck"),
        Model::new("CheckBase")
            .with_var(Property::new("id", "String").read_only())
            .with_var(Property::new("name", "String").required())
            .with_var(Property::new("orgID", "String").read_only())
            .with_var(Property::new("query", "DashboardQuery").required())
            .with_var(Property::new("status", "TaskStatusType").enumerated()),
        Model::new("CheckDiscriminator")
            .with_var(Property::new("type", "String").required().enumerated())
            .with_discriminator(
                Discriminator::new("type")
                    .map("deadman", "DeadmanCheck")
                    .map("threshold", "ThresholdCheck")
                    .map("custom", "CustomCheck"),
            ),
        Model::new("DeadmanCheckBase")
            .with_var(Property::new("timeSince", "String"))
            .with_var(Property::new("staleTime", "String"))
            .with_var(Property::new("reportZero", "Boolean"))
            .with_var(Property::new("level", "CheckStatusLevel").enumerated()),
        Model::new("DeadmanCheck")
            .with_var(Property::new("type", "String").required().enumerated()),
        Model::new("ThresholdCheckBase")
            .with_var(Property::new("type", "String").required().enumerated())
            .with_var(Property::new("thresholds", "List<Threshold>")),
        Model::new("ThresholdCheck"),
        Model::new("CustomCheck")
            .with_var(Property::new("type", "String").required().enumerated())
            .with_var(Property::new("query", "String")),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_is_complete() {
        let registry = define_check_family();
        assert!(registry.contains(CHECK_ROOT));
        assert!(registry.contains("CheckBase"));
        assert!(registry.contains("CheckDiscriminator"));
        assert!(registry.contains("PostCheck"));
        for prefix in CHECK_VARIANTS {
            assert!(registry.contains(&format!("{prefix}{CHECK_ROOT}")));
        }
    }

    #[test]
    fn discriminator_maps_every_variant() {
        let registry = define_check_family();
        let bearer = registry.get("CheckDiscriminator").unwrap();
        let disc = bearer.discriminator.as_ref().unwrap();
        assert_eq!(disc.property_name, "type");
        for prefix in CHECK_VARIANTS {
            let leaf = format!("{prefix}{CHECK_ROOT}");
            assert!(disc.key_for(&leaf).is_some(), "unmapped variant {leaf}");
        }
    }

    #[test]
    fn threshold_inherits_type_from_sub_base() {
        let registry = define_check_family();
        assert!(!registry.get("ThresholdCheck").unwrap().declares("type"));
        assert!(registry.get("ThresholdCheckBase").unwrap().declares("type"));
    }
}
