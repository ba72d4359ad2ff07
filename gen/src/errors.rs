//! Error types for the polyform normalization passes.

use thiserror::Error;

/// Errors raised while normalizing or reshaping a model registry.
///
/// The family-scoped variants are contract errors: they indicate a
/// malformed or incomplete model family and abort the enclosing
/// generation run. Retrying cannot change the outcome and proceeding
/// would silently emit incorrect generated code, so they are surfaced
/// immediately with the failing family name attached.
#[derive(Debug, Error)]
pub enum NormalizerError {
    /// A model the family requires is absent from the registry.
    #[error("family '{family}': required model '{model}' is not in the registry")]
    MissingModel {
        /// Root name of the family being normalized.
        family: String,
        /// The missing model name.
        model: String,
    },

    /// The resolved discriminator bearer carries no discriminator.
    #[error("family '{family}': discriminator bearer '{bearer}' has no discriminator descriptor")]
    MissingDiscriminator {
        /// Root name of the family being normalized.
        family: String,
        /// The model resolved as discriminator bearer.
        bearer: String,
    },

    /// A variant model is not listed in the discriminator mapping table.
    #[error("family '{family}': variant '{variant}' has no entry in the discriminator mapping of '{bearer}'")]
    UnmappedVariant {
        /// Root name of the family being normalized.
        family: String,
        /// The unmapped variant model name.
        variant: String,
        /// The model whose mapping table was consulted.
        bearer: String,
    },

    /// Neither a leaf's own nor its inherited required properties contain
    /// the discriminator property.
    #[error("family '{family}': model '{model}' declares no required property '{property}'")]
    MissingDiscriminatorProperty {
        /// Root name of the family being normalized.
        family: String,
        /// The model expected to declare the property.
        model: String,
        /// The discriminator property name looked for.
        property: String,
    },

    /// A prune pattern failed to compile.
    #[error("invalid prune pattern '{pattern}'")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A rename source model is absent from the registry.
    #[error("cannot rename '{model}': not in the registry")]
    UnknownModel {
        /// The missing model name.
        model: String,
    },

    /// A rename target name is already registered.
    #[error("cannot rename '{from}' to '{to}': target name already registered")]
    RenameCollision {
        /// The model being renamed.
        from: String,
        /// The occupied target name.
        to: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_errors_name_the_family() {
        let err = NormalizerError::MissingModel {
            family: "Check".to_string(),
            model: "CheckBase".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Check"));
        assert!(msg.contains("CheckBase"));
    }

    #[test]
    fn invalid_pattern_chains_the_regex_error() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = NormalizerError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
