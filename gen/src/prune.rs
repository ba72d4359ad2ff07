//! Registry pruning.
//!
//! Generation targets rarely support the full source contract: template,
//! stack and geo-view subsets are dropped before rendering. Pruning
//! removes whole models by name pattern and scrubs the survivors so no
//! reference dangles into the removed set.

use regex::Regex;

use polyform_define::Registry;

use crate::errors::NormalizerError;

/// Removes every model whose name matches `pattern` and returns the
/// removed names, in name order.
///
/// The pattern is anchored: it must match the whole model name, so
/// `"Template(.*)"` removes `TemplateSummary` but not `StackTemplate`.
/// Survivors are scrubbed afterwards: child entries and discriminator
/// mapping entries pointing at removed models are dropped, and parent
/// links into the removed set are cleared.
///
/// ## Examples
///
/// ```
/// use polyform_define::{Model, Registry};
/// use polyform_gen::prune::drop_matching;
///
/// let mut registry: Registry = ["Bucket", "TemplateApply", "TemplateSummary"]
///     .into_iter()
///     .map(Model::new)
///     .collect();
///
/// let dropped = drop_matching(&mut registry, "Template(.*)").unwrap();
/// assert_eq!(dropped, ["TemplateApply", "TemplateSummary"]);
/// assert!(registry.contains("Bucket"));
/// ```
///
/// ## Errors
///
/// Returns [`NormalizerError::InvalidPattern`] when the pattern does not
/// compile.
pub fn drop_matching(
    registry: &mut Registry,
    pattern: &str,
) -> Result<Vec<String>, NormalizerError> {
    let re = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
        NormalizerError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;

    let dropped: Vec<String> = registry
        .names()
        .filter(|name| re.is_match(name))
        .map(str::to_string)
        .collect();
    for name in &dropped {
        registry.remove(name);
    }

    for model in registry.iter_mut() {
        if let Some(parent) = &model.parent {
            if dropped.iter().any(|d| d == parent) {
                model.parent = None;
            }
        }
        model.children.retain(|c| !dropped.iter().any(|d| d == c));
        if let Some(disc) = &mut model.discriminator {
            disc.mapping.retain(|_, v| !dropped.iter().any(|d| d == v));
        }
    }

    tracing::debug!("pruned {} models matching '{pattern}'", dropped.len());
    Ok(dropped)
}
