//! Target-language capability descriptors.
//!
//! The normalizer never hard-codes target-language behavior. Everything
//! generator-specific is carried in a [`Capabilities`] value: whether the
//! target supports compile-time inheritance, and how the single valid
//! value of a discriminator property is written as a constant default.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How a raw discriminator mapping key becomes a target-language literal.
///
/// Different targets represent "the one valid value of a single-value
/// enum" differently: script targets use a plain string literal, while
/// class-based targets reference a named enum constant qualified by the
/// property's datatype.
///
/// ## Examples
///
/// ```
/// use polyform_define::EnumDefaultStyle;
///
/// assert_eq!(
///     EnumDefaultStyle::StringLiteral.format("deadman", "String"),
///     "\"deadman\""
/// );
/// assert_eq!(
///     EnumDefaultStyle::UpperConstant.format("pager-duty", "TypeEnum"),
///     "TypeEnum.PAGER_DUTY"
/// );
/// assert_eq!(
///     EnumDefaultStyle::PascalConstant.format("pager-duty", "TypeEnum"),
///     "TypeEnum.PagerDuty"
/// );
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnumDefaultStyle {
    /// A quoted string literal: `"deadman"`.
    StringLiteral,
    /// An upper-cased enum constant with symbol substitution:
    /// `TypeEnum.PAGER_DUTY`.
    UpperConstant,
    /// A camelized enum constant: `TypeEnum.PagerDuty`.
    PascalConstant,
}

impl EnumDefaultStyle {
    /// Formats a raw mapping key as a constant default for the target.
    ///
    /// `datatype` is the enum type qualifying named constants; it is
    /// ignored for string literals.
    pub fn format(&self, key: &str, datatype: &str) -> String {
        match self {
            Self::StringLiteral => format!("\"{key}\""),
            Self::UpperConstant => format!("{datatype}.{}", upper_constant(key)),
            Self::PascalConstant => format!("{datatype}.{}", camelize(key)),
        }
    }
}

/// Target-language capabilities queried by the normalization passes.
///
/// ## Examples
///
/// ```
/// use polyform_define::Capabilities;
///
/// let java = Capabilities::java();
/// assert!(java.compile_time_inheritance);
///
/// let python = Capabilities::python();
/// assert!(!python.compile_time_inheritance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Whether generated models may extend a parent class.
    ///
    /// When false the target is flattened: every model self-contains its
    /// inherited fields and no parent links survive normalization.
    pub compile_time_inheritance: bool,
    /// Constant-default formatting for discriminator properties.
    pub enum_default: EnumDefaultStyle,
}

impl Capabilities {
    /// Builds a capability descriptor from its parts.
    pub fn new(compile_time_inheritance: bool, enum_default: EnumDefaultStyle) -> Self {
        Self {
            compile_time_inheritance,
            enum_default,
        }
    }

    /// Class inheritance, upper-cased enum constants.
    pub fn java() -> Self {
        Self::new(true, EnumDefaultStyle::UpperConstant)
    }

    /// Class inheritance, camelized enum constants.
    pub fn csharp() -> Self {
        Self::new(true, EnumDefaultStyle::PascalConstant)
    }

    /// Class inheritance, string-literal defaults.
    pub fn php() -> Self {
        Self::new(true, EnumDefaultStyle::StringLiteral)
    }

    /// Flattened models, string-literal defaults.
    pub fn python() -> Self {
        Self::new(false, EnumDefaultStyle::StringLiteral)
    }
}

/// Upper-cases a mapping key, substituting `_` for symbols: `pager-duty`
/// becomes `PAGER_DUTY`.
fn upper_constant(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Camelizes a mapping key: `pager-duty` becomes `PagerDuty`.
fn camelize(key: &str) -> String {
    key.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
