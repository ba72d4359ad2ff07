//! Polyform normalization library.
//!
//! This crate rewrites registries of schema-derived model descriptors
//! (built with `polyform-define`) so that every polymorphic one-of
//! family comes out consistent for the generation target: either a real
//! parent/child class chain, or a flattened shape where each model is
//! self-contained. It runs after schema translation and before
//! rendering, mutating the registry in place.
//!
//! ## Modules
//!
//! - [`inheritance`] - normalization of one polymorphic family: bearer
//!   resolution, re-parenting, discriminator default resolution
//! - [`parent_vars`] - projection of inherited properties into a model's
//!   cloned parent-vars view
//! - [`prune`] - removal of unsupported model subsets by name pattern
//! - [`rename`] - registry-wide model renaming with reference rewriting
//! - [`errors`] - error types for all passes
//!
//! ## Example Usage
//!
//! ```
//! use polyform_define::Capabilities;
//! use polyform_definitions::{CHECK_VARIANTS, define_check_family};
//! use polyform_gen::inheritance::normalize_family;
//!
//! let mut registry = define_check_family();
//! normalize_family("Check", CHECK_VARIANTS, &mut registry, &Capabilities::java()).unwrap();
//!
//! let root = registry.get("Check").unwrap();
//! assert_eq!(root.children.len(), 3);
//! ```
//!
//! ## Pass Ordering
//!
//! Pruning and renaming reshape the registry and run first; family
//! normalization assumes final names and runs once per family. The
//! normalizer is not idempotent (see [`inheritance`]), so hosts run one
//! pass per family per generation run.

pub mod errors;
pub mod inheritance;
pub mod parent_vars;
pub mod prune;
pub mod rename;

pub use errors::NormalizerError;
pub use inheritance::normalize_family;
pub use parent_vars::{merge_unique, project_parent_vars};
pub use prune::drop_matching;
pub use rename::{apply_renames, rename_model};
