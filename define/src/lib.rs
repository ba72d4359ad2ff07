//! Polyform Definition Library
//!
//! This crate provides the model descriptor types consumed and produced
//! by the `polyform-gen` normalization passes. A host code-generation
//! framework translates source schemas into a [`Registry`] of [`Model`]
//! descriptors; the normalizer rewrites the parent/child topology and
//! discriminator state of each polymorphic family in place; the mutated
//! registry is then handed to a rendering stage.
//!
//! ## Core Types
//!
//! - [`Registry`] - name-keyed arena of model descriptors
//! - [`Model`] - one schema-derived model: properties, parent/child links,
//!   discriminator, rendering annotations
//! - [`Property`] - one model field with its rendering flags
//! - [`Discriminator`] - variant property name plus mapping table
//! - [`Extensions`] - annotations the rendering stage reads (projected
//!   parent variables, resolved discriminator value)
//! - [`Capabilities`] / [`EnumDefaultStyle`] - the target-language seam:
//!   inheritance support and constant-default formatting
//!
//! ## Examples
//!
//! Describe a small polymorphic family:
//!
//! ```
//! use polyform_define::{Discriminator, Model, Property, Registry};
//!
//! let registry: Registry = [
//!     Model::new("Check"),
//!     Model::new("CheckBase")
//!         .with_var(Property::new("name", "String").required()),
//!     Model::new("DeadmanCheck")
//!         .with_var(Property::new("type", "String").required().enumerated()),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(registry.len(), 3);
//! ```
//!
//! Ready-made realistic families live in the separate
//! `polyform-definitions` crate, which uses these primitives the same way
//! a host framework would.

pub mod capabilities;
pub mod discriminator;
pub mod model;
pub mod prelude;
pub mod property;
pub mod registry;

// Re-export main types at crate root
pub use capabilities::{Capabilities, EnumDefaultStyle};
pub use discriminator::Discriminator;
pub use model::{Extensions, Model};
pub use property::Property;
pub use registry::{Registry, RegistryError};
