//! Convenient re-exports for building and inspecting model graphs.
//!
//! ## Examples
//!
//! ```
//! use polyform_define::prelude::*;
//!
//! let mut registry = Registry::new();
//! registry
//!     .register(
//!         Model::new("CheckDiscriminator")
//!             .with_var(Property::new("type", "String").required().enumerated())
//!             .with_discriminator(Discriminator::new("type").map("deadman", "DeadmanCheck")),
//!     )
//!     .unwrap();
//!
//! assert!(registry.contains("CheckDiscriminator"));
//! ```

pub use crate::capabilities::{Capabilities, EnumDefaultStyle};
pub use crate::discriminator::Discriminator;
pub use crate::model::{Extensions, Model};
pub use crate::property::Property;
pub use crate::registry::{Registry, RegistryError};
