//! Model family definitions for the polyform normalizer.
//!
//! This crate builds realistic pre-normalization model registries from
//! the `polyform-define` primitives, the same way a host framework
//! populates them during schema translation. They back the `polyform-gen`
//! integration tests and documentation examples.
//!
//! Two families are provided:
//!
//! - [`define_check_family`] - a monitoring-check hierarchy with an
//!   intermediate discriminator model, per-variant sub-base models and a
//!   `PostCheck` request sibling
//! - [`define_notification_endpoint_family`] - a notification-endpoint
//!   hierarchy without sub-base models, exercising the direct-attachment
//!   path

pub mod checks;
pub mod notifications;

pub use checks::{CHECK_ROOT, CHECK_VARIANTS, define_check_family};
pub use notifications::{
    NOTIFICATION_ENDPOINT_ROOT, NOTIFICATION_ENDPOINT_VARIANTS,
    define_notification_endpoint_family,
};
