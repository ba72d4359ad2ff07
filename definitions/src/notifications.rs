//! The notification-endpoint model family.
//!
//! A flatter hierarchy than the check family: no intermediate
//! `Discriminator` model (the root itself bears the descriptor) and no
//! per-variant sub-base models, so every leaf attaches directly.

use polyform_define::{Discriminator, Model, Property, Registry};

/// Root model name of the notification-endpoint family.
pub const NOTIFICATION_ENDPOINT_ROOT: &str = "NotificationEndpoint";

/// Variant prefixes of the notification-endpoint family.
pub const NOTIFICATION_ENDPOINT_VARIANTS: &[&str] = &["Slack", "PagerDuty", "HTTP"];

/// Builds the pre-normalization registry for the notification-endpoint
/// family.
pub fn define_notification_endpoint_family() -> Registry {
    [
        Model::new("NotificationEndpoint")
            .with_var(Property::new("type", "String").required().enumerated())
            .with_discriminator(
                Discriminator::new("type")
                    .map("slack", "SlackNotificationEndpoint")
                    .map("pagerduty", "PagerDutyNotificationEndpoint")
                    .map("http", "HTTPNotificationEndpoint"),
            ),
        Model::new("PostNotificationEndpoint"),
        Model::new("NotificationEndpointBase")
            .with_var(Property::new("id", "String").read_only())
            .with_var(Property::new("name", "String").required())
            .with_var(Property::new("orgID", "String"))
            .with_var(Property::new("status", "String").enumerated()),
        Model::new("SlackNotificationEndpoint")
            .with_var(Property::new("type", "String").required().enumerated())
            .with_var(Property::new("url", "String"))
            .with_var(Property::new("token", "String")),
        Model::new("PagerDutyNotificationEndpoint")
            .with_var(Property::new("type", "String").required().enumerated())
            .with_var(Property::new("clientURL", "String"))
            .with_var(Property::new("routingKey", "String").required()),
        Model::new("HTTPNotificationEndpoint")
            .with_var(Property::new("type", "String").required().enumerated())
            .with_var(Property::new("url", "String").required())
            .with_var(Property::new("method", "String").required().enumerated())
            .with_var(Property::new("authMethod", "String").enumerated()),
    ]
    .into_iter()
    .collect()
}
