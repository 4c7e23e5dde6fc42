//! Volunteer service configuration.

use std::env;

use domain::PhonePolicy;

/// Volunteer service configuration.
#[derive(Debug, Clone, Default)]
pub struct VolunteerServiceConfig {
    /// Rule applied to phone numbers on create and update
    pub phone_policy: PhonePolicy,
}

impl VolunteerServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let phone_policy = match env::var("PHONE_POLICY") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to '{}'", e, PhonePolicy::default());
                PhonePolicy::default()
            }),
            Err(_) => PhonePolicy::default(),
        };

        Self { phone_policy }
    }

    /// Override the phone policy.
    pub fn with_phone_policy(mut self, phone_policy: PhonePolicy) -> Self {
        self.phone_policy = phone_policy;
        self
    }
}
