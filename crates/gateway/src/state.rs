//! Application state for dependency injection.

use std::sync::Arc;

use volunteer_service_lib::service::VolunteerService;

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub volunteer_service: Arc<dyn VolunteerService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(volunteer_service: Arc<dyn VolunteerService>, config: GatewayConfig) -> Self {
        Self {
            volunteer_service,
            config,
        }
    }

    /// Build state around a fresh in-memory volunteer service.
    pub fn from_config(config: GatewayConfig) -> Self {
        let (_, service) = volunteer_service_lib::build(&config.volunteers);
        Self::new(service, config)
    }
}
