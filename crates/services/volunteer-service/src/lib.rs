//! Volunteer Service Library
//!
//! This crate owns volunteer registration records: an in-memory store
//! and the lifecycle service that enforces email uniqueness on top of it.
//! It is embedded in-process by the HTTP gateway.

pub mod config;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::VolunteerServiceConfig;
use crate::repository::VolunteerStore;
use crate::service::VolunteerManager;

/// Wire an empty in-memory store and the lifecycle service on top of it.
///
/// The store is returned alongside the service so callers can inspect or
/// reset it.
pub fn build(config: &VolunteerServiceConfig) -> (Arc<VolunteerStore>, Arc<VolunteerManager>) {
    let store = Arc::new(VolunteerStore::new());
    let service = Arc::new(VolunteerManager::with_config(store.clone(), config));

    info!(phone_policy = %config.phone_policy, "Volunteer service ready");

    (store, service)
}
