//! Application services layer - Use cases and business logic.

mod volunteer_service;

pub use volunteer_service::{VolunteerManager, VolunteerService};
