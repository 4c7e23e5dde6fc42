//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared by the volunteer service and the HTTP gateway.

pub mod constants;
pub mod email;
pub mod error;
pub mod phone;
pub mod volunteer;

pub use constants::*;
pub use email::normalize_email;
pub use error::{format_validation_errors, DomainError, DomainResult};
pub use phone::PhonePolicy;
pub use volunteer::{
    Availability, NewVolunteer, UpdateVolunteer, Volunteer, VolunteerFilter, VolunteerPatch,
    VolunteerResponse, VolunteerStatus,
};
