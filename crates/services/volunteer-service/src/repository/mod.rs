//! Repository layer for data access.

mod volunteer_repository;

pub use volunteer_repository::{VolunteerRepository, VolunteerStore};

#[cfg(any(test, feature = "test-utils"))]
pub use volunteer_repository::MockVolunteerRepository;
