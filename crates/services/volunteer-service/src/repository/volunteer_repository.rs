//! In-memory volunteer record store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use common::AppResult;
use domain::{Volunteer, VolunteerPatch};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Volunteer repository trait for dependency injection.
///
/// The store enforces no business invariants; records are kept in
/// insertion order and never physically removed except by `reset`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VolunteerRepository: Send + Sync {
    /// List all records, including inactive, in insertion order
    async fn list_all(&self) -> AppResult<Vec<Volunteer>>;

    /// Find record by identifier
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Volunteer>>;

    /// Find the first record holding a normalized email, regardless of status
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Volunteer>>;

    /// Find the first active record holding a normalized email
    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<Volunteer>>;

    /// Append a record
    async fn insert(&self, volunteer: Volunteer) -> AppResult<Volunteer>;

    /// Merge patch fields into an existing record, returning the result
    async fn update(&self, id: Uuid, patch: VolunteerPatch) -> AppResult<Option<Volunteer>>;

    /// Remove every record
    async fn reset(&self) -> AppResult<()>;
}

/// Concrete in-memory implementation of VolunteerRepository
#[derive(Debug, Default)]
pub struct VolunteerStore {
    records: RwLock<Vec<Volunteer>>,
}

impl VolunteerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, inactive included
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl VolunteerRepository for VolunteerStore {
    async fn list_all(&self) -> AppResult<Vec<Volunteer>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Volunteer>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|v| v.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Volunteer>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|v| v.email == email).cloned())
    }

    async fn find_active_by_email(&self, email: &str) -> AppResult<Option<Volunteer>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|v| v.is_active() && v.email == email)
            .cloned())
    }

    async fn insert(&self, volunteer: Volunteer) -> AppResult<Volunteer> {
        self.records.write().await.push(volunteer.clone());
        Ok(volunteer)
    }

    async fn update(&self, id: Uuid, patch: VolunteerPatch) -> AppResult<Option<Volunteer>> {
        let mut records = self.records.write().await;

        let Some(volunteer) = records.iter_mut().find(|v| v.id == id) else {
            return Ok(None);
        };

        volunteer.apply(patch);
        Ok(Some(volunteer.clone()))
    }

    async fn reset(&self) -> AppResult<()> {
        self.records.write().await.clear();
        Ok(())
    }
}
