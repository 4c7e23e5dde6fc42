//! Volunteer service - Registration lifecycle and email uniqueness.
//!
//! SOLID (SRP): Handles volunteer registration use cases only.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use common::{AppResult, OptionExt};
use domain::{
    normalize_email, DomainError, NewVolunteer, PhonePolicy, UpdateVolunteer, Volunteer,
    VolunteerFilter, VolunteerPatch, VolunteerStatus,
};

use crate::config::VolunteerServiceConfig;
use crate::repository::VolunteerRepository;

/// Volunteer service trait for dependency injection.
///
/// At most one active registration may hold a given normalized email.
/// Inactive registrations never block reuse of their email.
#[async_trait]
pub trait VolunteerService: Send + Sync {
    /// Register a new volunteer (always active)
    async fn create(&self, input: NewVolunteer) -> AppResult<Volunteer>;

    /// List registrations matching every present filter, in insertion order
    async fn list(&self, filter: VolunteerFilter) -> AppResult<Vec<Volunteer>>;

    /// Get a registration by ID, inactive included
    async fn get(&self, id: Uuid) -> AppResult<Volunteer>;

    /// Apply the supplied fields to a registration
    async fn update(&self, id: Uuid, changes: UpdateVolunteer) -> AppResult<Volunteer>;

    /// Mark a registration inactive (idempotent)
    async fn soft_delete(&self, id: Uuid) -> AppResult<Volunteer>;
}

/// Concrete implementation of VolunteerService using a repository.
pub struct VolunteerManager {
    repo: Arc<dyn VolunteerRepository>,
    phone_policy: PhonePolicy,
    /// Serializes every find-then-mutate sequence
    write_lock: Mutex<()>,
}

impl VolunteerManager {
    /// Create new volunteer service instance with the default phone policy
    pub fn new(repo: Arc<dyn VolunteerRepository>) -> Self {
        Self::with_config(repo, &VolunteerServiceConfig::default())
    }

    /// Create new volunteer service instance from configuration
    pub fn with_config(repo: Arc<dyn VolunteerRepository>, config: &VolunteerServiceConfig) -> Self {
        Self {
            repo,
            phone_policy: config.phone_policy,
            write_lock: Mutex::new(()),
        }
    }

    /// Fail with `DuplicateEmail` if an active record other than `owner` holds `email`.
    async fn ensure_email_available(&self, email: &str, owner: Option<Uuid>) -> AppResult<()> {
        match self.repo.find_active_by_email(email).await? {
            Some(holder) if Some(holder.id) != owner => {
                warn!(email = %email, holder = %holder.id, "Email already held by an active registration");
                Err(DomainError::duplicate_email(email).into())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl VolunteerService for VolunteerManager {
    async fn create(&self, mut input: NewVolunteer) -> AppResult<Volunteer> {
        input.email = normalize_email(&input.email);
        input.validate().map_err(DomainError::from)?;
        self.phone_policy.check(&input.phone)?;

        let _guard = self.write_lock.lock().await;

        self.ensure_email_available(&input.email, None).await?;

        let volunteer = self.repo.insert(Volunteer::register(input)).await?;
        info!(id = %volunteer.id, email = %volunteer.email, "Volunteer registered");

        Ok(volunteer)
    }

    async fn list(&self, filter: VolunteerFilter) -> AppResult<Vec<Volunteer>> {
        let volunteers: Vec<Volunteer> = self
            .repo
            .list_all()
            .await?
            .into_iter()
            .filter(|v| filter.matches(v))
            .collect();

        debug!(?filter, count = volunteers.len(), "Listed volunteers");
        Ok(volunteers)
    }

    async fn get(&self, id: Uuid) -> AppResult<Volunteer> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: Uuid, mut changes: UpdateVolunteer) -> AppResult<Volunteer> {
        let _guard = self.write_lock.lock().await;

        // Unknown ids fail before the payload is looked at
        let current = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        changes.email = changes.email.as_deref().map(normalize_email);
        changes.validate().map_err(DomainError::from)?;
        if let Some(phone) = &changes.phone {
            self.phone_policy.check(phone)?;
        }

        let mut patch = VolunteerPatch::from(changes);

        let target_status = patch.status.unwrap_or(current.status);
        let reactivating = !current.is_active() && target_status.is_active();

        if patch.email.is_some() || reactivating {
            let email = patch.email.as_deref().unwrap_or(&current.email);
            self.ensure_email_available(email, Some(id)).await?;
        }

        // Status changes through update keep deleted_at in step with status
        patch.deleted_at = match (current.status, target_status) {
            (VolunteerStatus::Active, VolunteerStatus::Inactive) => Some(Some(Utc::now())),
            (VolunteerStatus::Inactive, VolunteerStatus::Active) => Some(None),
            _ => None,
        };

        if patch.is_empty() {
            debug!(id = %id, "Nothing to update");
            return Ok(current);
        }

        let updated = self.repo.update(id, patch).await?.ok_or_not_found()?;
        info!(id = %updated.id, status = %updated.status, "Volunteer updated");

        Ok(updated)
    }

    async fn soft_delete(&self, id: Uuid) -> AppResult<Volunteer> {
        let _guard = self.write_lock.lock().await;

        let current = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        if !current.is_active() {
            debug!(id = %id, "Volunteer already inactive");
            return Ok(current);
        }

        let deleted = self
            .repo
            .update(id, VolunteerPatch::deactivate(Utc::now()))
            .await?
            .ok_or_not_found()?;
        info!(id = %deleted.id, "Volunteer soft deleted");

        Ok(deleted)
    }
}
