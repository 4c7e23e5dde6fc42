//! Volunteer domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    AVAILABILITY_AFTERNOON, AVAILABILITY_EVENING, AVAILABILITY_MORNING, AVAILABILITY_UNDEFINED,
    AVAILABILITY_WEEKEND, MIN_NAME_LENGTH, STATUS_ACTIVE, STATUS_INACTIVE,
};
use crate::email::{deserialize_normalized, deserialize_normalized_opt, normalize_email};

/// Registration lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum VolunteerStatus {
    #[serde(rename = "ativo")]
    Active,
    #[serde(rename = "inativo")]
    Inactive,
}

impl VolunteerStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, VolunteerStatus::Active)
    }
}

impl std::fmt::Display for VolunteerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolunteerStatus::Active => write!(f, "{}", STATUS_ACTIVE),
            VolunteerStatus::Inactive => write!(f, "{}", STATUS_INACTIVE),
        }
    }
}

/// When a volunteer is available to help
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Availability {
    #[serde(rename = "manha")]
    Morning,
    #[serde(rename = "tarde")]
    Afternoon,
    #[serde(rename = "noite")]
    Evening,
    #[serde(rename = "fim_de_semana")]
    Weekend,
    #[default]
    #[serde(rename = "indefinido")]
    Undefined,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Availability::Morning => AVAILABILITY_MORNING,
            Availability::Afternoon => AVAILABILITY_AFTERNOON,
            Availability::Evening => AVAILABILITY_EVENING,
            Availability::Weekend => AVAILABILITY_WEEKEND,
            Availability::Undefined => AVAILABILITY_UNDEFINED,
        };
        write!(f, "{}", value)
    }
}

/// Volunteer domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volunteer {
    pub id: Uuid,
    pub name: String,
    /// Always stored in normalized form
    pub email: String,
    pub phone: String,
    pub desired_role: String,
    pub availability: Availability,
    pub status: VolunteerStatus,
    pub registered_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Volunteer {
    /// Build a fresh active registration from client input.
    ///
    /// Identifier, registration time, status and deletion stamp are always
    /// assigned here, never taken from the client.
    pub fn register(input: NewVolunteer) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: normalize_email(&input.email),
            phone: input.phone,
            desired_role: input.desired_role,
            availability: input.availability,
            status: VolunteerStatus::Active,
            registered_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Check if the registration is active
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Merge the fields present in `patch` into this record.
    pub fn apply(&mut self, patch: VolunteerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(desired_role) = patch.desired_role {
            self.desired_role = desired_role;
        }
        if let Some(availability) = patch.availability {
            self.availability = availability;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(deleted_at) = patch.deleted_at {
            self.deleted_at = deleted_at;
        }
    }
}

/// Volunteer registration data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewVolunteer {
    /// Volunteer full name
    #[serde(rename = "nome")]
    #[validate(length(min = MIN_NAME_LENGTH, message = "Name must be at least 2 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Ana Souza", min_length = 2))]
    pub name: String,
    /// Email address, normalized to trimmed lowercase
    #[serde(deserialize_with = "deserialize_normalized")]
    #[validate(email(message = "Invalid email format"))]
    #[cfg_attr(feature = "openapi", schema(example = "ana@example.com"))]
    pub email: String,
    /// Phone number, checked against the configured phone policy
    #[serde(rename = "telefone")]
    #[cfg_attr(feature = "openapi", schema(example = "+5521999998888"))]
    pub phone: String,
    /// Role the volunteer applies for
    #[serde(rename = "cargo_pretendido")]
    #[cfg_attr(feature = "openapi", schema(example = "Apoio"))]
    pub desired_role: String,
    #[serde(rename = "disponibilidade", default)]
    pub availability: Availability,
}

/// Volunteer partial update data transfer object.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateVolunteer {
    #[serde(rename = "nome", default)]
    #[validate(length(min = MIN_NAME_LENGTH, message = "Name must be at least 2 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Ana Souza"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_normalized_opt")]
    #[validate(email(message = "Invalid email format"))]
    #[cfg_attr(feature = "openapi", schema(example = "ana@example.com"))]
    pub email: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "cargo_pretendido", default)]
    pub desired_role: Option<String>,
    #[serde(rename = "disponibilidade", default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub status: Option<VolunteerStatus>,
}

/// Store-level field changes.
///
/// `deleted_at` is nullable on the record, so its patch is an
/// `Option<Option<_>>`: outer `None` leaves it alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolunteerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub desired_role: Option<String>,
    pub availability: Option<Availability>,
    pub status: Option<VolunteerStatus>,
    pub deleted_at: Option<Option<DateTime<Utc>>>,
}

impl VolunteerPatch {
    /// Patch that soft deletes a record at the given instant
    pub fn deactivate(at: DateTime<Utc>) -> Self {
        Self {
            status: Some(VolunteerStatus::Inactive),
            deleted_at: Some(Some(at)),
            ..Self::default()
        }
    }

    /// True when applying the patch would change nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<UpdateVolunteer> for VolunteerPatch {
    fn from(changes: UpdateVolunteer) -> Self {
        Self {
            name: changes.name,
            email: changes.email.as_deref().map(normalize_email),
            phone: changes.phone,
            desired_role: changes.desired_role,
            availability: changes.availability,
            status: changes.status,
            deleted_at: None,
        }
    }
}

/// List filters, AND-combined. `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolunteerFilter {
    pub status: Option<VolunteerStatus>,
    pub desired_role: Option<String>,
    pub availability: Option<Availability>,
}

impl VolunteerFilter {
    pub fn with_status(mut self, status: VolunteerStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_desired_role(mut self, role: impl Into<String>) -> Self {
        self.desired_role = Some(role.into());
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }

    /// Check whether a record satisfies every present filter
    pub fn matches(&self, volunteer: &Volunteer) -> bool {
        self.status.map_or(true, |s| volunteer.status == s)
            && self
                .desired_role
                .as_deref()
                .map_or(true, |r| volunteer.desired_role == r)
            && self
                .availability
                .map_or(true, |a| volunteer.availability == a)
    }
}

/// Volunteer response (wire representation)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct VolunteerResponse {
    /// Unique registration identifier
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "cargo_pretendido")]
    pub desired_role: String,
    #[serde(rename = "disponibilidade")]
    pub availability: Availability,
    pub status: VolunteerStatus,
    /// Registration timestamp (UTC)
    #[serde(rename = "inscricao_em")]
    pub registered_at: DateTime<Utc>,
    /// Soft delete timestamp, null while active
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Volunteer> for VolunteerResponse {
    fn from(volunteer: Volunteer) -> Self {
        Self {
            id: volunteer.id,
            name: volunteer.name,
            email: volunteer.email,
            phone: volunteer.phone,
            desired_role: volunteer.desired_role,
            availability: volunteer.availability,
            status: volunteer.status,
            registered_at: volunteer.registered_at,
            deleted_at: volunteer.deleted_at,
        }
    }
}

impl From<&Volunteer> for VolunteerResponse {
    fn from(volunteer: &Volunteer) -> Self {
        Self::from(volunteer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_volunteer(email: &str) -> NewVolunteer {
        NewVolunteer {
            name: "Ana".to_string(),
            email: email.to_string(),
            phone: "+5521999991111".to_string(),
            desired_role: "Apoio".to_string(),
            availability: Availability::Morning,
        }
    }

    #[test]
    fn test_register_forces_server_side_fields() {
        let volunteer = Volunteer::register(new_volunteer(" A@X.COM "));

        assert_eq!(volunteer.email, "a@x.com");
        assert_eq!(volunteer.status, VolunteerStatus::Active);
        assert!(volunteer.deleted_at.is_none());
        assert!(volunteer.is_active());
    }

    #[test]
    fn test_register_generates_distinct_ids() {
        let a = Volunteer::register(new_volunteer("a@x.com"));
        let b = Volunteer::register(new_volunteer("a@x.com"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut volunteer = Volunteer::register(new_volunteer("a@x.com"));
        let before = volunteer.clone();

        volunteer.apply(VolunteerPatch {
            name: Some("Ana Maria".to_string()),
            ..VolunteerPatch::default()
        });

        assert_eq!(volunteer.name, "Ana Maria");
        assert_eq!(volunteer.email, before.email);
        assert_eq!(volunteer.phone, before.phone);
        assert_eq!(volunteer.status, before.status);
        assert_eq!(volunteer.registered_at, before.registered_at);
    }

    #[test]
    fn test_deactivate_patch_sets_status_and_stamp() {
        let mut volunteer = Volunteer::register(new_volunteer("a@x.com"));
        let now = Utc::now();

        volunteer.apply(VolunteerPatch::deactivate(now));

        assert_eq!(volunteer.status, VolunteerStatus::Inactive);
        assert_eq!(volunteer.deleted_at, Some(now));
    }

    #[test]
    fn test_patch_can_clear_deleted_at() {
        let mut volunteer = Volunteer::register(new_volunteer("a@x.com"));
        volunteer.apply(VolunteerPatch::deactivate(Utc::now()));

        volunteer.apply(VolunteerPatch {
            status: Some(VolunteerStatus::Active),
            deleted_at: Some(None),
            ..VolunteerPatch::default()
        });

        assert!(volunteer.is_active());
        assert!(volunteer.deleted_at.is_none());
    }

    #[test]
    fn test_empty_patch() {
        assert!(VolunteerPatch::default().is_empty());
        assert!(!VolunteerPatch::deactivate(Utc::now()).is_empty());
    }

    #[test]
    fn test_filter_combines_with_and() {
        let volunteer = Volunteer::register(new_volunteer("a@x.com"));

        assert!(VolunteerFilter::default().matches(&volunteer));
        assert!(VolunteerFilter::default()
            .with_status(VolunteerStatus::Active)
            .with_desired_role("Apoio")
            .with_availability(Availability::Morning)
            .matches(&volunteer));
        assert!(!VolunteerFilter::default()
            .with_status(VolunteerStatus::Active)
            .with_desired_role("Coordenador")
            .matches(&volunteer));
        assert!(!VolunteerFilter::default()
            .with_availability(Availability::Evening)
            .matches(&volunteer));
    }

    #[test]
    fn test_new_volunteer_deserializes_wire_names_and_normalizes_email() {
        let input: NewVolunteer = serde_json::from_str(
            r#"{
                "nome": "Alpha",
                "email": "  ALPHA@EXAMPLE.COM ",
                "telefone": "+5511999999999",
                "cargo_pretendido": "Apoio",
                "id": "ignored",
                "status": "inativo"
            }"#,
        )
        .unwrap();

        assert_eq!(input.email, "alpha@example.com");
        assert_eq!(input.availability, Availability::Undefined);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_new_volunteer_validation_rejects_short_name_and_bad_email() {
        let input = NewVolunteer {
            name: "A".to_string(),
            ..new_volunteer("not-an-email")
        };

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_name_length_boundary_applies_to_create_and_update() {
        let shortest = "J".repeat(MIN_NAME_LENGTH as usize);
        let too_short = "J".repeat(MIN_NAME_LENGTH as usize - 1);

        let ok = NewVolunteer {
            name: shortest.clone(),
            ..new_volunteer("a@x.com")
        };
        let short = NewVolunteer {
            name: too_short.clone(),
            ..new_volunteer("a@x.com")
        };
        assert!(ok.validate().is_ok());
        assert!(short.validate().is_err());

        let rename = UpdateVolunteer {
            name: Some(too_short),
            ..UpdateVolunteer::default()
        };
        assert!(rename.validate().is_err());
    }

    #[cfg(feature = "openapi")]
    #[test]
    fn test_openapi_schema_carries_examples() {
        use utoipa::ToSchema;

        let (name, schema) = NewVolunteer::schema();
        let json = serde_json::to_value(schema).unwrap();

        assert_eq!(name, "NewVolunteer");
        assert_eq!(json["properties"]["nome"]["example"], "Ana Souza");
        assert_eq!(json["properties"]["email"]["example"], "ana@example.com");
    }

    #[test]
    fn test_update_volunteer_absent_fields_stay_none() {
        let changes: UpdateVolunteer =
            serde_json::from_str(r#"{"nome": "João Atualizado"}"#).unwrap();

        assert_eq!(changes.name.as_deref(), Some("João Atualizado"));
        assert!(changes.email.is_none());
        assert!(changes.status.is_none());
        assert!(changes.validate().is_ok());
    }

    #[test]
    fn test_update_volunteer_into_patch_normalizes_email() {
        let changes: UpdateVolunteer =
            serde_json::from_str(r#"{"email": "B@X.COM", "status": "inativo"}"#).unwrap();
        let patch = VolunteerPatch::from(changes);

        assert_eq!(patch.email.as_deref(), Some("b@x.com"));
        assert_eq!(patch.status, Some(VolunteerStatus::Inactive));
        assert!(patch.deleted_at.is_none());
    }

    #[test]
    fn test_response_uses_wire_names() {
        let volunteer = Volunteer::register(new_volunteer("a@x.com"));
        let json = serde_json::to_value(VolunteerResponse::from(&volunteer)).unwrap();

        assert_eq!(json["nome"], "Ana");
        assert_eq!(json["telefone"], "+5521999991111");
        assert_eq!(json["cargo_pretendido"], "Apoio");
        assert_eq!(json["disponibilidade"], "manha");
        assert_eq!(json["status"], "ativo");
        assert!(json["inscricao_em"].is_string());
        assert!(json["deleted_at"].is_null());
    }

    #[test]
    fn test_enum_display_matches_wire_values() {
        assert_eq!(VolunteerStatus::Active.to_string(), "ativo");
        assert_eq!(VolunteerStatus::Inactive.to_string(), "inativo");
        assert_eq!(Availability::Weekend.to_string(), "fim_de_semana");
        assert_eq!(Availability::default().to_string(), "indefinido");
    }
}
