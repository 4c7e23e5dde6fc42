//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Volunteer Status
// =============================================================================

/// Wire value of an active registration
pub const STATUS_ACTIVE: &str = "ativo";

/// Wire value of a soft-deleted registration
pub const STATUS_INACTIVE: &str = "inativo";

// =============================================================================
// Availability
// =============================================================================

pub const AVAILABILITY_MORNING: &str = "manha";
pub const AVAILABILITY_AFTERNOON: &str = "tarde";
pub const AVAILABILITY_EVENING: &str = "noite";
pub const AVAILABILITY_WEEKEND: &str = "fim_de_semana";
pub const AVAILABILITY_UNDEFINED: &str = "indefinido";

// =============================================================================
// Validation
// =============================================================================

/// Minimum volunteer name length requirement
pub const MIN_NAME_LENGTH: u64 = 2;

/// Minimum phone length accepted by the lenient phone policy
pub const MIN_PHONE_LENGTH: usize = 6;

/// International phone format required by the strict phone policy
pub const STRICT_PHONE_PATTERN: &str = r"^\+[1-9][0-9]{7,14}$";

// =============================================================================
// Phone Policies
// =============================================================================

pub const PHONE_POLICY_STRICT: &str = "strict";
pub const PHONE_POLICY_LENIENT: &str = "lenient";
pub const PHONE_POLICY_OFF: &str = "off";
