//! Email normalization.
//!
//! The normalized form (trimmed, lowercase) is the uniqueness key for
//! active registrations.

use serde::{Deserialize, Deserializer};

/// Normalize an email address: trim surrounding whitespace and lowercase.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Deserialize an email field, normalizing it on the way in.
pub fn deserialize_normalized<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_email(&raw))
}

/// Deserialize an optional email field, normalizing it when present.
pub fn deserialize_normalized_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(normalize_email))
}
