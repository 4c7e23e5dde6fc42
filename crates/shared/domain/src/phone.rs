//! Configurable phone validation rule.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{
    MIN_PHONE_LENGTH, PHONE_POLICY_LENIENT, PHONE_POLICY_OFF, PHONE_POLICY_STRICT,
    STRICT_PHONE_PATTERN,
};
use crate::error::{DomainError, DomainResult};

static STRICT_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(STRICT_PHONE_PATTERN).expect("strict phone pattern is a valid regex")
});

/// How strictly phone numbers are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonePolicy {
    /// International format: `+` followed by 8 to 15 digits
    #[default]
    Strict,
    /// Any value with at least the minimum length
    Lenient,
    /// No check beyond presence
    Off,
}

impl PhonePolicy {
    /// Check a phone number against this policy.
    pub fn check(&self, phone: &str) -> DomainResult<()> {
        let valid = match self {
            PhonePolicy::Strict => STRICT_PHONE.is_match(phone),
            PhonePolicy::Lenient => phone.trim().chars().count() >= MIN_PHONE_LENGTH,
            PhonePolicy::Off => !phone.trim().is_empty(),
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::validation(self.message()))
        }
    }

    fn message(&self) -> String {
        match self {
            PhonePolicy::Strict => {
                "Invalid phone number, expected international format like +5521999998888"
                    .to_string()
            }
            PhonePolicy::Lenient => format!(
                "Phone number must be at least {} characters",
                MIN_PHONE_LENGTH
            ),
            PhonePolicy::Off => "Phone number is required".to_string(),
        }
    }
}

impl std::str::FromStr for PhonePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            PHONE_POLICY_STRICT => Ok(PhonePolicy::Strict),
            PHONE_POLICY_LENIENT => Ok(PhonePolicy::Lenient),
            PHONE_POLICY_OFF => Ok(PhonePolicy::Off),
            other => Err(DomainError::validation(format!(
                "Unknown phone policy '{}'. Must be 'strict', 'lenient' or 'off'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for PhonePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhonePolicy::Strict => write!(f, "{}", PHONE_POLICY_STRICT),
            PhonePolicy::Lenient => write!(f, "{}", PHONE_POLICY_LENIENT),
            PhonePolicy::Off => write!(f, "{}", PHONE_POLICY_OFF),
        }
    }
}
