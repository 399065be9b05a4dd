//! User identity model and boundary validation

use crate::error::KioskError;
use serde::{Deserialize, Serialize};

/// Who is driving the kiosk session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind")]
pub enum UserIdentity {
    /// Anonymous shopper, no loyalty account.
    #[default]
    Guest,
    /// Logged in with a verified phone number only.
    PhoneVerified { phone_number: String },
    /// Full member account with a display name.
    Registered {
        phone_number: String,
        full_name: String,
    },
}

impl UserIdentity {
    pub fn display_name(&self) -> Option<&str> {
        match self {
            UserIdentity::Registered { full_name, .. } => Some(full_name),
            _ => None,
        }
    }

    pub fn phone_number(&self) -> Option<&str> {
        match self {
            UserIdentity::PhoneVerified { phone_number }
            | UserIdentity::Registered { phone_number, .. } => Some(phone_number),
            UserIdentity::Guest => None,
        }
    }
}

/// Minimum digits for a dialable phone number.
const MIN_PHONE_DIGITS: usize = 7;
/// Verification codes are exactly this many digits.
const OTP_DIGITS: usize = 6;

/// Validate a phone number entered at the login boundary: digits only,
/// at least [`MIN_PHONE_DIGITS`] of them.
pub fn validate_phone(number: &str) -> Result<(), KioskError> {
    let trimmed = number.trim();
    if trimmed.len() < MIN_PHONE_DIGITS || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(KioskError::invalid_phone(number));
    }
    Ok(())
}

/// Validate a one-time verification code: exactly [`OTP_DIGITS`] digits.
pub fn validate_otp(code: &str) -> Result<(), KioskError> {
    if code.len() != OTP_DIGITS || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(KioskError::invalid_otp(code));
    }
    Ok(())
}
