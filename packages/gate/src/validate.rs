//! Input normalisation and validation for the login form.
//!
//! These are pure functions: they never contact the backend and never touch
//! UI state. [`normalize_phone`] doubles as the live input filter, so the
//! phone field only ever shows digits.

use thiserror::Error;

/// Number of digits a phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Why a submission was refused before reaching the backend.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please agree to the terms and privacy policy")]
    ConsentMissing,
    #[error("Please enter both phone number and password")]
    FieldsMissing,
    #[error("Please enter a valid 10-digit phone number")]
    PhoneInvalid,
}

/// Validated credentials, ready to hand to an [`Authenticator`](crate::Authenticator).
///
/// Only [`validate_submission`] constructs this, so `phone_number` is always
/// exactly ten ASCII digits and `password` is never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    phone_number: String,
    password: String,
}

impl Credentials {
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Phone number with everything but the last four digits hidden, for logs.
    pub fn masked_phone(&self) -> String {
        let visible = &self.phone_number[self.phone_number.len().saturating_sub(4)..];
        format!("******{visible}")
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("phone_number", &self.masked_phone())
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Strip every non-digit character, preserving the order of the digits.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Return the normalised digits if there are exactly [`PHONE_DIGITS`] of them.
pub fn validate_phone(raw: &str) -> Option<String> {
    let digits = normalize_phone(raw);
    (digits.len() == PHONE_DIGITS).then_some(digits)
}

/// Check a submission in priority order: consent, required fields, phone format.
///
/// Consent is checked first no matter what the other fields contain.
pub fn validate_submission(
    phone: &str,
    password: &str,
    consent: bool,
) -> Result<Credentials, ValidationError> {
    if !consent {
        return Err(ValidationError::ConsentMissing);
    }
    if phone.is_empty() || password.is_empty() {
        return Err(ValidationError::FieldsMissing);
    }
    let phone_number = validate_phone(phone).ok_or(ValidationError::PhoneInvalid)?;

    Ok(Credentials {
        phone_number,
        password: password.to_string(),
    })
}
