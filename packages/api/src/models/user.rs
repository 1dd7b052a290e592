//! # User model for authenticated users
//!
//! [`UserInfo`] is the client-safe projection of an account that the auth
//! backend returns after a successful login or session restore. It never
//! carries credentials. The helper [`UserInfo::display_name`] returns the
//! user's name or falls back to their phone number.

use serde::{Deserialize, Serialize};

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub phone_number: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to the phone number if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.phone_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        let mut user = UserInfo {
            id: "u1".to_string(),
            phone_number: "5551234567".to_string(),
            name: None,
        };
        assert_eq!(user.display_name(), "5551234567");

        user.name = Some("Asha".to_string());
        assert_eq!(user.display_name(), "Asha");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let user: UserInfo =
            serde_json::from_str(r#"{"id":"u1","phoneNumber":"5551234567"}"#).unwrap();
        assert_eq!(user.phone_number, "5551234567");
        assert!(user.name.is_none());
    }
}
