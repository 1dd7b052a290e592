//! Request and response bodies of the auth endpoints.

use serde::{Deserialize, Serialize};

use super::UserInfo;

/// Body of the login request.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneLogin {
    pub phone_number: String,
    pub password: String,
}

impl From<&gate::Credentials> for PhoneLogin {
    fn from(credentials: &gate::Credentials) -> Self {
        Self {
            phone_number: credentials.phone_number().to_string(),
            password: credentials.password().to_string(),
        }
    }
}

impl std::fmt::Debug for PhoneLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hidden = self.phone_number.chars().count().saturating_sub(4);
        let visible: String = self.phone_number.chars().skip(hidden).collect();
        f.debug_struct("PhoneLogin")
            .field("phone_number", &format_args!("******{visible}"))
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// Error body some endpoints send along with a non-2xx status.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_phone_and_password() {
        let body = PhoneLogin {
            phone_number: "5551234567".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{body:?}");
        assert!(debug.contains("******4567"));
        assert!(!debug.contains("5551234567"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_login_response_without_user() {
        let response: LoginResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert!(response.user.is_none());
    }
}
