//! # Client configuration — `gate.toml`
//!
//! Where the auth backend lives, where users land after signing in, and how
//! long toasts stay up. Every section and field has a default, so a missing
//! or empty file is the default configuration.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//! login_path = "/api/auth/login"
//! session_path = "/api/auth/me"
//! logout_path = "/api/auth/logout"
//!
//! [redirect]
//! default_path = "/"     # used when there is no navigation intent
//! login_path = "/login"
//!
//! [toast]
//! auto_close_ms = 5000   # 0 keeps toasts until dismissed
//! ```

use serde::{Deserialize, Serialize};

use crate::redirect::RedirectResolver;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub redirect: RedirectConfig,
    #[serde(default)]
    pub toast: ToastConfig,
}

/// Auth backend endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub login_path: String,
    pub session_path: String,
    pub logout_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            login_path: "/api/auth/login".to_string(),
            session_path: "/api/auth/me".to_string(),
            logout_path: "/api/auth/logout".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Destination after login when the user was not redirected to the login page.
    pub default_path: String,
    pub login_path: String,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            default_path: "/".to_string(),
            login_path: "/login".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Milliseconds before a toast closes itself. 0 disables auto-close.
    #[serde(default = "default_auto_close_ms")]
    pub auto_close_ms: u32,
}

fn default_auto_close_ms() -> u32 {
    5000
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_close_ms: default_auto_close_ms(),
        }
    }
}

impl GateConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    pub fn redirect_resolver(&self) -> RedirectResolver {
        RedirectResolver::new(self.redirect.default_path.clone())
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "gate.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = GateConfig::from_toml("").unwrap();
        assert_eq!(config, GateConfig::default());
        assert_eq!(config.redirect.default_path, "/");
        assert_eq!(config.toast.auto_close_ms, 5000);
    }

    #[test]
    fn test_partial_sections() {
        let config = GateConfig::from_toml(
            r#"
            [api]
            base_url = "https://play.example.com"

            [redirect]
            default_path = "/home"
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://play.example.com");
        assert_eq!(config.api.login_path, "/api/auth/login");
        assert_eq!(config.redirect.login_path, "/login");
        assert_eq!(config.redirect_resolver().resolve(None), "/home");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = GateConfig::default().with_base_url("https://api.example.com");
        let text = config.to_toml().unwrap();
        assert_eq!(GateConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(GateConfig::from_toml("[toast]\nauto_close_ms = \"soon\"").is_err());
    }
}
