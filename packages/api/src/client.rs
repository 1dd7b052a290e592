//! HTTP client for the auth backend.
//!
//! The browser keeps the session cookie; on WASM every request is sent with
//! `credentials: include` so the cookie travels with it.

use gate::config::ApiConfig;
use reqwest::{RequestBuilder, Response, StatusCode};

use crate::error::ApiError;
use crate::models::{ErrorBody, LoginResponse, PhoneLogin, SessionResponse, UserInfo};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        Ok(request.send().await?)
    }

    /// Log in with a phone number and password.
    ///
    /// `401 Unauthorized` means the credentials were refused and comes back as
    /// `success: false`, not as an error.
    pub async fn login(&self, body: &PhoneLogin) -> Result<LoginResponse, ApiError> {
        let url = self.url(&self.config.login_path);
        tracing::debug!("POST {}", url);

        let response = self.send(self.http.post(&url).json(body)).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(LoginResponse {
                success: false,
                user: None,
            });
        }
        let response = error_for_status(response).await?;
        Ok(response.json().await?)
    }

    /// Restore the current session, if any.
    pub async fn current_user(&self) -> Result<Option<UserInfo>, ApiError> {
        let url = self.url(&self.config.session_path);
        tracing::debug!("GET {}", url);

        let response = self.send(self.http.get(&url)).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        let response = error_for_status(response).await?;
        let session: SessionResponse = response.json().await?;
        Ok(session.user)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let url = self.url(&self.config.logout_path);
        tracing::debug!("POST {}", url);

        let response = self.send(self.http.post(&url)).await?;
        error_for_status(response).await?;
        Ok(())
    }
}

async fn error_for_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.is_empty());
    tracing::warn!(status = status.as_u16(), ?message, "auth backend returned an error");
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        })
    }

    fn login_body() -> PhoneLogin {
        PhoneLogin {
            phone_number: "5551234567".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_sends_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({"phoneNumber": "5551234567", "password": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "user": {"id": "u1", "phoneNumber": "5551234567", "name": "Asha"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).login(&login_body()).await.unwrap();
        assert!(response.success);
        assert_eq!(response.user.unwrap().display_name(), "Asha");
    }

    #[tokio::test]
    async fn test_login_rejected_in_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let response = client_for(&server).login(&login_body()).await.unwrap();
        assert!(!response.success);
        assert!(response.user.is_none());
    }

    #[tokio::test]
    async fn test_login_unauthorized_is_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let response = client_for(&server).login(&login_body()).await.unwrap();
        assert!(!response.success);
    }

    #[tokio::test]
    async fn test_login_server_error_keeps_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(json!({"message": "Maintenance window"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).login(&login_body()).await.unwrap_err();
        match err {
            ApiError::Status { status, ref message } => {
                assert_eq!(status, 503);
                assert_eq!(message.as_deref(), Some("Maintenance window"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(gate::AuthError::from(err).to_string(), "Maintenance window");
    }

    #[tokio::test]
    async fn test_login_server_error_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let err = client_for(&server).login(&login_body()).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, message: None }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client = ApiClient::new(ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..ApiConfig::default()
        });

        let err = client.login(&login_body()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(gate::AuthError::from(err).to_string(), "Network error");
    }

    #[tokio::test]
    async fn test_current_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {"id": "u1", "phoneNumber": "5551234567"}
            })))
            .mount(&server)
            .await;

        let user = client_for(&server).current_user().await.unwrap().unwrap();
        assert_eq!(user.id, "u1");
    }

    #[tokio::test]
    async fn test_current_user_anonymous() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        assert!(client_for(&server).current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_logout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/logout"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).logout().await.unwrap();
    }
}
