use thiserror::Error;

/// Failure talking to the auth backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error")]
    Transport(#[source] reqwest::Error),
    #[error("Unexpected response from server")]
    Decode(#[source] reqwest::Error),
    #[error("{}", .message.as_deref().unwrap_or("Server returned an error"))]
    Status { status: u16, message: Option<String> },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Transport(err)
        }
    }
}

/// Keeps what the server said; otherwise lets the login form use its fallback.
impl From<ApiError> for gate::AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(_) => gate::AuthError::new("Network error"),
            ApiError::Status {
                message: Some(message),
                ..
            } => gate::AuthError::new(message),
            ApiError::Status { message: None, .. } | ApiError::Decode(_) => {
                gate::AuthError::default()
            }
        }
    }
}
