//! Authentication context and hooks for the UI.

use api::{ApiClient, PhoneLogin, UserInfo};
use dioxus::prelude::*;
use gate::{AuthError, Authenticator, Credentials, GateConfig, LoginResult, SessionState};

use crate::toast::{ToastHost, ToastQueue};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn anonymous() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    /// The session as the login workflow sees it.
    pub fn session(&self) -> SessionState {
        match &self.user {
            Some(user) if !self.loading => SessionState::authenticated(user.id.clone()),
            _ => SessionState::anonymous(),
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_gate_config() -> GateConfig {
    use_context::<GateConfig>()
}

/// Reads the auth signal, subscribing the caller to session changes.
#[derive(Clone, Copy)]
pub struct SignalSession(pub Signal<AuthState>);

impl gate::SessionSource for SignalSession {
    fn session(&self) -> SessionState {
        self.0.read().session()
    }
}

/// Logs in through the API and, on success, stores the user in the auth signal.
#[derive(Clone)]
pub struct SessionAuthenticator {
    api: ApiClient,
    auth: Signal<AuthState>,
}

impl SessionAuthenticator {
    pub fn new(api: ApiClient, auth: Signal<AuthState>) -> Self {
        Self { api, auth }
    }
}

impl Authenticator for SessionAuthenticator {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResult, AuthError> {
        let response = self.api.login(&PhoneLogin::from(credentials)).await?;
        if !response.success {
            return Ok(LoginResult { success: false });
        }

        // Older backends only set the cookie; ask who we are.
        let user = match response.user {
            Some(user) => Some(user),
            None => match self.api.current_user().await {
                Ok(user) => user,
                Err(e) => {
                    tracing::warn!("login accepted but the session check failed: {}", e);
                    None
                }
            },
        };
        match user {
            Some(user) => {
                let mut auth = self.auth;
                auth.set(AuthState::signed_in(user));
            }
            None => tracing::warn!("login accepted but no session user was returned"),
        }
        Ok(LoginResult { success: true })
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: GateConfig, children: Element) -> Element {
    let api = use_context_provider(|| ApiClient::new(config.api.clone()));
    use_context_provider(|| config.clone());
    use_context_provider(|| Signal::new(ToastQueue::default()));
    use_context_provider(|| Signal::new(Option::<gate::NavigationIntent>::None));
    let mut auth_state = use_signal(AuthState::default);

    // Restore an existing session on mount
    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            match api.current_user().await {
                Ok(user) => {
                    tracing::debug!(restored = user.is_some(), "session check finished");
                    auth_state.set(AuthState {
                        user,
                        loading: false,
                    });
                }
                Err(e) => {
                    tracing::error!("Failed to restore session: {}", e);
                    auth_state.set(AuthState::anonymous());
                }
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
        ToastHost {}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let api = use_api();
    let nav = use_navigator();
    let login_path = use_gate_config().redirect.login_path;

    let onclick = move |_| {
        let api = api.clone();
        let login_path = login_path.clone();
        async move {
            match api.logout().await {
                Ok(()) => {
                    auth_state.set(AuthState::anonymous());
                    nav.replace(login_path);
                }
                Err(e) => tracing::error!("Failed to log out: {}", e),
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
