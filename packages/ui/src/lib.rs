//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{
    use_api, use_auth, use_gate_config, AuthProvider, AuthState, LogoutButton,
    SessionAuthenticator, SignalSession,
};

mod login_form;
pub use login_form::LoginForm;

mod navigation;
pub use navigation::{use_intent, RouterNavigator};

pub mod toast;
pub use toast::{use_toasts, ToastHost, ToastNotifier, ToastQueue};
