//! # Submission controller — one login attempt at a time
//!
//! [`SubmissionController`] owns the [`SubmissionState`] of a login form and
//! drives each attempt through validation, the [`Authenticator`] call and the
//! resulting notification:
//!
//! ```text
//! Idle ──submit──▶ InFlight ──ok(success)──▶ Succeeded
//!   ▲                 │ ──ok(rejected)──▶ Failed("Invalid phone number or password")
//!   └── invalid ──────┘ ──err(e)────────▶ Failed(e.message | fallback)
//! ```
//!
//! Validation failures never reach `InFlight`. While an attempt is in flight,
//! further submits return [`SubmitOutcome::Busy`] without touching the
//! authenticator. `InFlight` is always left again: on resolution the terminal
//! state replaces it, and if the attempt is dropped before resolving a guard
//! puts the form back to `Idle`.
//!
//! The controller never writes the session. A successful [`Authenticator`] is
//! expected to update the session itself; [`SessionObserver`](crate::SessionObserver)
//! takes it from there.

use std::cell::RefCell;
use std::future::Future;

use thiserror::Error;

use crate::notify::{NotificationBridge, Notice, Notifier, LOGIN_FAILED_FALLBACK};
use crate::validate::{normalize_phone, validate_submission, Credentials, ValidationError};

/// Answer from the auth backend for well-formed credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginResult {
    pub success: bool,
}

/// Transport or unexpected failure while logging in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .message.as_deref().unwrap_or(LOGIN_FAILED_FALLBACK))]
pub struct AuthError {
    pub message: Option<String>,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// The credential-verification capability.
pub trait Authenticator {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginResult, AuthError>>;
}

impl<A: Authenticator + ?Sized> Authenticator for &A {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginResult, AuthError>> {
        (**self).login(credentials)
    }
}

impl<A: Authenticator + ?Sized> Authenticator for std::rc::Rc<A> {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginResult, AuthError>> {
        (**self).login(credentials)
    }
}

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub phone: String,
    pub password: String,
    pub consent: bool,
}

impl LoginForm {
    pub fn new(phone: impl Into<String>, password: impl Into<String>, consent: bool) -> Self {
        Self {
            phone: phone.into(),
            password: password.into(),
            consent,
        }
    }

    /// Phone input event. Non-digits are dropped as they are typed.
    pub fn set_phone(&mut self, raw: &str) {
        self.phone = normalize_phone(raw);
    }

    pub fn set_password(&mut self, raw: &str) {
        self.password = raw.to_string();
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }
}

/// What a call to [`SubmissionController::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another attempt was already in flight; nothing happened.
    Busy,
    Invalid(ValidationError),
    Succeeded,
    Failed(String),
}

type Listener = Box<dyn Fn(&SubmissionState)>;

/// Runs login attempts for one form instance.
pub struct SubmissionController<A, N> {
    auth: A,
    bridge: NotificationBridge<N>,
    state: RefCell<SubmissionState>,
    listener: Option<Listener>,
}

impl<A, N> SubmissionController<A, N> {
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.state.borrow().is_in_flight()
    }

    /// Call `listener` after every state change.
    pub fn with_listener(mut self, listener: impl Fn(&SubmissionState) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    fn transition(&self, next: SubmissionState) {
        let prev = self.state.replace(next.clone());
        if prev == next {
            return;
        }
        tracing::debug!(?prev, ?next, "login form state changed");
        if let Some(listener) = &self.listener {
            listener(&next);
        }
    }
}

impl<A: Authenticator, N: Notifier> SubmissionController<A, N> {
    pub fn new(auth: A, notifier: N) -> Self {
        Self {
            auth,
            bridge: NotificationBridge::new(notifier),
            state: RefCell::new(SubmissionState::Idle),
            listener: None,
        }
    }

    /// Validate `form` and, if it passes, log in with it.
    pub async fn submit(&self, form: &LoginForm) -> SubmitOutcome {
        if self.is_in_flight() {
            tracing::debug!("login already in flight, ignoring submit");
            return SubmitOutcome::Busy;
        }

        let credentials = match validate_submission(&form.phone, &form.password, form.consent) {
            Ok(credentials) => credentials,
            Err(err) => {
                tracing::debug!(%err, "login form rejected locally");
                self.transition(SubmissionState::Idle);
                self.bridge.signal(&Notice::Invalid(err));
                return SubmitOutcome::Invalid(err);
            }
        };

        self.transition(SubmissionState::InFlight);
        let _guard = InFlightGuard { controller: self };

        let notice = match self.auth.login(&credentials).await {
            Ok(LoginResult { success: true }) => {
                tracing::info!(phone = %credentials.masked_phone(), "login succeeded");
                Notice::Success
            }
            Ok(LoginResult { success: false }) => {
                tracing::warn!(phone = %credentials.masked_phone(), "login rejected");
                Notice::Rejected
            }
            Err(err) => {
                tracing::error!(phone = %credentials.masked_phone(), "login failed: {}", err);
                Notice::Exception(err.message)
            }
        };

        let (next, outcome) = match &notice {
            Notice::Success => (SubmissionState::Succeeded, SubmitOutcome::Succeeded),
            _ => {
                let reason = notice.message();
                (
                    SubmissionState::Failed(reason.clone()),
                    SubmitOutcome::Failed(reason),
                )
            }
        };
        self.transition(next);
        self.bridge.signal(&notice);
        outcome
    }
}

/// Puts the form back to `Idle` if an attempt ends while still `InFlight`.
struct InFlightGuard<'a, A, N> {
    controller: &'a SubmissionController<A, N>,
}

impl<A, N> Drop for InFlightGuard<'_, A, N> {
    fn drop(&mut self) {
        if self.controller.is_in_flight() {
            tracing::debug!("login attempt abandoned before resolving");
            self.controller.transition(SubmissionState::Idle);
        }
    }
}
