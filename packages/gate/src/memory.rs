//! In-memory capabilities for testing and headless use.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::notify::{Notifier, Severity};
use crate::redirect::{NavigateOptions, NavigationIntent, Navigator};
use crate::session::{SessionSource, SessionState};
use crate::submit::{AuthError, Authenticator, LoginResult};
use crate::validate::Credentials;

/// Session held in memory. Clones share the same state.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    state: Rc<RefCell<SessionState>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authenticated(identity: &str) -> Self {
        let session = Self::new();
        session.set(SessionState::authenticated(identity));
        session
    }

    pub fn set(&self, state: SessionState) {
        *self.state.borrow_mut() = state;
    }
}

impl SessionSource for MemorySession {
    fn session(&self) -> SessionState {
        self.state.borrow().clone()
    }
}

/// Authenticator answering every attempt with a preset response.
///
/// When linked to a [`MemorySession`], a successful login marks that session
/// authenticated, the way a real auth client would.
#[derive(Debug)]
pub struct MemoryAuth {
    response: RefCell<Result<LoginResult, AuthError>>,
    session: Option<MemorySession>,
    calls: Cell<usize>,
    last: RefCell<Option<Credentials>>,
}

impl MemoryAuth {
    pub fn new(response: Result<LoginResult, AuthError>) -> Self {
        Self {
            response: RefCell::new(response),
            session: None,
            calls: Cell::new(0),
            last: RefCell::new(None),
        }
    }

    pub fn accepting() -> Self {
        Self::new(Ok(LoginResult { success: true }))
    }

    pub fn rejecting() -> Self {
        Self::new(Ok(LoginResult { success: false }))
    }

    pub fn failing(message: Option<&str>) -> Self {
        Self::new(Err(AuthError {
            message: message.map(str::to_string),
        }))
    }

    pub fn with_session(mut self, session: MemorySession) -> Self {
        self.session = Some(session);
        self
    }

    pub fn set_response(&self, response: Result<LoginResult, AuthError>) {
        *self.response.borrow_mut() = response;
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_credentials(&self) -> Option<Credentials> {
        self.last.borrow().clone()
    }
}

impl Authenticator for MemoryAuth {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResult, AuthError> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(credentials.clone());

        let response = self.response.borrow().clone();
        if let (Ok(LoginResult { success: true }), Some(session)) = (&response, &self.session) {
            session.set(SessionState::authenticated(credentials.phone_number()));
        }
        response
    }
}

/// Navigator that records every navigation.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    intent: RefCell<Option<NavigationIntent>>,
    history: RefCell<Vec<(String, NavigateOptions)>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_intent(intent: NavigationIntent) -> Self {
        let nav = Self::new();
        nav.set_intent(Some(intent));
        nav
    }

    pub fn set_intent(&self, intent: Option<NavigationIntent>) {
        *self.intent.borrow_mut() = intent;
    }

    pub fn history(&self) -> Vec<(String, NavigateOptions)> {
        self.history.borrow().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, path: &str, options: NavigateOptions) {
        self.history.borrow_mut().push((path.to_string(), options));
    }

    fn current_intent(&self) -> Option<NavigationIntent> {
        self.intent.borrow().clone()
    }
}

/// Notifier that keeps every message it is given.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|(m, _)| m.clone()).collect()
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<(String, Severity)> {
        std::mem::take(&mut *self.sent.borrow_mut())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.sent.borrow_mut().push((message.to_string(), severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redirect::RedirectResolver;
    use crate::session::SessionObserver;
    use crate::submit::{LoginForm, SubmissionController, SubmissionState};

    #[tokio::test]
    async fn test_login_then_redirect_to_intent() {
        let session = MemorySession::new();
        let auth = MemoryAuth::accepting().with_session(session.clone());
        let notifier = RecordingNotifier::new();
        let nav = MemoryNavigator::with_intent(NavigationIntent::new("/dashboard"));

        let controller = SubmissionController::new(&auth, &notifier);
        let observer = SessionObserver::new(&session, &nav, RedirectResolver::default());

        // Mount: not signed in yet
        assert_eq!(observer.observe(), None);

        controller
            .submit(&LoginForm::new("5551234567", "secret", true))
            .await;
        assert_eq!(controller.state(), SubmissionState::Succeeded);

        // The session changed underneath us
        assert_eq!(observer.observe(), Some("/dashboard".to_string()));
        assert_eq!(
            nav.history(),
            vec![("/dashboard".to_string(), NavigateOptions { replace: true })]
        );
        assert_eq!(
            session.session().identity.as_deref(),
            Some("5551234567")
        );
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_session_alone() {
        let session = MemorySession::new();
        let auth = MemoryAuth::rejecting().with_session(session.clone());
        let notifier = RecordingNotifier::new();
        let nav = MemoryNavigator::new();

        let controller = SubmissionController::new(&auth, &notifier);
        let observer = SessionObserver::new(&session, &nav, RedirectResolver::default());

        controller
            .submit(&LoginForm::new("5551234567", "wrong", true))
            .await;

        assert!(!session.session().authenticated);
        assert_eq!(observer.observe(), None);
        assert!(nav.history().is_empty());
    }
}
