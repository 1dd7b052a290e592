//! Reacting to the authentication state of the session.
//!
//! The session itself belongs to whatever performs the login (see
//! [`Authenticator`](crate::Authenticator)); this module only reads it through
//! [`SessionSource`] and sends the user on once it turns authenticated.

use std::cell::Cell;

use crate::redirect::{NavigateOptions, Navigator, RedirectResolver};

/// Snapshot of the external session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    /// Opaque identity of the signed-in user.
    pub identity: Option<String>,
}

impl SessionState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(identity: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            identity: Some(identity.into()),
        }
    }
}

/// Read access to the session.
pub trait SessionSource {
    fn session(&self) -> SessionState;
}

impl<S: SessionSource + ?Sized> SessionSource for &S {
    fn session(&self) -> SessionState {
        (**self).session()
    }
}

impl<S: SessionSource + ?Sized> SessionSource for std::rc::Rc<S> {
    fn session(&self) -> SessionState {
        (**self).session()
    }
}

/// Redirects away from the login page once the session is authenticated.
///
/// Call [`observe`](Self::observe) on mount and after every session change.
/// Repeated authenticated observations redirect only once; going back to
/// anonymous re-arms the observer.
pub struct SessionObserver<S, N> {
    session: S,
    navigator: N,
    resolver: RedirectResolver,
    redirected: Cell<bool>,
}

impl<S: SessionSource, N: Navigator> SessionObserver<S, N> {
    pub fn new(session: S, navigator: N, resolver: RedirectResolver) -> Self {
        Self {
            session,
            navigator,
            resolver,
            redirected: Cell::new(false),
        }
    }

    /// Returns the path navigated to, if this observation redirected.
    pub fn observe(&self) -> Option<String> {
        let state = self.session.session();
        if !state.authenticated {
            self.redirected.set(false);
            return None;
        }
        if self.redirected.get() {
            return None;
        }

        let intent = self.navigator.current_intent();
        let target = self.resolver.resolve(intent.as_ref());
        tracing::info!(
            identity = state.identity.as_deref().unwrap_or("unknown"),
            "session authenticated, redirecting to {}",
            target
        );
        self.navigator.navigate(&target, NavigateOptions::replace());
        self.redirected.set(true);
        Some(target)
    }
}
