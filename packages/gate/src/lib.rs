//! # Gate — client-side login workflow
//!
//! Everything between "the user pressed Login" and "the user lands on the page
//! they originally asked for", with no dependency on a UI framework. The
//! Dioxus frontend (`ui` crate) plugs its signals, router and toast queue into
//! the capability traits defined here.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`validate`] | Phone normalisation and submission validation |
//! | [`submit`] | [`SubmissionController`], the single-flight login state machine |
//! | [`session`] | [`SessionObserver`], redirects once the session becomes authenticated |
//! | [`redirect`] | [`RedirectResolver`] and the [`Navigator`] capability |
//! | [`notify`] | [`NotificationBridge`] and the [`Notifier`] capability |
//! | [`config`] | `gate.toml` configuration |
//! | [`memory`] | In-memory capabilities for tests and headless use |
//!
//! All capability futures are `!Send`: the workflow runs on the UI thread.

pub mod config;
pub mod memory;
pub mod notify;
pub mod redirect;
pub mod session;
pub mod submit;
pub mod validate;

pub use config::GateConfig;
pub use notify::{NotificationBridge, Notice, Notifier, Severity};
pub use redirect::{NavigateOptions, NavigationIntent, Navigator, RedirectResolver};
pub use session::{SessionObserver, SessionSource, SessionState};
pub use submit::{
    AuthError, Authenticator, LoginForm, LoginResult, SubmissionController, SubmissionState,
    SubmitOutcome,
};
pub use validate::{Credentials, ValidationError};
