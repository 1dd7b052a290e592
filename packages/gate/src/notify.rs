//! Mapping login outcomes to user-facing messages.

use crate::validate::ValidationError;

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGIN_REJECTED: &str = "Invalid phone number or password";
pub const LOGIN_FAILED_FALLBACK: &str = "Login failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

/// Capability to show a message to the user (toast, banner, ...).
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity)
    }
}

impl<N: Notifier + ?Sized> Notifier for std::rc::Rc<N> {
    fn notify(&self, message: &str, severity: Severity) {
        (**self).notify(message, severity)
    }
}

/// Every outcome the user hears about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Invalid(ValidationError),
    Rejected,
    Exception(Option<String>),
    Success,
}

impl Notice {
    pub fn severity(&self) -> Severity {
        match self {
            Notice::Success => Severity::Success,
            _ => Severity::Error,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::Invalid(err) => err.to_string(),
            Notice::Rejected => LOGIN_REJECTED.to_string(),
            Notice::Exception(Some(msg)) if !msg.is_empty() => msg.clone(),
            Notice::Exception(_) => LOGIN_FAILED_FALLBACK.to_string(),
            Notice::Success => LOGIN_SUCCESS.to_string(),
        }
    }
}

/// Sends exactly one notification per [`Notice`].
pub struct NotificationBridge<N> {
    notifier: N,
}

impl<N: Notifier> NotificationBridge<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Show `notice`.
    pub fn signal(&self, notice: &Notice) {
        self.notifier.notify(&notice.message(), notice.severity());
    }
}
