//! User-visible notifications.
//!
//! Toast-style messages are the only user-facing signal of outcome for
//! fire-and-forget operations like delete or send, so their wording is
//! part of the observable contract. The controller pushes every success
//! and failure through a [`Notifier`].

use tracing::{error, info};

pub const NOTICE_LOGIN_AGAIN: &str = "Please log in again";
pub const NOTICE_SELECT_CONVERSATION: &str = "Select a conversation first";
pub const NOTICE_MESSAGE_SENT: &str = "Message sent";
pub const NOTICE_CONVERSATION_CREATED: &str = "Conversation created";
pub const NOTICE_CONVERSATION_DELETED: &str = "Conversation deleted";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Sink for transient user-facing messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// Default sink: structured logs. The presentation layer substitutes
/// its own implementation to render actual toasts.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => info!(message, "notification"),
            Severity::Error => error!(message, "notification"),
        }
    }
}
