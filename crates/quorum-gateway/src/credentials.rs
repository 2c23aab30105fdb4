//! Bearer credential for gateway calls.
//!
//! Read once from the persisted session blob at construction time; this
//! crate never refreshes or mutates it. A missing token simply means the
//! gateway will answer 401 and the caller surfaces a re-login prompt.

use quorum_shared::StoredSession;

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    /// Take the token from a loaded session blob.
    pub fn from_session(session: &StoredSession) -> Self {
        Self {
            token: session.token.clone(),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// Value for the `Authorization` header, if a token is present.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}
