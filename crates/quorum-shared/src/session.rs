//! Locally persisted session data.
//!
//! The portal keeps one JSON blob per login on disk. This module reads it
//! once at session start; the token feeds gateway authentication and the
//! user id feeds message-ownership checks. A missing or malformed blob is
//! never fatal: it degrades to "no token, nothing is mine".

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SessionError;
use crate::types::lenient_id;

/// The current user as recorded at login time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionUser {
    /// Numeric user id, coerced from number or numeric string;
    /// `None` when the blob is missing or unparsable.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// The persisted session blob: bearer credential plus user identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StoredSession {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl StoredSession {
    /// Parse a raw session blob.
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the blob from disk, tolerating absence and corruption.
    ///
    /// Failures are logged and collapse to the default (empty) session,
    /// so the caller never has to branch on them.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Session blob unreadable");
                return Self::default();
            }
        };
        match Self::parse(&raw) {
            Ok(session) => session,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Session blob malformed");
                Self::default()
            }
        }
    }

    /// The session user's numeric id, if one was persisted and parsable.
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().and_then(|u| u.id)
    }
}
