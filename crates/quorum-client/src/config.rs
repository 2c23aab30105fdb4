//! Session configuration loaded from environment variables.
//!
//! All settings have defaults so a member-facing session can start with
//! zero configuration. One parameterized configuration replaces the
//! per-audience page variants: scope and permissions are data, not code.

use std::path::PathBuf;

use quorum_shared::Scope;

/// What the current session is allowed to do with conversations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permissions {
    /// May start new conversations in this scope.
    pub can_start_conversations: bool,
    /// May delete conversations (administration variant only).
    pub can_delete_conversations: bool,
}

impl Permissions {
    /// Regular member: start, never delete.
    pub fn member() -> Self {
        Self {
            can_start_conversations: true,
            can_delete_conversations: false,
        }
    }

    /// Administration variant: start and delete.
    pub fn manager() -> Self {
        Self {
            can_start_conversations: true,
            can_delete_conversations: true,
        }
    }

    /// Permission set for a persisted role string.
    pub fn for_role(role: Option<&str>) -> Self {
        match role {
            Some("admin") | Some("staff") => Self::manager(),
            _ => Self::member(),
        }
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::member()
    }
}

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the conversation gateway.
    /// Env: `QUORUM_API_URL`
    /// Default: `http://localhost:8080/api`
    pub api_url: String,

    /// Path of the persisted session blob (token + user).
    /// Env: `QUORUM_SESSION_PATH`
    /// Default: `./session.json`
    pub session_path: PathBuf,

    /// Conversation scope: a group slug, or "all" for the
    /// administrator view.
    /// Env: `QUORUM_SCOPE`
    /// Default: `all`
    pub scope: Scope,

    /// What this session may do; derived from the persisted role when
    /// not set explicitly.
    pub permissions: Permissions,

    /// Narrow-viewport presentation: selecting a conversation collapses
    /// the listing panel. Injected by the view layer, not env-driven.
    pub narrow_viewport: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080/api".to_string(),
            session_path: PathBuf::from("./session.json"),
            scope: Scope::All,
            permissions: Permissions::default(),
            narrow_viewport: false,
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("QUORUM_API_URL") {
            if !url.is_empty() {
                config.api_url = url;
            }
        }

        if let Ok(path) = std::env::var("QUORUM_SESSION_PATH") {
            if !path.is_empty() {
                config.session_path = PathBuf::from(path);
            }
        }

        if let Ok(scope) = std::env::var("QUORUM_SCOPE") {
            config.scope = match scope.trim() {
                "" | "all" => Scope::All,
                slug => Scope::Group(slug.to_string()),
            };
        }

        config
    }
}
