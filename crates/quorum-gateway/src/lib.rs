//! # quorum-gateway
//!
//! Client for the remote conversation gateway: the REST service that
//! persists conversations, messages and attachments. The [`Gateway`]
//! trait is the seam the stores and the session controller depend on;
//! [`HttpGateway`] is the production implementation, and unit tests
//! supply in-memory fakes.

pub mod credentials;
pub mod http;

mod error;

use async_trait::async_trait;

use quorum_shared::{
    Conversation, ConversationDraft, ConversationId, Group, Message, OutgoingMessage, Page, Scope,
};

pub use credentials::Credentials;
pub use error::{GatewayError, Result};
pub use http::HttpGateway;

/// Remote conversation gateway operations.
///
/// All calls are single-shot: no retries, no timeouts, no cancellation.
/// Callers own the failure policy (log, notify, keep prior state).
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Paginated conversation listing for a scope.
    async fn list_conversations(&self, scope: &Scope, page: u32) -> Result<Page<Conversation>>;

    /// All messages of one conversation; ordering is not guaranteed by
    /// the backend, the presentation layer re-sorts.
    async fn list_messages(&self, conversation: ConversationId) -> Result<Vec<Message>>;

    /// Start a new conversation; returns the canonical created object.
    async fn create_conversation(&self, draft: &ConversationDraft) -> Result<Conversation>;

    /// Post a message; returns the canonical created object.
    async fn send_message(&self, outgoing: &OutgoingMessage) -> Result<Message>;

    /// Delete a conversation server-side.
    async fn delete_conversation(&self, id: ConversationId) -> Result<()>;

    /// Metadata of the group a listing is scoped to.
    async fn fetch_group(&self, slug: &str) -> Result<Group>;
}
