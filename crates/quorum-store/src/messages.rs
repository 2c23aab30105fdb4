//! Message state for the single currently selected conversation.
//!
//! There is no optimistic echo: a sent message appears only once the
//! gateway returns the created object. The internal list keeps arrival
//! order; [`MessageStore::sorted`] is the render-time ascending sort.

use std::sync::Arc;

use tracing::{debug, warn};

use quorum_gateway::{Gateway, GatewayError};
use quorum_shared::constants::{ATTACHMENT_PLACEHOLDER_CONTENT, MIN_MESSAGE_LEN};
use quorum_shared::{AttachmentPayload, ConversationId, Message, OutgoingMessage};

use crate::conversations::FetchTicket;
use crate::error::{Result, StoreError};

/// Holds the messages of the selected conversation with loading/error
/// status and a send-in-flight flag.
pub struct MessageStore {
    gateway: Arc<dyn Gateway>,
    conversation: Option<ConversationId>,
    items: Vec<Message>,
    loading: bool,
    sending: bool,
    error: Option<String>,
    generation: u64,
}

impl MessageStore {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            conversation: None,
            items: Vec::new(),
            loading: false,
            sending: false,
            error: None,
            generation: 0,
        }
    }

    pub fn conversation(&self) -> Option<ConversationId> {
        self.conversation
    }

    pub fn items(&self) -> &[Message] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Messages ascending by creation time, ready for rendering.
    ///
    /// Stable sort on an already-sorted list is a no-op, so repeated
    /// calls yield the same order.
    pub fn sorted(&self) -> Vec<Message> {
        let mut ordered = self.items.clone();
        ordered.sort_by_key(|m| m.created_at);
        ordered
    }

    fn begin_fetch(&mut self, conversation: ConversationId) -> FetchTicket {
        self.conversation = Some(conversation);
        self.loading = true;
        self.new_ticket()
    }

    fn new_ticket(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket::new(self.generation)
    }

    fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: std::result::Result<Vec<Message>, GatewayError>,
    ) -> Result<()> {
        if !ticket.matches(self.generation) {
            debug!(current = self.generation, "Stale message fetch discarded");
            return Ok(());
        }
        self.loading = false;
        match outcome {
            Ok(messages) => {
                debug!(count = messages.len(), "Messages updated");
                self.items = messages;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Message fetch failed");
                self.error = Some("Failed to load messages".to_string());
                Err(e.into())
            }
        }
    }

    /// Fetch all messages of a conversation, replacing the held list.
    pub async fn fetch(&mut self, conversation: ConversationId) -> Result<()> {
        let ticket = self.begin_fetch(conversation);
        let outcome = self.gateway.list_messages(conversation).await;
        self.apply_fetch(ticket, outcome)
    }

    /// Validate and submit a message, appending the server's object on
    /// success. Validation failures never reach the network; gateway
    /// failures leave the held list untouched.
    pub async fn send(
        &mut self,
        conversation: ConversationId,
        content: &str,
        attachment: Option<AttachmentPayload>,
    ) -> Result<Message> {
        let content = resolve_content(content, attachment.is_some())?;

        let outgoing = OutgoingMessage {
            conversation_id: conversation,
            content,
            attachment,
        };

        self.sending = true;
        let outcome = self.gateway.send_message(&outgoing).await;
        self.sending = false;

        match outcome {
            Ok(created) => {
                debug!(conversation = %conversation, message = %created.id, "Message confirmed");
                self.items.push(created.clone());
                Ok(created)
            }
            Err(e) => {
                warn!(conversation = %conversation, error = %e, "Message send failed");
                Err(e.into())
            }
        }
    }

    /// Empty the list and reset every flag. Called on selection change
    /// and on unmount so a stale list is never shown while the next
    /// conversation loads; outstanding fetch tickets become stale too.
    pub fn clear(&mut self) {
        self.conversation = None;
        self.items.clear();
        self.loading = false;
        self.sending = false;
        self.error = None;
        self.generation += 1;
    }
}

/// Content rules at submission time: with an attachment any text goes
/// (empty text becomes the placeholder); without one the trimmed text
/// must reach the minimum length.
fn resolve_content(content: &str, has_attachment: bool) -> Result<String> {
    let trimmed = content.trim();
    if has_attachment {
        if trimmed.is_empty() {
            return Ok(ATTACHMENT_PLACEHOLDER_CONTENT.to_string());
        }
        return Ok(trimmed.to_string());
    }
    if trimmed.chars().count() < MIN_MESSAGE_LEN {
        return Err(StoreError::MessageTooShort);
    }
    Ok(trimmed.to_string())
}
