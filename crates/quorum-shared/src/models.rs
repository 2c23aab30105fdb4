//! Wire models exchanged with the remote conversation gateway.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::IMAGE_EXTENSIONS;
use crate::types::{lenient_id, ConversationId, MessageId};

// ---------------------------------------------------------------------------
// Conversation
// ---------------------------------------------------------------------------

/// A discussion thread, scoped to zero-or-one group.
///
/// Treated as append-only once created: the client never edits
/// conversation metadata, only removes the entry after a server-side
/// delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    /// Stable identifier for the conversation's lifetime.
    pub id: ConversationId,
    /// Non-empty thread title.
    pub title: String,
    /// Optional classifier (e.g. "announcement", "question").
    #[serde(default)]
    pub category: Option<String>,
    /// Display name of the author.
    #[serde(default)]
    pub author: String,
    /// Slug of the owning group, if any.
    #[serde(default)]
    pub group: Option<String>,
    /// Whether the thread is pinned in listings.
    #[serde(default)]
    pub pinned: bool,
    /// Display-only reply counter, never recomputed locally.
    #[serde(default)]
    pub reply_count: u32,
    /// Display-only view counter, never recomputed locally.
    #[serde(default)]
    pub view_count: u32,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// The author of a message as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Sender {
    /// Sender id, coerced from number or numeric string; `None` when the
    /// backend sends something unparsable.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// A single post within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    /// Textual content; may equal the attachment placeholder when the
    /// post carried only a file.
    pub content: String,
    /// URL of an uploaded attachment, if any.
    #[serde(default)]
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Whether this message was written by the current user.
    ///
    /// Ownership is derived, not stored: the sender id is compared
    /// against the session user's id. An absent or unparsable id on
    /// either side means the message is never "mine".
    pub fn is_own(&self, current_user_id: Option<i64>) -> bool {
        match (self.sender.id, current_user_id) {
            (Some(sender), Some(current)) => sender == current,
            _ => false,
        }
    }

    /// Icon affordance for an already-uploaded attachment, judged by the
    /// file extension of its URL.
    pub fn attachment_kind(&self) -> Option<AttachmentKind> {
        self.file_url.as_deref().map(AttachmentKind::from_url)
    }
}

/// How an attachment should be rendered: inline image or generic
/// document affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentKind {
    Image,
    Document,
}

impl AttachmentKind {
    /// Judge by MIME type (pending attachments).
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else {
            Self::Document
        }
    }

    /// Judge by file extension (already-uploaded URLs).
    pub fn from_url(url: &str) -> Self {
        let ext = url
            .rsplit('.')
            .next()
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        if IMAGE_EXTENSIONS.iter().any(|i| *i == ext) {
            Self::Image
        } else {
            Self::Document
        }
    }
}

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// Metadata of the group a conversation listing is scoped to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Display-only member counter.
    #[serde(default)]
    pub member_count: u32,
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    #[serde(default)]
    pub has_more: bool,
}

// ---------------------------------------------------------------------------
// Outgoing payloads
// ---------------------------------------------------------------------------

/// The raw bytes the gateway transmits as the multipart file part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPayload {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl AttachmentPayload {
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Parameters for starting a new conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationDraft {
    pub title: String,
    pub category: Option<String>,
    pub group: Option<String>,
    pub content: String,
    pub attachment: Option<AttachmentPayload>,
}

/// A message submission bound for an existing conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMessage {
    pub conversation_id: ConversationId,
    pub content: String,
    pub attachment: Option<AttachmentPayload>,
}
