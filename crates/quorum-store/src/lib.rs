//! # quorum-store
//!
//! In-memory synchronized state for the conversation client: the
//! conversation listing of one scope, the messages of the selected
//! conversation, and the pending-attachment selection. Each store wraps
//! its gateway calls so failures become flags and preserved data, never
//! panics or lost lists.

pub mod attachments;
pub mod conversations;
pub mod messages;

mod error;

#[cfg(test)]
pub(crate) mod testing;

pub use attachments::{AttachmentPreparer, PendingAttachment};
pub use conversations::{ConversationStore, FetchTicket};
pub use error::{Result, StoreError};
pub use messages::MessageStore;
