//! Conversation listing state for one scope.
//!
//! A failed refresh never wipes previously loaded data; the list only
//! changes on a successful fetch, a confirmed create or a confirmed
//! delete. Overlapping fetches are serialized by a generation ticket:
//! a completion carrying a stale ticket is discarded instead of
//! overwriting a newer response.

use std::sync::Arc;

use tracing::{debug, warn};

use quorum_gateway::{Gateway, GatewayError};
use quorum_shared::{Conversation, ConversationDraft, ConversationId, Page, Scope};

use crate::error::{Result, StoreError};

/// Ticket identifying one fetch attempt; stale tickets are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub(crate) fn matches(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

/// Holds the conversations of one scope with loading/error status.
pub struct ConversationStore {
    gateway: Arc<dyn Gateway>,
    scope: Scope,
    items: Vec<Conversation>,
    page: u32,
    has_more: bool,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl ConversationStore {
    pub fn new(gateway: Arc<dyn Gateway>, scope: Scope) -> Self {
        Self {
            gateway,
            scope,
            items: Vec::new(),
            page: 0,
            has_more: false,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[Conversation] {
        &self.items
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Mark a fetch as started. Starting a newer fetch invalidates any
    /// ticket handed out earlier.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.loading = true;
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// Apply a fetch outcome. `replace` swaps the whole list (refresh);
    /// otherwise the page is appended (pagination). Stale tickets are
    /// dropped without touching any state.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: std::result::Result<Page<Conversation>, GatewayError>,
        replace: bool,
    ) -> Result<()> {
        if !ticket.matches(self.generation) {
            debug!(current = self.generation, "Stale fetch discarded");
            return Ok(());
        }
        self.loading = false;
        match outcome {
            Ok(listing) => {
                if replace {
                    self.items = listing.items;
                } else {
                    self.items.extend(listing.items);
                }
                self.page = listing.page;
                self.has_more = listing.has_more;
                self.error = None;
                debug!(scope = %self.scope, page = self.page, count = self.items.len(), "Conversations updated");
                Ok(())
            }
            Err(e) => {
                // Previous data stays visible behind the error flag.
                warn!(scope = %self.scope, error = %e, "Conversation fetch failed");
                self.error = Some("Failed to load conversations".to_string());
                Err(e.into())
            }
        }
    }

    /// Fetch the first page, replacing the held list on success.
    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.begin_fetch();
        let outcome = self.gateway.list_conversations(&self.scope, 1).await;
        self.apply_fetch(ticket, outcome, true)
    }

    /// Fetch the page after the last one seen, appending on success.
    pub async fn fetch_next_page(&mut self) -> Result<()> {
        let next = self.page + 1;
        let ticket = self.begin_fetch();
        let outcome = self.gateway.list_conversations(&self.scope, next).await;
        self.apply_fetch(ticket, outcome, false)
    }

    /// Submit a new conversation. The created object is returned to the
    /// caller, which decides between inserting it and re-fetching.
    pub async fn create(&self, draft: &ConversationDraft) -> Result<Conversation> {
        if draft.title.trim().is_empty() {
            return Err(StoreError::TitleRequired);
        }
        let created = self.gateway.create_conversation(draft).await?;
        debug!(id = %created.id, "Conversation created");
        Ok(created)
    }

    /// Insert a freshly created conversation at the top of the list.
    pub fn insert_created(&mut self, conversation: Conversation) {
        self.items.insert(0, conversation);
    }

    /// Delete server-side, then drop the local entry on success.
    pub async fn delete(&mut self, id: ConversationId) -> Result<()> {
        self.gateway.delete_conversation(id).await?;
        self.items.retain(|c| c.id != id);
        debug!(conversation = %id, "Conversation removed");
        Ok(())
    }
}
