//! The session controller: one conversation-browsing view instance.
//!
//! Owns the selection, orchestrates initial load, refresh, selection
//! changes and message submission, and reconciles the conversation
//! store, the message store and the pending attachment into one
//! consistent view state. Every gateway failure is caught here and
//! converted into a notification; nothing escapes as a panic.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use quorum_gateway::{Credentials, Gateway, HttpGateway};
use quorum_shared::{
    AttachmentPayload, ConversationDraft, ConversationId, Group, Message, Scope, SessionUser,
    StoredSession,
};
use quorum_store::{
    AttachmentPreparer, ConversationStore, MessageStore, PendingAttachment, StoreError,
};

use crate::config::{Permissions, SessionConfig};
use crate::notify::{
    Notifier, Severity, TracingNotifier, NOTICE_CONVERSATION_CREATED, NOTICE_CONVERSATION_DELETED,
    NOTICE_LOGIN_AGAIN, NOTICE_MESSAGE_SENT, NOTICE_SELECT_CONVERSATION,
};

pub struct SessionController {
    config: SessionConfig,
    gateway: Arc<dyn Gateway>,
    notifier: Arc<dyn Notifier>,
    user: SessionUser,
    conversations: ConversationStore,
    messages: MessageStore,
    attachment: AttachmentPreparer,
    compose: String,
    selected: Option<ConversationId>,
    group: Option<Group>,
    panel_collapsed: bool,
}

impl SessionController {
    /// Build a controller with injected collaborators. The session user
    /// is read once, here; this subsystem never mutates it.
    pub fn new(
        config: SessionConfig,
        gateway: Arc<dyn Gateway>,
        user: SessionUser,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let conversations = ConversationStore::new(gateway.clone(), config.scope.clone());
        let messages = MessageStore::new(gateway.clone());
        Self {
            config,
            gateway,
            notifier,
            user,
            conversations,
            messages,
            attachment: AttachmentPreparer::new(),
            compose: String::new(),
            selected: None,
            group: None,
            panel_collapsed: false,
        }
    }

    /// Production wiring: read the persisted session blob, derive
    /// permissions from the stored role, talk to the HTTP gateway, and
    /// log notifications until a view layer takes over.
    pub fn bootstrap(mut config: SessionConfig) -> Self {
        let session = StoredSession::load(&config.session_path);
        let user = session.user.clone().unwrap_or_default();
        config.permissions = Permissions::for_role(user.role.as_deref());

        let gateway = Arc::new(HttpGateway::new(
            config.api_url.clone(),
            Credentials::from_session(&session),
        ));
        info!(scope = %config.scope, user = ?user.id, "Session starting");
        Self::new(config, gateway, user, Arc::new(TracingNotifier))
    }

    // -- view accessors ----------------------------------------------------

    pub fn conversations(&self) -> &ConversationStore {
        &self.conversations
    }

    pub fn messages(&self) -> &MessageStore {
        &self.messages
    }

    pub fn group(&self) -> Option<&Group> {
        self.group.as_ref()
    }

    pub fn selected(&self) -> Option<ConversationId> {
        self.selected
    }

    pub fn compose(&self) -> &str {
        &self.compose
    }

    pub fn set_compose(&mut self, text: impl Into<String>) {
        self.compose = text.into();
    }

    pub fn pending_attachment(&self) -> Option<&PendingAttachment> {
        self.attachment.current()
    }

    pub fn panel_collapsed(&self) -> bool {
        self.panel_collapsed
    }

    pub fn expand_panel(&mut self) {
        self.panel_collapsed = false;
    }

    /// Whether a message belongs to the session user.
    pub fn is_own(&self, message: &Message) -> bool {
        message.is_own(self.user.id)
    }

    // -- lifecycle ---------------------------------------------------------

    /// Initial load: group metadata first (when scoped to one), then the
    /// conversation listing. A failed group fetch does not stop the
    /// listing from loading.
    pub async fn initialize(&mut self) {
        if let Scope::Group(slug) = self.config.scope.clone() {
            match self.gateway.fetch_group(&slug).await {
                Ok(group) => self.group = Some(group),
                Err(e) => {
                    warn!(slug = %slug, error = %e, "Group fetch failed");
                    self.notifier.notify(Severity::Error, "Failed to load group");
                }
            }
        }
        if let Err(e) = self.conversations.refresh().await {
            self.report("Failed to load conversations", &e);
        }
    }

    /// Switch the selection. Stale message state and any pending
    /// attachment are dropped *before* the new fetch goes out, so the
    /// previous conversation's messages are never shown under the new
    /// title. Re-selecting the current conversation is a no-op.
    pub async fn select_conversation(&mut self, id: ConversationId) {
        if self.selected == Some(id) {
            return;
        }
        debug!(conversation = %id, "Selection changed");
        self.selected = Some(id);
        self.messages.clear();
        self.attachment.clear();
        if self.config.narrow_viewport {
            self.panel_collapsed = true;
        }
        if let Err(e) = self.messages.fetch(id).await {
            self.report("Failed to load messages", &e);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.messages.clear();
        self.attachment.clear();
        self.panel_collapsed = false;
    }

    /// Manual refresh: listing first, then the selected conversation's
    /// messages. The two are a best-effort pair; one failing does not
    /// abort the other.
    pub async fn refresh(&mut self) {
        if let Err(e) = self.conversations.refresh().await {
            self.report("Failed to load conversations", &e);
        }
        if let Some(id) = self.selected {
            if let Err(e) = self.messages.fetch(id).await {
                self.report("Failed to load messages", &e);
            }
        }
    }

    /// End of the session view: stale message state must not leak into
    /// the next mount.
    pub fn teardown(&mut self) {
        self.clear_selection();
        self.compose.clear();
    }

    // -- composition -------------------------------------------------------

    /// Validate and stage a chosen file; rejection keeps any previous
    /// selection and surfaces the validation text as-is.
    pub fn select_attachment(&mut self, payload: AttachmentPayload) {
        if let Err(e) = self.attachment.select(payload) {
            self.report("Failed to attach file", &e);
        }
    }

    /// Stage a file read from disk (desktop picker path).
    pub async fn select_attachment_path(&mut self, path: &Path, mime_type: Option<&str>) {
        if let Err(e) = self.attachment.select_path(path, mime_type).await {
            self.report("Failed to attach file", &e);
        }
    }

    pub fn remove_attachment(&mut self) {
        self.attachment.clear();
    }

    /// Submit the composed message to the selected conversation.
    ///
    /// Client-side guards reject without a network call: no selection,
    /// a send already in flight, or the content/attachment invariant.
    /// Success clears the compose text and attachment; failure leaves
    /// both intact so the user can retry.
    pub async fn submit_message(&mut self) {
        let Some(conversation) = self.selected else {
            self.notifier
                .notify(Severity::Error, NOTICE_SELECT_CONVERSATION);
            return;
        };
        if self.messages.is_sending() {
            debug!("Send already in flight, ignoring");
            return;
        }

        let attachment = self.attachment.current().map(|p| p.payload.clone());
        match self.messages.send(conversation, &self.compose, attachment).await {
            Ok(_) => {
                self.compose.clear();
                self.attachment.clear();
                self.notifier.notify(Severity::Success, NOTICE_MESSAGE_SENT);
            }
            Err(e) => self.report("Failed to send message", &e),
        }
    }

    // -- conversation management -------------------------------------------

    /// Start a new conversation in the current scope, then re-fetch the
    /// listing so the canonical server ordering is shown.
    pub async fn start_conversation(&mut self, draft: ConversationDraft) {
        if !self.config.permissions.can_start_conversations {
            self.notifier
                .notify(Severity::Error, "You are not allowed to start conversations");
            return;
        }
        match self.conversations.create(&draft).await {
            Ok(created) => {
                debug!(id = %created.id, "Conversation started");
                self.notifier
                    .notify(Severity::Success, NOTICE_CONVERSATION_CREATED);
                if let Err(e) = self.conversations.refresh().await {
                    self.report("Failed to load conversations", &e);
                }
            }
            Err(e) => self.report("Failed to create conversation", &e),
        }
    }

    /// Delete a conversation after a blocking yes/no confirmation.
    /// Declining makes no gateway call and changes nothing.
    pub async fn delete_conversation(
        &mut self,
        id: ConversationId,
        confirm: impl FnOnce() -> bool,
    ) {
        if !self.config.permissions.can_delete_conversations {
            self.notifier
                .notify(Severity::Error, "You are not allowed to delete conversations");
            return;
        }
        if !confirm() {
            debug!(conversation = %id, "Delete cancelled by user");
            return;
        }
        match self.conversations.delete(id).await {
            Ok(()) => {
                self.notifier
                    .notify(Severity::Success, NOTICE_CONVERSATION_DELETED);
                if self.selected == Some(id) {
                    self.clear_selection();
                }
            }
            Err(e) => self.report("Failed to delete conversation", &e),
        }
    }

    // -- failure policy ----------------------------------------------------

    /// One funnel for every operation failure: authorization problems
    /// prompt a re-login, validation texts pass through verbatim, and
    /// everything else collapses to the operation's generic message.
    fn report(&self, fallback: &str, err: &StoreError) {
        if err.is_unauthorized() {
            warn!(error = %err, "Credential rejected");
            self.notifier.notify(Severity::Error, NOTICE_LOGIN_AGAIN);
            return;
        }
        if err.is_validation() {
            self.notifier.notify(Severity::Error, &err.to_string());
            return;
        }
        error!(error = %err, context = fallback, "Operation failed");
        self.notifier.notify(Severity::Error, fallback);
    }
}
