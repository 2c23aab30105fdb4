//! Scriptable gateway fake and recording notifier for controller tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use quorum_gateway::{Gateway, Result};
use quorum_shared::{
    Conversation, ConversationDraft, ConversationId, Group, Message, MessageId, OutgoingMessage,
    Page, Scope, Sender,
};

use crate::notify::{Notifier, Severity};

pub fn conversation(id: i64, title: &str) -> Conversation {
    Conversation {
        id: ConversationId(id),
        title: title.to_string(),
        category: None,
        author: "Ada".to_string(),
        group: None,
        pinned: false,
        reply_count: 0,
        view_count: 0,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
    }
}

pub fn message(id: i64, sender_id: i64, content: &str, minute: u32) -> Message {
    Message {
        id: MessageId(id),
        sender: Sender {
            id: Some(sender_id),
            name: "Ada".to_string(),
            role: None,
        },
        content: content.to_string(),
        file_url: None,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, minute, 0).unwrap(),
    }
}

pub fn page(items: Vec<Conversation>) -> Page<Conversation> {
    Page {
        items,
        page: 1,
        has_more: false,
    }
}

#[derive(Default)]
pub struct FakeGateway {
    listings: Mutex<VecDeque<Result<Page<Conversation>>>>,
    message_lists: Mutex<VecDeque<Result<Vec<Message>>>>,
    send_results: Mutex<VecDeque<Result<Message>>>,
    groups: Mutex<VecDeque<Result<Group>>>,
    pub sent: Mutex<Vec<OutgoingMessage>>,
    pub deleted: Mutex<Vec<ConversationId>>,
    pub group_requests: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub fn push_listing(&self, outcome: Result<Page<Conversation>>) {
        self.listings.lock().unwrap().push_back(outcome);
    }

    pub fn push_messages(&self, outcome: Result<Vec<Message>>) {
        self.message_lists.lock().unwrap().push_back(outcome);
    }

    pub fn push_send(&self, outcome: Result<Message>) {
        self.send_results.lock().unwrap().push_back(outcome);
    }

    pub fn push_group(&self, outcome: Result<Group>) {
        self.groups.lock().unwrap().push_back(outcome);
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted.lock().unwrap().len()
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn list_conversations(&self, _scope: &Scope, _page: u32) -> Result<Page<Conversation>> {
        self.listings
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(page(Vec::new())))
    }

    async fn list_messages(&self, _conversation: ConversationId) -> Result<Vec<Message>> {
        self.message_lists
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_conversation(&self, draft: &ConversationDraft) -> Result<Conversation> {
        Ok(conversation(900, &draft.title))
    }

    async fn send_message(&self, outgoing: &OutgoingMessage) -> Result<Message> {
        self.sent.lock().unwrap().push(outgoing.clone());
        self.send_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                let mut created = message(501, 9, &outgoing.content, 30);
                created.file_url = outgoing
                    .attachment
                    .as_ref()
                    .map(|a| format!("https://cdn.example/u/{}", a.file_name));
                Ok(created)
            })
    }

    async fn delete_conversation(&self, id: ConversationId) -> Result<()> {
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }

    async fn fetch_group(&self, slug: &str) -> Result<Group> {
        self.group_requests.lock().unwrap().push(slug.to_string());
        self.groups.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(Group {
                slug: slug.to_string(),
                name: "Alumni".to_string(),
                description: None,
                member_count: 12,
            })
        })
    }
}

/// Captures every toast for assertion.
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn contains(&self, text: &str) -> bool {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .any(|(_, m)| m == text)
    }

    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}
