//! In-memory gateway fake and model builders shared by the store tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use quorum_gateway::{Gateway, GatewayError, Result};
use quorum_shared::{
    Conversation, ConversationDraft, ConversationId, Group, Message, MessageId, OutgoingMessage,
    Page, Scope, Sender,
};

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

/// Scriptable gateway: queue outcomes up front, inspect recorded calls.
#[derive(Default)]
pub struct FakeGateway {
    listings: Mutex<VecDeque<Result<Page<Conversation>>>>,
    message_lists: Mutex<VecDeque<Result<Vec<Message>>>>,
    send_results: Mutex<VecDeque<Result<Message>>>,
    pub sent: Mutex<Vec<OutgoingMessage>>,
    pub deleted: Mutex<Vec<ConversationId>>,
    fail_deletes: Mutex<bool>,
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

    pub fn fail_deletes(&self) {
        *self.fail_deletes.lock().unwrap() = true;
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn list_conversations(&self, _scope: &Scope, _page: u32) -> Result<Page<Conversation>> {
        self.listings
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GatewayError::Status { status: 599 }))
    }

    async fn list_messages(&self, _conversation: ConversationId) -> Result<Vec<Message>> {
        self.message_lists
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GatewayError::Status { status: 599 }))
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
                let mut created = message(500, 1, &outgoing.content, 30);
                created.file_url = outgoing
                    .attachment
                    .as_ref()
                    .map(|a| format!("https://cdn.example/u/{}", a.file_name));
                Ok(created)
            })
    }

    async fn delete_conversation(&self, id: ConversationId) -> Result<()> {
        if *self.fail_deletes.lock().unwrap() {
            return Err(GatewayError::Status { status: 500 });
        }
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }

    async fn fetch_group(&self, slug: &str) -> Result<Group> {
        Ok(Group {
            slug: slug.to_string(),
            name: slug.to_string(),
            description: None,
            member_count: 0,
        })
    }
}
