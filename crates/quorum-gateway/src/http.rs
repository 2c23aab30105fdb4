//! Production gateway implementation over HTTP.
//!
//! Plain JSON posts when no attachment is present, multipart form
//! submission when one is. No retries and no timeouts at this layer;
//! every call is a single request awaited to completion.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use quorum_shared::{
    Conversation, ConversationDraft, ConversationId, Group, Message, OutgoingMessage, Page, Scope,
};

use crate::credentials::Credentials;
use crate::error::{GatewayError, Result};
use crate::Gateway;

#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.credentials.authorization() {
            Some(value) => req.header("Authorization", value),
            None => req,
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        check_status(response.status())?;
        Ok(response.json::<T>().await?)
    }

    fn attachment_part(payload: &quorum_shared::AttachmentPayload) -> Result<Part> {
        let part = Part::bytes(payload.data.clone())
            .file_name(payload.file_name.clone())
            .mime_str(&payload.mime_type)?;
        Ok(part)
    }
}

/// Map a non-success status to the gateway error taxonomy.
fn check_status(status: StatusCode) -> Result<()> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(GatewayError::Unauthorized);
    }
    if !status.is_success() {
        return Err(GatewayError::Status {
            status: status.as_u16(),
        });
    }
    Ok(())
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn list_conversations(&self, scope: &Scope, page: u32) -> Result<Page<Conversation>> {
        let mut req = self
            .http
            .get(self.endpoint("conversations"))
            .query(&[("page", page.to_string())]);
        if let Some(slug) = scope.group_slug() {
            req = req.query(&[("scope", slug)]);
        }

        let response = self.authorize(req).send().await?;
        let listing: Page<Conversation> = Self::decode(response).await?;
        debug!(scope = %scope, page, count = listing.items.len(), "Fetched conversations");
        Ok(listing)
    }

    async fn list_messages(&self, conversation: ConversationId) -> Result<Vec<Message>> {
        let req = self
            .http
            .get(self.endpoint(&format!("conversations/{conversation}/messages")));

        let response = self.authorize(req).send().await?;
        let messages: Vec<Message> = Self::decode(response).await?;
        debug!(conversation = %conversation, count = messages.len(), "Fetched messages");
        Ok(messages)
    }

    async fn create_conversation(&self, draft: &ConversationDraft) -> Result<Conversation> {
        let req = self.http.post(self.endpoint("conversations"));
        let req = match &draft.attachment {
            Some(payload) => {
                let mut form = Form::new()
                    .text("title", draft.title.clone())
                    .text("content", draft.content.clone())
                    .part("file", Self::attachment_part(payload)?);
                if let Some(category) = &draft.category {
                    form = form.text("category", category.clone());
                }
                if let Some(group) = &draft.group {
                    form = form.text("group", group.clone());
                }
                req.multipart(form)
            }
            None => req.json(&serde_json::json!({
                "title": draft.title,
                "category": draft.category,
                "group": draft.group,
                "content": draft.content,
            })),
        };

        let response = self.authorize(req).send().await?;
        let created: Conversation = Self::decode(response).await?;
        debug!(id = %created.id, title = %created.title, "Conversation created");
        Ok(created)
    }

    async fn send_message(&self, outgoing: &OutgoingMessage) -> Result<Message> {
        let path = format!("conversations/{}/messages", outgoing.conversation_id);
        let req = self.http.post(self.endpoint(&path));
        let req = match &outgoing.attachment {
            Some(payload) => {
                let form = Form::new()
                    .text("content", outgoing.content.clone())
                    .part("file", Self::attachment_part(payload)?);
                req.multipart(form)
            }
            None => req.json(&serde_json::json!({ "content": outgoing.content })),
        };

        let response = self.authorize(req).send().await?;
        let created: Message = Self::decode(response).await?;
        debug!(
            conversation = %outgoing.conversation_id,
            message = %created.id,
            has_file = created.file_url.is_some(),
            "Message sent"
        );
        Ok(created)
    }

    async fn delete_conversation(&self, id: ConversationId) -> Result<()> {
        let req = self
            .http
            .delete(self.endpoint(&format!("conversations/{id}")));

        let response = self.authorize(req).send().await?;
        check_status(response.status())?;
        debug!(conversation = %id, "Conversation deleted");
        Ok(())
    }

    async fn fetch_group(&self, slug: &str) -> Result<Group> {
        let req = self.http.get(self.endpoint(&format!("groups/{slug}")));

        let response = self.authorize(req).send().await?;
        let group: Group = Self::decode(response).await?;
        debug!(slug = %group.slug, "Fetched group");
        Ok(group)
    }
}
