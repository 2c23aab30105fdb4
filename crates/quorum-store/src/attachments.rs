//! Attachment preparation: validate and preview a locally chosen file
//! before it is attached to a pending message.
//!
//! Validation order is fixed: size first, then MIME type. A rejected
//! file leaves any previously selected attachment untouched. Previews
//! (base64 data-URLs) are generated for image types only; everything
//! else falls back to a generic document affordance.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use quorum_shared::constants::{is_allowed_attachment_type, MAX_ATTACHMENT_SIZE};
use quorum_shared::{AttachmentKind, AttachmentPayload};

use crate::error::{Result, StoreError};

/// A validated, not-yet-submitted file selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAttachment {
    pub payload: AttachmentPayload,
    /// Base64 data-URL, present for image MIME types only.
    pub preview: Option<String>,
}

impl PendingAttachment {
    pub fn kind(&self) -> AttachmentKind {
        AttachmentKind::from_mime(&self.payload.mime_type)
    }
}

/// Holds at most one pending attachment for the composition in progress.
#[derive(Debug, Default)]
pub struct AttachmentPreparer {
    current: Option<PendingAttachment>,
}

impl AttachmentPreparer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&PendingAttachment> {
        self.current.as_ref()
    }

    pub fn has_attachment(&self) -> bool {
        self.current.is_some()
    }

    /// Validate a chosen file and store it as the pending attachment.
    ///
    /// On rejection the previous selection, if any, stays in place.
    pub fn select(&mut self, payload: AttachmentPayload) -> Result<()> {
        validate(&payload)?;
        let preview = payload.is_image().then(|| data_url(&payload));
        debug!(
            file = %payload.file_name,
            size = payload.size(),
            mime = %payload.mime_type,
            preview = preview.is_some(),
            "Attachment selected"
        );
        self.current = Some(PendingAttachment { payload, preview });
        Ok(())
    }

    /// Read a file from disk and select it.
    ///
    /// When no MIME type is supplied by the picker it is inferred from
    /// the file extension; unknown extensions fail the type check.
    pub async fn select_path(&mut self, path: &Path, mime_type: Option<&str>) -> Result<()> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let mime = match mime_type {
            Some(m) => m.to_string(),
            None => mime_for_path(path).unwrap_or_default(),
        };

        let data = tokio::fs::read(path).await?;
        self.select(AttachmentPayload {
            file_name,
            mime_type: mime,
            data,
        })
    }

    /// Drop the pending attachment and its preview.
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            debug!("Attachment cleared");
        }
    }

    /// Move the payload out for submission, dropping the preview.
    pub fn take_payload(&mut self) -> Option<AttachmentPayload> {
        self.current.take().map(|pending| pending.payload)
    }
}

/// Size limit first, then the MIME allow-list.
pub fn validate(payload: &AttachmentPayload) -> Result<()> {
    if payload.size() > MAX_ATTACHMENT_SIZE {
        return Err(StoreError::AttachmentTooLarge);
    }
    if !is_allowed_attachment_type(&payload.mime_type) {
        return Err(StoreError::AttachmentTypeNotSupported);
    }
    Ok(())
}

fn data_url(payload: &AttachmentPayload) -> String {
    format!(
        "data:{};base64,{}",
        payload.mime_type,
        STANDARD.encode(&payload.data)
    )
}

/// MIME type for a file-picker selection that carried none.
pub fn mime_for_path(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => return None,
    };
    Some(mime.to_string())
}
