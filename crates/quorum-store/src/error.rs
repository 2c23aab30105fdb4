use thiserror::Error;

use quorum_gateway::GatewayError;

/// Errors produced by the store layer.
///
/// Validation variants are raised before any network call; their display
/// strings are the exact texts surfaced to the user as notifications.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Attachment exceeds the 10 MiB limit.
    #[error("File size must be less than 10MB")]
    AttachmentTooLarge,

    /// Attachment MIME type is outside the allow-list.
    #[error("File type not supported")]
    AttachmentTypeNotSupported,

    /// Attachment-less message below the minimum content length.
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,

    /// Conversation title missing on creation.
    #[error("Title is required")]
    TitleRequired,

    /// The remote gateway call failed.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Local file could not be read while preparing an attachment.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Whether this error was raised client-side, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::AttachmentTooLarge
                | StoreError::AttachmentTypeNotSupported
                | StoreError::MessageTooShort
                | StoreError::TitleRequired
        )
    }

    /// Whether the underlying gateway call was rejected for credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, StoreError::Gateway(e) if e.is_unauthorized())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
