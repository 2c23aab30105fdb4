/// Maximum attachment size in bytes (10 MiB)
pub const MAX_ATTACHMENT_SIZE: usize = 10 * 1024 * 1024;

/// Minimum message content length in characters (attachment-less sends)
pub const MIN_MESSAGE_LEN: usize = 10;

/// Content substituted when a message carries only an attachment
pub const ATTACHMENT_PLACEHOLDER_CONTENT: &str = "Sent an attachment";

/// MIME types accepted for outgoing attachments
pub const ALLOWED_ATTACHMENT_TYPES: [&str; 10] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// File extensions rendered with an image affordance for uploaded files
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

#[inline]
pub fn is_allowed_attachment_type(content_type: &str) -> bool {
    ALLOWED_ATTACHMENT_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(content_type))
}
