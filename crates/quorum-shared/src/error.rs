use thiserror::Error;

/// Errors produced while reading the persisted session blob.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The blob file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The blob is not valid JSON of the expected shape.
    #[error("Session parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
