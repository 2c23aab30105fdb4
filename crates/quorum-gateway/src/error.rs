use thiserror::Error;

/// Errors produced by the remote conversation gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Transport-level failure (connection refused, TLS, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The bearer credential is missing, expired or rejected.
    #[error("Not authorized: credential missing or expired")]
    Unauthorized,

    /// The gateway answered with a non-success status.
    #[error("Gateway returned status {status}")]
    Status { status: u16 },
}

impl GatewayError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GatewayError::Unauthorized)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GatewayError>;
