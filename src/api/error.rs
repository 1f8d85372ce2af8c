//! Error types for the backend order API.

use thiserror::Error;

/// Errors that can occur while talking to the order API.
///
/// Two tiers are distinguished. [`ApiError::Rejected`] means the backend
/// answered but reported `success: false`; everything else is a transport
/// or unexpected failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with `success: false`.
    #[error("Request rejected: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// The request never produced a usable HTTP response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn rejected(message: Option<String>) -> Self {
        ApiError::Rejected { message }
    }

    /// Whether this is an application-level rejection rather than a transport failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }

    /// The server-provided message, if the backend supplied a non-empty one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }
}
