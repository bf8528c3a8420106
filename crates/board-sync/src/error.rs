//! Board Errors

use std::time::Duration;

use thiserror::Error;

/// Common result type for board operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors raised while talking to the task API or loading configuration
///
/// `Clone` because one refetch result is handed to every caller that
/// joined the same in-flight request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Invalid board configuration: {0}")]
    InvalidConfig(String),
}

impl SyncError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        SyncError::Http { status, message: message.into() }
    }

    /// Message suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            SyncError::Http { message, .. } if !message.is_empty() => message.clone(),
            SyncError::Timeout(_) => "The server took too long to respond".to_string(),
            _ => "Failed to move task. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        assert_eq!(SyncError::http(409, "task locked").user_message(), "task locked");
        assert_eq!(
            SyncError::http(500, "").user_message(),
            "Failed to move task. Please try again."
        );
        assert_eq!(
            SyncError::Timeout(Duration::from_secs(10)).to_string(),
            "Request timed out after 10000ms"
        );
    }
}
