// crates/core/src/llm/types.rs
//! Request/response/error types for the completion collaborator.

use thiserror::Error;

/// Request for a single text completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
}

/// Response from the completion collaborator.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    pub model: Option<String>,
}

/// Errors from the completion collaborator. All of these surface to the
/// caller as an upstream failure; none are retried.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The provider answered with a non-success status.
    #[error("completion provider returned {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The request never completed (connect, TLS, timeout).
    #[error("completion request failed: {0}")]
    Transport(String),

    /// A success status carrying a body we could not read.
    #[error("unexpected completion payload: {0}")]
    Payload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_status_and_message() {
        let err = LlmError::Upstream {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "completion provider returned 429: rate limited"
        );

        let err = LlmError::Transport("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "completion request failed: connection refused"
        );
    }
}
