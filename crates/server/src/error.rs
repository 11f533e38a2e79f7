// crates/server/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use focus_flow_core::{BreakdownError, LifecycleError, StoreError};

/// Structured JSON error response for API errors
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request carried no caller identity header.
    #[error("Missing X-User-Id header")]
    MissingIdentity,

    /// The session id does not exist for this user. Rows owned by other
    /// users report the same error, so ids cannot be enumerated.
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Session already ended: {0}")]
    AlreadyEnded(String),

    /// No model-completion credential is configured.
    #[error("Model provider not configured")]
    LlmNotConfigured,

    #[error("Could not parse model reply: {0}")]
    UpstreamFormat(String),

    #[error("Model provider failed: {0}")]
    Upstream(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<LifecycleError> for ApiError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::NotFound { session_id } => ApiError::SessionNotFound(session_id),
            LifecycleError::AlreadyEnded { session_id } => ApiError::AlreadyEnded(session_id),
            LifecycleError::Store(e) => ApiError::Store(e),
        }
    }
}

impl From<BreakdownError> for ApiError {
    fn from(err: BreakdownError) -> Self {
        match err {
            BreakdownError::Format(msg) => ApiError::UpstreamFormat(msg),
            BreakdownError::Llm(e) => ApiError::Upstream(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::MissingIdentity => {
                tracing::warn!("Request missing caller identity");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Missing X-User-Id header"),
                )
            }
            ApiError::SessionNotFound(id) => {
                tracing::warn!(session_id = %id, "Session not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_details("Session not found", format!("Session ID: {}", id)),
                )
            }
            ApiError::AlreadyEnded(id) => {
                tracing::warn!(session_id = %id, "Session already ended");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Session already ended"),
                )
            }
            ApiError::LlmNotConfigured => {
                tracing::warn!("Breakdown requested without a configured model credential");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new(
                        "OpenAI API key not configured. Set OPENAI_API_KEY in the server environment.",
                    ),
                )
            }
            ApiError::UpstreamFormat(msg) => {
                tracing::error!(message = %msg, "Unparseable model reply");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::with_details("Could not parse AI response as JSON", msg.clone()),
                )
            }
            ApiError::Upstream(msg) => {
                tracing::error!(message = %msg, "Model provider failure");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::with_details("Model provider failure", msg.clone()),
                )
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Storage error"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    /// Helper to extract status code and body from a response
    async fn extract_response(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error_response)
    }

    #[tokio::test]
    async fn missing_identity_returns_400() {
        let (status, body) = extract_response(ApiError::MissingIdentity.into_response()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Missing X-User-Id header");
    }

    #[tokio::test]
    async fn session_not_found_returns_404() {
        let error = ApiError::SessionNotFound("abc123".to_string());
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Session not found");
        assert!(body.details.unwrap().contains("abc123"));
    }

    #[tokio::test]
    async fn already_ended_returns_400() {
        let error = ApiError::AlreadyEnded("abc123".to_string());
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Session already ended");
    }

    #[tokio::test]
    async fn unconfigured_llm_returns_503() {
        let (status, body) = extract_response(ApiError::LlmNotConfigured.into_response()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.error.contains("not configured"));
    }

    #[tokio::test]
    async fn upstream_errors_return_502() {
        let error = ApiError::UpstreamFormat("expected a JSON array".to_string());
        let (status, body) = extract_response(error.into_response()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.details.unwrap().contains("expected a JSON array"));

        let error = ApiError::Upstream("completion provider returned 500: boom".to_string());
        let (status, _) = extract_response(error.into_response()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn store_error_returns_500_without_details() {
        let error = ApiError::Store(StoreError::Backend("disk full".to_string()));
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Storage error");
        // Backend details stay out of client responses.
        assert!(body.details.is_none());
    }

    #[test]
    fn lifecycle_errors_map_onto_api_errors() {
        let err: ApiError = LifecycleError::NotFound {
            session_id: "s1".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::SessionNotFound(id) if id == "s1"));

        let err: ApiError = LifecycleError::AlreadyEnded {
            session_id: "s1".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::AlreadyEnded(_)));
    }

    #[test]
    fn error_response_serialization_skips_empty_details() {
        let response = ErrorResponse::new("Test error");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\":\"Test error\""));
        assert!(!json.contains("details"));

        let response = ErrorResponse::with_details("Test error", "More info");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"details\":\"More info\""));
    }
}
