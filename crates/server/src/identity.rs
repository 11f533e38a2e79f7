// crates/server/src/identity.rs
//! Caller identity extraction.
//!
//! The user id arrives as a plain `X-User-Id` header and is trusted
//! verbatim. This extractor is the only place that trust lives; swapping it
//! for one that verifies a token upgrades the whole API at once.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;

/// Header carrying the caller-asserted user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The user a request acts as. Asserted, not authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| UserId(value.to_string()))
            .ok_or(ApiError::MissingIdentity)
    }
}
