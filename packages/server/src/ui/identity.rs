//! Caller identity taken from the `User` request header.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::domain::ParticipantName;

use super::error::ApiError;

/// Header carrying the caller's participant name
const IDENTITY_HEADER: &str = "user";

/// Name the caller claims to be
///
/// Extraction only checks that the header is present and non-blank. Whether the
/// name belongs to an active participant is decided by each use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(pub ParticipantName);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(IDENTITY_HEADER)
            .ok_or_else(|| ApiError::Validation(vec!["User header is required".to_string()]))?;

        // Names may contain non-ASCII characters sent as raw UTF-8.
        let raw = String::from_utf8(value.as_bytes().to_vec()).map_err(|_| {
            ApiError::Validation(vec!["User header must be valid UTF-8".to_string()])
        })?;

        ParticipantName::new(raw)
            .map(Identity)
            .map_err(|e| ApiError::Validation(vec![format!("User header: {e}")]))
    }
}
