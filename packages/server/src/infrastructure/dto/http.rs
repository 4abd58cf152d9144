//! HTTP API DTOs.
//!
//! Field names follow the wire format of the chat API (`lastStatus`, `type`).
//! Request fields are optional so that missing fields surface as validation
//! errors listing every problem instead of a single decode failure.

use serde::{Deserialize, Serialize};

/// `POST /participants` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterParticipantRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// `POST /messages` and `PUT /messages/{id}` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// `GET /messages` query parameters
///
/// `limit` is kept as raw text so that non-numeric values are reported as
/// invalid input rather than silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMessagesQuery {
    #[serde(default)]
    pub limit: Option<String>,
}

/// Participant as returned by `GET /participants`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantDto {
    pub name: String,
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}

/// Message as returned by `GET /messages` and `PUT /messages/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
}

/// Body of `201 Created` responses that create a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedMessageDto {
    pub id: String,
}

/// Error body for validation failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorDto {
    pub errors: Vec<String>,
}

/// Error body for every other failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
