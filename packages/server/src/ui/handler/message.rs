//! `/messages` endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::{
    domain::{MessageBody, MessageId},
    infrastructure::dto::http::{CreatedMessageDto, ListMessagesQuery, MessageDto, MessagePayload},
    ui::{error::ApiError, identity::Identity, state::AppState},
};

fn parse_body(
    payload: Result<Json<MessagePayload>, JsonRejection>,
) -> Result<MessageBody, ApiError> {
    let Json(payload) = payload?;
    MessageBody::try_from(payload).map_err(ApiError::Validation)
}

/// Post a message as the calling participant
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Identity(from): Identity,
    payload: Result<Json<MessagePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedMessageDto>), ApiError> {
    let body = parse_body(payload)?;
    let id = state.post_message_usecase.execute(from, body).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedMessageDto {
            id: id.into_string(),
        }),
    ))
}

/// List the messages visible to the caller, most recent first
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Identity(reader): Identity,
    query: Result<Query<ListMessagesQuery>, QueryRejection>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let Query(query) = query?;
    let limit = query.limit().map_err(ApiError::Validation)?;

    let messages = state.list_messages_usecase.execute(&reader, limit).await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

/// Replace recipient, text and type of one of the caller's messages
pub async fn edit_message(
    State(state): State<Arc<AppState>>,
    Identity(editor): Identity,
    Path(id): Path<String>,
    payload: Result<Json<MessagePayload>, JsonRejection>,
) -> Result<Json<MessageDto>, ApiError> {
    let body = parse_body(payload)?;
    let edited = state
        .edit_message_usecase
        .execute(&editor, &MessageId::new(id), body)
        .await?;

    Ok(Json(edited.into()))
}

/// Delete one of the caller's messages
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    Identity(actor): Identity,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_message_usecase
        .execute(&actor, &MessageId::new(id))
        .await?;

    Ok(StatusCode::OK)
}
