//! `/participants` endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    domain::ParticipantName,
    infrastructure::dto::http::{ParticipantDto, RegisterParticipantRequest},
    ui::{error::ApiError, state::AppState},
};

/// Register a participant and announce the arrival
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterParticipantRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    let name = ParticipantName::try_from(request).map_err(ApiError::Validation)?;

    state.register_participant_usecase.execute(name).await?;
    Ok(StatusCode::CREATED)
}

/// List active participants
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantDto>>, ApiError> {
    let participants = state.list_participants_usecase.execute().await?;

    // Domain Model から DTO への変換
    Ok(Json(participants.into_iter().map(Into::into).collect()))
}
