//! `/status` endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use crate::ui::{error::ApiError, identity::Identity, state::AppState};

/// Record a heartbeat for the calling participant
pub async fn refresh_heartbeat(
    State(state): State<Arc<AppState>>,
    Identity(name): Identity,
) -> Result<StatusCode, ApiError> {
    state.refresh_heartbeat_usecase.execute(&name).await?;
    Ok(StatusCode::OK)
}
