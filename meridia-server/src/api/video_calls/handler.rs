//! Video call API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use shared::{VideoCall, VideoCallCreate, VideoCallStatus};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignPayload {
    pub advisor_id: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: VideoCallStatus,
}

/// GET /videocalls - list calls, soonest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<VideoCall>>> {
    Ok(Json(state.directory.list_video_calls()))
}

/// POST /videocalls - schedule a call (starts unassigned)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<VideoCallCreate>,
) -> AppResult<(StatusCode, Json<VideoCall>)> {
    validate_required_text(&payload.client_name, "clientName", MAX_NAME_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let call = state.directory.add_video_call(payload)?;
    Ok((StatusCode::CREATED, Json(call)))
}

/// PUT /videocalls/:id/assign - hand the call to an advisor
pub async fn assign(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AssignPayload>,
) -> AppResult<Json<VideoCall>> {
    let call = state.directory.assign_video_call(&id, &payload.advisor_id)?;
    Ok(Json(call))
}

/// PUT /videocalls/:id/status - scheduled/completed/cancelled
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<VideoCall>> {
    let call = state.directory.set_video_call_status(&id, payload.status)?;
    Ok(Json(call))
}
