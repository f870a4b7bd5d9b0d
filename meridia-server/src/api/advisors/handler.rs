//! Advisor API handlers

use axum::{Json, extract::State, http::StatusCode};

use shared::{Advisor, AdvisorCreate};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

/// GET /advisors - list advisors with their activity counters
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Advisor>>> {
    Ok(Json(state.directory.list_advisors()))
}

/// POST /advisors - register an advisor
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AdvisorCreate>,
) -> AppResult<(StatusCode, Json<Advisor>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;

    let advisor = state.directory.add_advisor(payload)?;
    Ok((StatusCode::CREATED, Json(advisor)))
}
