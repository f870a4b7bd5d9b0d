//! Client API handlers

use axum::{Json, extract::State, http::StatusCode};

use shared::{Client, ClientCreate};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};

/// GET /clients - list clients, oldest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Client>>> {
    Ok(Json(state.directory.list_clients()))
}

/// POST /clients - register a client
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ClientCreate>,
) -> AppResult<(StatusCode, Json<Client>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(
        &payload.reservation_number,
        "reservationNumber",
        MAX_SHORT_TEXT_LEN,
    )?;

    let client = state.directory.add_client(payload)?;
    Ok((StatusCode::CREATED, Json(client)))
}
