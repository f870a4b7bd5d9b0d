//! Quote API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use shared::{Quote, QuoteCreate, QuoteStatus};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text};

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: QuoteStatus,
}

/// GET /quotes - list quotes, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Quote>>> {
    Ok(Json(state.directory.list_quotes()))
}

/// POST /quotes - register a quote against an existing advisor
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<QuoteCreate>,
) -> AppResult<(StatusCode, Json<Quote>)> {
    validate_required_text(&payload.client_name, "clientName", MAX_NAME_LEN)?;
    if payload.comments.len() > MAX_NOTE_LEN {
        return Err(AppError::validation("comments is too long"));
    }

    let quote = state.directory.add_quote(payload)?;
    Ok((StatusCode::CREATED, Json(quote)))
}

/// PUT /quotes/:id/status - flip pending/done
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Quote>> {
    let quote = state.directory.set_quote_status(&id, payload.status)?;
    Ok(Json(quote))
}
