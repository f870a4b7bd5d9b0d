//! Tour API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use shared::{DeleteConfirmation, Tour, TourCreate};

use crate::core::ServerState;
use crate::db::repository::TourRepository;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// GET /tours - list the whole catalog
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Tour>>> {
    let repo = TourRepository::new(state.db.clone());
    let tours = repo.find_all().await?;
    Ok(Json(tours))
}

/// POST /tours - create a tour with form defaults applied
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TourCreate>,
) -> AppResult<(StatusCode, Json<Tour>)> {
    validate_required_text(&payload.tour_name, "tourName", MAX_NAME_LEN)?;

    let repo = TourRepository::new(state.db.clone());
    let tour = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(tour)))
}

/// PUT /tours/:id - replace the whole document
///
/// The id in the body is ignored; the path wins.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<Tour>,
) -> AppResult<Json<Tour>> {
    let repo = TourRepository::new(state.db.clone());
    let tour = repo.replace(&id, payload).await?;
    Ok(Json(tour))
}

/// DELETE /tours/:id - hard delete
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteConfirmation>> {
    let repo = TourRepository::new(state.db.clone());
    repo.delete(&id).await?;
    Ok(Json(DeleteConfirmation {
        message: "Tour deleted successfully".to_string(),
    }))
}
