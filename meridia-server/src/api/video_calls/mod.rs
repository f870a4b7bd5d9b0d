//! Video call API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/videocalls", get(handler::list).post(handler::create))
        .route("/videocalls/{id}/assign", put(handler::assign))
        .route("/videocalls/{id}/status", put(handler::set_status))
}
