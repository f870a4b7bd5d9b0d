//! Quote API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/quotes", get(handler::list).post(handler::create))
        .route("/quotes/{id}/status", put(handler::set_status))
}
