use axum::routing::{get, post};
use axum::Router;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod keys;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/job", post(handler::submit_job))
        .route("/status", get(handler::check_status))
}
