use axum::routing::{get, post};
use axum::Router;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/download", get(handler::presigned_download))
        .route("/upload", post(handler::presigned_upload))
}
