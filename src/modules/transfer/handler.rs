use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use super::dto::{DownloadQuery, DownloadResponse, UploadRequest, UploadResponse};
use super::service::TransferService;
use crate::common::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Presigned download URL for a processed object
#[utoipa::path(
    get,
    path = "/api/v1/download",
    params(DownloadQuery),
    responses(
        (status = 200, description = "One-hour download capability", body = DownloadResponse),
        (status = 400, description = "Missing output_key", body = ErrorBody),
        (status = 404, description = "Object does not exist", body = ErrorBody),
        (status = 502, description = "Object store unavailable", body = ErrorBody)
    ),
    tag = "Transfer"
)]
pub async fn presigned_download(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let resp = TransferService::issue_download(state, query.output_key).await?;
    Ok(Json(resp))
}

/// Presigned upload URL for a fresh raw-input key
#[utoipa::path(
    post,
    path = "/api/v1/upload",
    request_body = UploadRequest,
    responses(
        (status = 200, description = "Ten-minute upload capability plus preview URL", body = UploadResponse),
        (status = 502, description = "Object store unavailable", body = ErrorBody)
    ),
    tag = "Transfer"
)]
pub async fn presigned_upload(
    State(state): State<AppState>,
    Json(payload): Json<UploadRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let resp = TransferService::issue_upload(state, payload).await?;
    Ok(Json(resp))
}
