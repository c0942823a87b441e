use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use super::dto::{StatusQuery, StatusResponse, SubmitJobRequest, SubmitJobResponse};
use super::service::JobService;
use crate::common::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Submit a transformation job
#[utoipa::path(
    post,
    path = "/api/v1/job",
    request_body = SubmitJobRequest,
    responses(
        (status = 200, description = "Job queued", body = SubmitJobResponse),
        (status = 400, description = "Missing input_key or operation", body = ErrorBody),
        (status = 502, description = "Queue unavailable", body = ErrorBody)
    ),
    tag = "Jobs"
)]
pub async fn submit_job(
    State(state): State<AppState>,
    Json(payload): Json<SubmitJobRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let resp = JobService::submit(state, payload).await?;
    Ok(Json(resp))
}

/// Check whether the transformed output exists yet
#[utoipa::path(
    get,
    path = "/api/v1/status",
    params(StatusQuery),
    responses(
        (status = 200, description = "completed or processing", body = StatusResponse),
        (status = 400, description = "Missing output_key", body = ErrorBody),
        (status = 502, description = "Object store unavailable", body = ErrorBody)
    ),
    tag = "Jobs"
)]
pub async fn check_status(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let resp = JobService::check(state, query.output_key).await?;
    Ok(Json(resp))
}
