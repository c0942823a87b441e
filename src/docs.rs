use utoipa::OpenApi;

use crate::common::error::ErrorBody;
use crate::modules::jobs::dto::{StatusResponse, SubmitJobRequest, SubmitJobResponse};
use crate::modules::transfer::dto::{DownloadResponse, UploadRequest, UploadResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::jobs::handler::submit_job,
        crate::modules::jobs::handler::check_status,
        crate::modules::transfer::handler::presigned_download,
        crate::modules::transfer::handler::presigned_upload,
    ),
    components(schemas(
        SubmitJobRequest,
        SubmitJobResponse,
        StatusResponse,
        UploadRequest,
        UploadResponse,
        DownloadResponse,
        ErrorBody,
    )),
    tags(
        (name = "Jobs", description = "Transformation job submission and completion tracking"),
        (name = "Transfer", description = "Presigned upload and download capabilities")
    )
)]
pub struct ApiDoc;
