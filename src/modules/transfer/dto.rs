use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct DownloadQuery {
    pub output_key: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DownloadResponse {
    pub download_url: String,
    pub output_key: String,
    pub expires_in: u64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UploadRequest {
    /// Defaults to `video.mp4`; missing metadata never blocks the
    /// upload path.
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub upload_url: String,
    pub key: String,
    pub expires_in: u64,
    pub preview_url: String,
}
