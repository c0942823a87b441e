use tracing::info;
use uuid::Uuid;

use super::dto::{DownloadResponse, UploadRequest, UploadResponse};
use crate::common::error::ApiError;
use crate::state::AppState;

const DOWNLOAD_TTL_SECS: u64 = 3600;
const UPLOAD_TTL_SECS: u64 = 600;
const PREVIEW_TTL_SECS: u64 = 3600;

const DEFAULT_FILENAME: &str = "video.mp4";
const DEFAULT_CONTENT_TYPE: &str = "video/mp4";

pub struct TransferService;

impl TransferService {
    /// Mints a read capability for an existing output object. Absence
    /// here is an error, unlike the status check: "can I retrieve it"
    /// and "should I keep waiting" are different questions.
    pub async fn issue_download(
        state: AppState,
        output_key: Option<String>,
    ) -> Result<DownloadResponse, ApiError> {
        let output_key = match output_key.as_deref() {
            Some(k) if !k.is_empty() => k.to_string(),
            _ => {
                return Err(ApiError::InvalidRequest(
                    "Missing required parameter: output_key".into(),
                ))
            }
        };

        let exists = state
            .processed_store
            .head(&output_key)
            .await
            .map_err(|e| ApiError::BackendUnavailable(e.to_string()))?;
        if !exists {
            return Err(ApiError::NotFound(format!("File not found: {output_key}")));
        }

        let download_url = state
            .processed_store
            .presign_get(&output_key, DOWNLOAD_TTL_SECS)
            .await
            .map_err(|e| ApiError::BackendUnavailable(e.to_string()))?;

        Ok(DownloadResponse {
            download_url,
            output_key,
            expires_in: DOWNLOAD_TTL_SECS,
        })
    }

    /// Mints a short-lived write capability for a fresh `uploads/` key
    /// plus a longer-lived preview read capability for the same key.
    pub async fn issue_upload(
        state: AppState,
        req: UploadRequest,
    ) -> Result<UploadResponse, ApiError> {
        let filename = sanitize_filename(req.filename.as_deref());
        let content_type = req
            .content_type
            .filter(|ct| !ct.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        let key = fresh_upload_key(&filename);

        let upload_url = state
            .raw_store
            .presign_put(&key, UPLOAD_TTL_SECS, &content_type)
            .await
            .map_err(|e| ApiError::BackendUnavailable(e.to_string()))?;

        let preview_url = state
            .raw_store
            .presign_get(&key, PREVIEW_TTL_SECS)
            .await
            .map_err(|e| ApiError::BackendUnavailable(e.to_string()))?;

        info!(%key, %content_type, "upload capability issued");

        Ok(UploadResponse {
            upload_url,
            key,
            expires_in: UPLOAD_TTL_SECS,
            preview_url,
        })
    }
}

/// Collision resistance comes from the random disambiguator, not from
/// filename uniqueness.
fn fresh_upload_key(filename: &str) -> String {
    let unique_id = Uuid::new_v4().simple().to_string();
    format!("uploads/{}-{filename}", &unique_id[..8])
}

/// Filenames are untrusted; strip anything that would escape the
/// `uploads/` prefix before joining.
fn sanitize_filename(filename: Option<&str>) -> String {
    let cleaned: String = filename
        .unwrap_or(DEFAULT_FILENAME)
        .chars()
        .filter(|c| *c != '/' && *c != '\\')
        .collect();

    if cleaned.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        cleaned
    }
}
