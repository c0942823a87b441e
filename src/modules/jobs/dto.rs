use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitJobRequest {
    /// Source object key, e.g. `uploads/ab12cd34-clip.mov`.
    pub input_key: Option<String>,
    /// Transformation code. `0` is a valid operation; only absence is
    /// rejected.
    pub operation: Option<i64>,
    /// Operation-specific parameters, passed through opaquely.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub params: Map<String, Value>,
    /// Explicit result location; derived from the input when omitted.
    pub output_key: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitJobResponse {
    pub job_id: Uuid,
    pub message_id: String,
    pub input_key: String,
    pub output_key: String,
    pub operation: i64,
    pub status: String,
}

/// Body of the queued message. The worker-facing contract: it carries
/// `output_key` only when the caller pinned one; otherwise the worker
/// re-derives it with [`super::keys::derive_output_key`].
#[derive(Debug, Serialize, Deserialize)]
pub struct JobMessage {
    pub job_id: Uuid,
    pub operation: i64,
    pub input_key: String,
    pub params: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_key: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct StatusQuery {
    pub output_key: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// `completed` once the result object exists, `processing` until
    /// then.
    pub status: String,
    pub output_key: String,
}
