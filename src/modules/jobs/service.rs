use anyhow::Context;
use tracing::info;
use uuid::Uuid;

use super::dto::{JobMessage, StatusResponse, SubmitJobRequest, SubmitJobResponse};
use super::keys::derive_output_key;
use crate::common::error::ApiError;
use crate::state::AppState;

pub struct JobService;

impl JobService {
    /// Validates the request, enqueues exactly one job message and
    /// returns the tracking receipt. Not idempotent: resubmitting the
    /// same input yields a fresh job_id and a second message.
    pub async fn submit(
        state: AppState,
        req: SubmitJobRequest,
    ) -> Result<SubmitJobResponse, ApiError> {
        let input_key = match req.input_key.as_deref() {
            Some(k) if !k.is_empty() => k.to_string(),
            _ => {
                return Err(ApiError::InvalidRequest(
                    "Missing required field: input_key".into(),
                ))
            }
        };
        // Presence check, not truthiness: operation 0 is valid.
        let operation = req.operation.ok_or_else(|| {
            ApiError::InvalidRequest("Missing required field: operation".into())
        })?;

        let job_id = Uuid::new_v4();

        let message = JobMessage {
            job_id,
            operation,
            input_key: input_key.clone(),
            params: req.params,
            // A derived key is predicted for the response only; the
            // worker derives it again from the same inputs.
            output_key: req.output_key.clone(),
        };

        let body = serde_json::to_vec(&message)
            .context("serializing job message")
            .map_err(ApiError::Internal)?;

        let message_id = state
            .queue
            .send(&body)
            .await
            .map_err(|e| ApiError::BackendUnavailable(e.to_string()))?;

        let output_key = req
            .output_key
            .unwrap_or_else(|| derive_output_key(&input_key, operation));

        info!(%job_id, %message_id, operation, "job queued");

        Ok(SubmitJobResponse {
            job_id,
            message_id,
            input_key,
            output_key,
            operation,
            status: "queued".to_string(),
        })
    }

    /// Completion is inferred from existence of the output object;
    /// there is no status record. Absence means the job is still
    /// somewhere between "queued" and "writing", a store fault is
    /// reported as a fault and never as either state.
    pub async fn check(state: AppState, output_key: Option<String>) -> Result<StatusResponse, ApiError> {
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

        let status = if exists { "completed" } else { "processing" };

        Ok(StatusResponse {
            status: status.to_string(),
            output_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::settings::AppConfig;
    use crate::infrastructure::mock::{MemoryQueue, MemoryStore};

    fn test_config() -> AppConfig {
        AppConfig {
            server_port: 0,
            s3_endpoint: "http://localhost:9000".into(),
            raw_bucket: "raw".into(),
            processed_bucket: "processed".into(),
            s3_access_key: "test".into(),
            s3_secret_key: "test".into(),
            amqp_url: "amqp://localhost".into(),
            job_queue: "transform_jobs".into(),
        }
    }

    fn state_with(queue: Arc<MemoryQueue>, processed: Arc<MemoryStore>) -> AppState {
        AppState::new(
            test_config(),
            Arc::new(MemoryStore::default()),
            processed,
            queue,
        )
    }

    fn submit_req(input_key: Option<&str>, operation: Option<i64>) -> SubmitJobRequest {
        SubmitJobRequest {
            input_key: input_key.map(Into::into),
            operation,
            params: Default::default(),
            output_key: None,
        }
    }

    #[tokio::test]
    async fn submit_queues_one_message_and_predicts_the_output_key() {
        let queue = Arc::new(MemoryQueue::default());
        let state = state_with(queue.clone(), Arc::new(MemoryStore::default()));

        let resp = JobService::submit(state, submit_req(Some("uploads/clip.mov"), Some(5)))
            .await
            .unwrap();

        assert_eq!(resp.status, "queued");
        assert_eq!(resp.output_key, "processed/clip_op5.jpg");
        assert_eq!(queue.bodies().len(), 1);
    }

    #[tokio::test]
    async fn derived_output_key_is_left_out_of_the_message() {
        let queue = Arc::new(MemoryQueue::default());
        let state = state_with(queue.clone(), Arc::new(MemoryStore::default()));

        JobService::submit(state, submit_req(Some("clip.mov"), Some(1)))
            .await
            .unwrap();

        let body = &queue.bodies()[0];
        assert!(body.get("output_key").is_none());
        assert_eq!(body["input_key"], "clip.mov");
        assert_eq!(body["operation"], 1);
        assert!(body.get("job_id").is_some());
    }

    #[tokio::test]
    async fn caller_supplied_output_key_rides_along_in_the_message() {
        let queue = Arc::new(MemoryQueue::default());
        let state = state_with(queue.clone(), Arc::new(MemoryStore::default()));

        let mut req = submit_req(Some("clip.mov"), Some(1));
        req.output_key = Some("processed/custom.mov".into());

        let resp = JobService::submit(state, req).await.unwrap();

        assert_eq!(resp.output_key, "processed/custom.mov");
        assert_eq!(queue.bodies()[0]["output_key"], "processed/custom.mov");
    }

    #[tokio::test]
    async fn operation_zero_is_valid() {
        let queue = Arc::new(MemoryQueue::default());
        let state = state_with(queue.clone(), Arc::new(MemoryStore::default()));

        let resp = JobService::submit(state, submit_req(Some("clip.mov"), Some(0)))
            .await
            .unwrap();

        assert_eq!(resp.operation, 0);
        assert_eq!(resp.output_key, "processed/clip_op0.mov");
        assert_eq!(queue.bodies().len(), 1);
    }

    #[tokio::test]
    async fn missing_fields_reject_before_anything_is_enqueued() {
        let queue = Arc::new(MemoryQueue::default());

        let state = state_with(queue.clone(), Arc::new(MemoryStore::default()));
        let err = JobService::submit(state, submit_req(None, Some(1)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));

        let state = state_with(queue.clone(), Arc::new(MemoryStore::default()));
        let err = JobService::submit(state, submit_req(Some(""), Some(1)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));

        let state = state_with(queue.clone(), Arc::new(MemoryStore::default()));
        let err = JobService::submit(state, submit_req(Some("clip.mov"), None))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));

        assert!(queue.bodies().is_empty());
    }

    #[tokio::test]
    async fn resubmission_produces_a_second_message_with_a_new_job_id() {
        let queue = Arc::new(MemoryQueue::default());

        let state = state_with(queue.clone(), Arc::new(MemoryStore::default()));
        let first = JobService::submit(state.clone(), submit_req(Some("clip.mov"), Some(1)))
            .await
            .unwrap();
        let second = JobService::submit(state, submit_req(Some("clip.mov"), Some(1)))
            .await
            .unwrap();

        assert_ne!(first.job_id, second.job_id);
        assert_eq!(queue.bodies().len(), 2);
        // Identical inputs still predict the identical output key.
        assert_eq!(first.output_key, second.output_key);
    }

    #[tokio::test]
    async fn queue_outage_surfaces_as_backend_unavailable() {
        let state = state_with(
            Arc::new(MemoryQueue::failing()),
            Arc::new(MemoryStore::default()),
        );

        let err = JobService::submit(state, submit_req(Some("clip.mov"), Some(1)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BackendUnavailable(_)));
    }

    #[tokio::test]
    async fn existing_output_reports_completed() {
        let store = Arc::new(MemoryStore::with_objects(&["processed/clip_op1.mov"]));
        let state = state_with(Arc::new(MemoryQueue::default()), store);

        let resp = JobService::check(state, Some("processed/clip_op1.mov".into()))
            .await
            .unwrap();
        assert_eq!(resp.status, "completed");
    }

    #[tokio::test]
    async fn missing_output_reports_processing() {
        let state = state_with(
            Arc::new(MemoryQueue::default()),
            Arc::new(MemoryStore::default()),
        );

        let resp = JobService::check(state, Some("processed/clip_op1.mov".into()))
            .await
            .unwrap();
        assert_eq!(resp.status, "processing");
    }

    #[tokio::test]
    async fn check_requires_an_output_key() {
        let state = state_with(
            Arc::new(MemoryQueue::default()),
            Arc::new(MemoryStore::default()),
        );

        let err = JobService::check(state.clone(), None).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));

        let err = JobService::check(state, Some("".into())).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn store_outage_is_not_reported_as_processing() {
        let state = state_with(
            Arc::new(MemoryQueue::default()),
            Arc::new(MemoryStore::failing()),
        );

        let err = JobService::check(state, Some("processed/clip_op1.mov".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BackendUnavailable(_)));
    }
}
