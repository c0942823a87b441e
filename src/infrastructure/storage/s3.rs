use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::config::Builder;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::{Client, config::BehaviorVersion, config::Credentials, config::Region};
use tracing::info;

use super::{ObjectStore, StorageError};

#[derive(Clone)]
pub struct S3Storage {
    client: Client,
    bucket: String,
}

impl S3Storage {
    pub fn build_client(endpoint: &str, access_key: &str, secret_key: &str) -> Client {
        let credentials = Credentials::new(access_key, secret_key, None, None, "static");

        let config = Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .endpoint_url(endpoint)
            .credentials_provider(credentials)
            .force_path_style(true) // Required for MinIO
            .build();

        info!("✅ Connected to S3 (MinIO)");

        Client::from_conf(config)
    }

    pub fn new(client: Client, bucket: &str) -> Self {
        Self {
            client,
            bucket: bucket.to_string(),
        }
    }

    fn presigning(ttl_secs: u64) -> Result<PresigningConfig, StorageError> {
        PresigningConfig::expires_in(Duration::from_secs(ttl_secs))
            .map_err(|e| StorageError::Backend(format!("invalid presign ttl: {e}")))
    }
}

#[async_trait]
impl ObjectStore for S3Storage {
    async fn head(&self, key: &str) -> Result<bool, StorageError> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_not_found() {
                    Ok(false)
                } else {
                    Err(StorageError::Backend(format!(
                        "head {}/{key}: {service_err}",
                        self.bucket
                    )))
                }
            }
        }
    }

    async fn presign_get(&self, key: &str, ttl_secs: u64) -> Result<String, StorageError> {
        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(Self::presigning(ttl_secs)?)
            .await
            .map_err(|e| {
                StorageError::Backend(format!("presign get {}/{key}: {e}", self.bucket))
            })?;

        Ok(presigned.uri().to_string())
    }

    async fn presign_put(
        &self,
        key: &str,
        ttl_secs: u64,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(Self::presigning(ttl_secs)?)
            .await
            .map_err(|e| {
                StorageError::Backend(format!("presign put {}/{key}: {e}", self.bucket))
            })?;

        Ok(presigned.uri().to_string())
    }
}
