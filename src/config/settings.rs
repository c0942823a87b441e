use serde::Deserialize;
use crate::config::env::{self, EnvKey};

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub s3_endpoint: String,
    pub raw_bucket: String,
    pub processed_bucket: String,
    pub s3_access_key: String,
    pub s3_secret_key: String,
    pub amqp_url: String,
    pub job_queue: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            s3_endpoint: env::get(EnvKey::S3Endpoint)?,
            raw_bucket: env::get(EnvKey::RawBucket)?,
            processed_bucket: env::get(EnvKey::ProcessedBucket)?,
            s3_access_key: env::get(EnvKey::S3AccessKey)?,
            s3_secret_key: env::get(EnvKey::S3SecretKey)?,
            amqp_url: env::get(EnvKey::AmqpUrl)?,
            job_queue: env::get_or(EnvKey::JobQueue, "transform_jobs"),
        })
    }
}
