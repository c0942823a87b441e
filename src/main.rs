use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;

use config::settings::AppConfig;
use infrastructure::queue::rabbitmq::RabbitMqQueue;
use infrastructure::storage::s3::S3Storage;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new().context("loading configuration from environment")?;

    let s3_client = S3Storage::build_client(
        &config.s3_endpoint,
        &config.s3_access_key,
        &config.s3_secret_key,
    );
    let raw_store = S3Storage::new(s3_client.clone(), &config.raw_bucket);
    let processed_store = S3Storage::new(s3_client, &config.processed_bucket);

    let queue = RabbitMqQueue::new(&config.amqp_url, &config.job_queue)
        .await
        .context("connecting to RabbitMQ")?;

    let port = config.server_port;
    let state = AppState::new(
        config,
        Arc::new(raw_store),
        Arc::new(processed_store),
        Arc::new(queue),
    );

    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .context("binding listener")?;
    info!("Server running on http://0.0.0.0:{port}");

    axum::serve(listener, app).await.context("serving")?;

    Ok(())
}
