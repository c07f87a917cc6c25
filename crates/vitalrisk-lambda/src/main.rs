use std::env;

use tracing_subscriber::EnvFilter;

use vitalrisk_bedrock::client::{DEFAULT_MODEL_ID, build_client, load_sdk_config};
use vitalrisk_bedrock::insight::BedrockInsightClient;
use vitalrisk_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let model_id =
        env::var("VITALRISK_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());
    let region = env::var("AWS_REGION").ok();

    let sdk_config = load_sdk_config(region.as_deref()).await;
    let insights = BedrockInsightClient::new(build_client(&sdk_config), model_id)?;
    tracing::info!(model_id = insights.model_id(), "insight client ready");

    let app = vitalrisk_lambda::app(AppState::new(insights));

    if env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let bind = env::var("VITALRISK_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "serving locally");
    axum::serve(listener, app).await?;

    Ok(())
}
