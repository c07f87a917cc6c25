use std::path::Path;

use aws_sdk_bedrockruntime::config::Credentials;
use tracing::warn;

use vitalrisk_bedrock::client::build_client;
use vitalrisk_bedrock::insight::BedrockInsightClient;

use crate::config::{self, CredentialSource, VitalRiskConfig};

/// Build an `SdkConfig` from a region and credential source.
pub async fn build_aws_config(region: &str, creds: &CredentialSource) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    match creds {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            builder = builder.credentials_provider(Credentials::new(
                access_key_id,
                secret_access_key,
                session_token.clone(),
                None,
                "vitalrisk-config",
            ));
        }
        CredentialSource::Profile { profile_name } => {
            builder = builder.profile_name(profile_name);
        }
        CredentialSource::DefaultChain => {}
    }

    builder.load().await
}

/// Insight client for the configured region, credentials and model.
pub async fn insight_client(config: &VitalRiskConfig) -> eyre::Result<BedrockInsightClient> {
    let sdk_config = build_aws_config(&config.region, &config.credentials).await;
    let client = BedrockInsightClient::new(build_client(&sdk_config), config.model_id.clone())?;
    Ok(client)
}

/// Insight client for the saved config. Setup failures are logged and
/// yield `None`; the caller scores without an insight.
pub async fn prepare_insight_client() -> Option<BedrockInsightClient> {
    match config::config_path() {
        Ok(path) => prepare_insight_client_at(&path).await,
        Err(e) => {
            warn!(error = %e, "failed to prepare insight client");
            None
        }
    }
}

/// Like [`prepare_insight_client`], for the config file at `path`.
pub async fn prepare_insight_client_at(path: &Path) -> Option<BedrockInsightClient> {
    let client = match config::load_or_default_from(path) {
        Ok(cfg) => insight_client(&cfg).await,
        Err(e) => Err(e),
    };

    match client {
        Ok(client) => Some(client),
        Err(e) => {
            warn!(error = %e, path = %path.display(), "failed to prepare insight client");
            None
        }
    }
}
