//! Clinical insight requests.
//!
//! The risk score never waits on the language model. Callers score first,
//! show the prediction, and then either await [`request_insight`] or hand
//! the work to [`spawn_insight`]. Both swallow failures: the error is
//! logged and the insight is simply absent. There is no retry, timeout or
//! cancellation, and nothing prevents two requests for different
//! submissions from being in flight at once.

use std::future::Future;
use std::sync::Arc;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use vitalrisk_core::models::insight::InsightTransaction;
use vitalrisk_core::models::prediction::PredictionResult;
use vitalrisk_core::models::token_count::TokenCount;
use vitalrisk_core::models::vitals::VitalsInput;

use crate::error::BedrockError;
use crate::{parse, prompt, tokens};

/// Anything that can turn a scored assessment into an insight.
pub trait InsightClient: Send + Sync {
    fn generate_insight(
        &self,
        vitals: &VitalsInput,
        prediction: &PredictionResult,
    ) -> impl Future<Output = Result<InsightTransaction, BedrockError>> + Send;
}

/// Insight generation backed by a Bedrock chat model.
#[derive(Debug, Clone)]
pub struct BedrockInsightClient {
    client: Client,
    model_id: String,
}

impl BedrockInsightClient {
    pub fn new(client: Client, model_id: impl Into<String>) -> Result<Self, BedrockError> {
        let model_id = model_id.into();
        if model_id.trim().is_empty() {
            return Err(BedrockError::Config("model id is empty".to_string()));
        }
        Ok(Self { client, model_id })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl InsightClient for BedrockInsightClient {
    async fn generate_insight(
        &self,
        vitals: &VitalsInput,
        prediction: &PredictionResult,
    ) -> Result<InsightTransaction, BedrockError> {
        let transaction_id = Uuid::new_v4();
        info!(
            transaction_id = %transaction_id,
            model = %self.model_id,
            probability = prediction.probability,
            "starting insight generation"
        );

        let user_message = prompt::build_insight_prompt(vitals, prediction);
        let (response_text, usage) = invoke_converse(
            &self.client,
            &self.model_id,
            prompt::INSIGHT_SYSTEM_PROMPT,
            &user_message,
        )
        .await?;

        let insight = parse::parse_insight(&response_text)?;

        info!(
            transaction_id = %transaction_id,
            input_tokens = usage.input,
            output_tokens = usage.output,
            "insight generation complete"
        );

        Ok(InsightTransaction {
            id: transaction_id,
            model_id: self.model_id.clone(),
            created_at: jiff::Timestamp::now(),
            usage,
            insight,
        })
    }
}

/// Await an insight, logging and discarding any failure.
pub async fn request_insight<C>(
    client: &C,
    vitals: &VitalsInput,
    prediction: &PredictionResult,
) -> Option<InsightTransaction>
where
    C: InsightClient,
{
    match client.generate_insight(vitals, prediction).await {
        Ok(transaction) => Some(transaction),
        Err(e) => {
            warn!(error = %e, "failed to fetch clinical insight");
            None
        }
    }
}

/// Run [`request_insight`] on a background task.
///
/// Must be called from within a tokio runtime. Dropping the handle does not
/// cancel the request.
pub fn spawn_insight<C>(
    client: Arc<C>,
    vitals: VitalsInput,
    prediction: PredictionResult,
) -> JoinHandle<Option<InsightTransaction>>
where
    C: InsightClient + 'static,
{
    tokio::spawn(async move { request_insight(client.as_ref(), &vitals, &prediction).await })
}

/// Single-turn Converse call. Returns the response text and token usage.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<(String, TokenCount), BedrockError> {
    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    if response_text.trim().is_empty() {
        return Err(BedrockError::ResponseParse(
            "empty text in response".to_string(),
        ));
    }

    let usage = response
        .usage()
        .map(tokens::extract_token_usage)
        .unwrap_or_default();

    Ok((response_text, usage))
}
