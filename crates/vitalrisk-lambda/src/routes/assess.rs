use axum::Json;
use axum::extract::State;
use serde::Serialize;
use tracing::info;

use vitalrisk_bedrock::insight::{InsightClient, request_insight};
use vitalrisk_core::models::insight::Insight;
use vitalrisk_core::models::prediction::{PredictionResult, RiskStatus};
use vitalrisk_core::models::vitals::VitalsInput;
use vitalrisk_model::scorer::FeatureContribution;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    vitals: VitalsInput,
    prediction: PredictionResult,
    status: RiskStatus,
    label: &'static str,
    message: &'static str,
    contributions: [FeatureContribution; 4],
}

#[derive(Debug, Serialize)]
pub struct AssessmentWithInsight {
    #[serde(flatten)]
    assessment: Assessment,
    /// `null` when the language model failed or returned something unusable.
    insight: Option<Insight>,
}

fn assess_vitals(vitals: VitalsInput) -> Result<Assessment, ApiError> {
    let prediction = vitalrisk_model::score_checked(&vitals)?;
    let status = prediction.status();

    info!(
        probability = prediction.probability,
        is_at_risk = prediction.is_at_risk,
        "vitals scored"
    );

    Ok(Assessment {
        vitals,
        prediction,
        status,
        label: status.label(),
        message: status.message(),
        contributions: vitalrisk_model::contributions(&vitals),
    })
}

/// Score vitals without contacting the language model.
pub async fn predict(Json(vitals): Json<VitalsInput>) -> Result<Json<Assessment>, ApiError> {
    Ok(Json(assess_vitals(vitals)?))
}

/// Score vitals, then ask the language model for an insight.
///
/// Insight failures are logged and reported as `insight: null`; they never
/// fail the request.
pub async fn assess<C>(
    State(state): State<AppState<C>>,
    Json(vitals): Json<VitalsInput>,
) -> Result<Json<AssessmentWithInsight>, ApiError>
where
    C: InsightClient + 'static,
{
    let assessment = assess_vitals(vitals)?;
    let insight = request_insight(state.insights.as_ref(), &vitals, &assessment.prediction)
        .await
        .map(|transaction| transaction.insight);

    Ok(Json(AssessmentWithInsight {
        assessment,
        insight,
    }))
}
