use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::token_count::TokenCount;

/// Natural-language clinical explanation returned by the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Insight {
    pub summary: String,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

/// A completed insight request, with the bookkeeping needed to log it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InsightTransaction {
    pub id: Uuid,
    pub model_id: String,
    pub created_at: jiff::Timestamp,
    pub usage: TokenCount,
    pub insight: Insight,
}
