//! Logistic regression scoring.
//!
//! ```text
//! logit = bias + w_age*age + w_sbp*sbp + w_dbp*dbp + w_glucose*glucose
//! p     = 1 / (1 + e^-logit)
//! ```
//!
//! None of these functions guard their input. NaN in any field yields a NaN
//! logit and probability (and `is_at_risk == false`, since NaN compares
//! false). Infinite fields saturate the probability to 0 or 1, or produce
//! NaN when infinities of opposite sign cancel. Use [`score_checked`] when
//! the form bounds should be enforced.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vitalrisk_core::models::field::Field;
use vitalrisk_core::models::prediction::PredictionResult;
use vitalrisk_core::models::vitals::VitalsInput;

use crate::error::ModelError;
use crate::validation;
use crate::weights::Weights;

/// Probability at or above which a patient is classified at-risk.
pub const RISK_THRESHOLD: f64 = 0.5;

/// A single term of the logit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureContribution {
    pub feature: Field,
    pub weight: f64,
    pub value: f64,
    /// `weight * value`.
    pub contribution: f64,
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Build a prediction from a raw logit.
pub fn classify(logit: f64) -> PredictionResult {
    let probability = sigmoid(logit);
    PredictionResult {
        probability,
        is_at_risk: probability >= RISK_THRESHOLD,
        score: logit,
    }
}

/// Linear combination of the vitals under the default weights.
pub fn logit(vitals: &VitalsInput) -> f64 {
    Weights::DEFAULT.logit(vitals)
}

/// Score vitals with the default weights.
///
/// Pure: identical input always produces a bit-identical result.
pub fn score(vitals: &VitalsInput) -> PredictionResult {
    Weights::DEFAULT.score(vitals)
}

/// Validate against the form bounds, then score.
pub fn score_checked(vitals: &VitalsInput) -> Result<PredictionResult, ModelError> {
    let errors = validation::validate(vitals);
    if !errors.is_empty() {
        return Err(ModelError::InvalidVitals(errors));
    }
    Ok(score(vitals))
}

/// Per-feature terms of the default-weight logit, in model order.
pub fn contributions(vitals: &VitalsInput) -> [FeatureContribution; 4] {
    Weights::DEFAULT.contributions(vitals)
}

impl Weights {
    pub fn logit(&self, vitals: &VitalsInput) -> f64 {
        self.bias
            + (self.age * vitals.age)
            + (self.systolic_bp * vitals.systolic_bp)
            + (self.diastolic_bp * vitals.diastolic_bp)
            + (self.glucose * vitals.glucose)
    }

    pub fn score(&self, vitals: &VitalsInput) -> PredictionResult {
        classify(self.logit(vitals))
    }

    pub fn contributions(&self, vitals: &VitalsInput) -> [FeatureContribution; 4] {
        Field::ALL.map(|feature| {
            let weight = self.weight(feature);
            let value = vitals.get(feature);
            FeatureContribution {
                feature,
                weight,
                value,
                contribution: weight * value,
            }
        })
    }
}
