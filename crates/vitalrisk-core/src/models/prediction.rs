use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Output of the risk scorer. Derived deterministically from the vitals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PredictionResult {
    /// Sigmoid of `score`, in [0, 1].
    pub probability: f64,
    /// `probability >= 0.5`.
    pub is_at_risk: bool,
    /// Raw logit.
    pub score: f64,
}

impl PredictionResult {
    pub fn status(&self) -> RiskStatus {
        if self.is_at_risk {
            RiskStatus::AtRisk
        } else {
            RiskStatus::NotAtRisk
        }
    }

    /// Probability as a percentage with one decimal, e.g. `"5.2%"`.
    pub fn percentage(&self) -> String {
        format!("{:.1}%", self.probability * 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskStatus {
    AtRisk,
    NotAtRisk,
}

impl RiskStatus {
    pub fn label(self) -> &'static str {
        match self {
            RiskStatus::AtRisk => "RISK DETECTED",
            RiskStatus::NotAtRisk => "NO RISK DETECTED",
        }
    }

    /// Short prompt-facing wording.
    pub fn short_label(self) -> &'static str {
        match self {
            RiskStatus::AtRisk => "High Risk",
            RiskStatus::NotAtRisk => "Low Risk",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RiskStatus::AtRisk => {
                "Multiple biometric markers have exceeded the healthy threshold in the \
                 logistic regression model. Clinical consultation is strongly advised to \
                 review these glucose and blood pressure levels."
            }
            RiskStatus::NotAtRisk => {
                "Your vital markers are currently within the statistically safe range \
                 according to the classification model. Continue maintaining a healthy \
                 lifestyle."
            }
        }
    }
}
