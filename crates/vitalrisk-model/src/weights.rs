use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vitalrisk_core::models::field::Field;

/// Coefficients of the logistic regression.
///
/// All feature weights are positive, so the predicted probability is
/// monotone non-decreasing in every input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Weights {
    pub bias: f64,
    pub age: f64,
    #[serde(rename = "systolicBP")]
    pub systolic_bp: f64,
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: f64,
    pub glucose: f64,
}

impl Weights {
    /// Synthetic but clinically inspired: both blood pressure readings and
    /// glucose push risk upward.
    pub const DEFAULT: Weights = Weights {
        bias: -13.5,
        age: 0.05,
        systolic_bp: 0.03,
        diastolic_bp: 0.02,
        glucose: 0.035,
    };

    pub fn weight(&self, field: Field) -> f64 {
        match field {
            Field::Age => self.age,
            Field::SystolicBp => self.systolic_bp,
            Field::DiastolicBp => self.diastolic_bp,
            Field::Glucose => self.glucose,
        }
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
