use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::Field;

/// Physiological vitals entered for a single assessment.
///
/// Any finite real is accepted; see [`Field::bounds`] for the form limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsInput {
    /// Years.
    pub age: f64,
    /// mmHg.
    #[serde(rename = "systolicBP")]
    pub systolic_bp: f64,
    /// mmHg.
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: f64,
    /// mg/dL.
    pub glucose: f64,
}

impl VitalsInput {
    pub fn new(age: f64, systolic_bp: f64, diastolic_bp: f64, glucose: f64) -> Self {
        Self {
            age,
            systolic_bp,
            diastolic_bp,
            glucose,
        }
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Age => self.age,
            Field::SystolicBp => self.systolic_bp,
            Field::DiastolicBp => self.diastolic_bp,
            Field::Glucose => self.glucose,
        }
    }

    /// Copy of `self` with one field replaced.
    pub fn with(mut self, field: Field, value: f64) -> Self {
        match field {
            Field::Age => self.age = value,
            Field::SystolicBp => self.systolic_bp = value,
            Field::DiastolicBp => self.diastolic_bp = value,
            Field::Glucose => self.glucose = value,
        }
        self
    }
}

impl Default for VitalsInput {
    /// The dashboard's initial form state.
    fn default() -> Self {
        Self::new(45.0, 120.0, 80.0, 90.0)
    }
}
