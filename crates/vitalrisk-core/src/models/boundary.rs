use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One scored cell of the decision-boundary grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BoundaryPoint {
    #[serde(rename = "systolicBP")]
    pub systolic_bp: f64,
    pub glucose: f64,
    /// 1 when `probability >= 0.5`, else 0.
    pub risk: u8,
    pub probability: f64,
}

/// Which historical cohort a reference point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Cohort {
    Healthy,
    AtRisk,
}

/// A fixed historical observation plotted behind the current patient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferencePoint {
    #[serde(rename = "systolicBP")]
    pub systolic_bp: f64,
    pub glucose: f64,
    pub cohort: Cohort,
}

/// Shaded rectangle on the systolic/glucose plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReferenceRegion {
    pub cohort: Cohort,
    pub systolic_min: f64,
    pub systolic_max: f64,
    pub glucose_min: f64,
    pub glucose_max: f64,
}

impl ReferenceRegion {
    pub fn contains(&self, systolic_bp: f64, glucose: f64) -> bool {
        systolic_bp >= self.systolic_min
            && systolic_bp <= self.systolic_max
            && glucose >= self.glucose_min
            && glucose <= self.glucose_max
    }
}
