use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the four physiological inputs the risk model consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Field {
    #[serde(rename = "age")]
    Age,
    #[serde(rename = "systolicBP")]
    SystolicBp,
    #[serde(rename = "diastolicBP")]
    DiastolicBp,
    #[serde(rename = "glucose")]
    Glucose,
}

impl Field {
    /// All fields, in the order the model weights them.
    pub const ALL: [Field; 4] = [
        Field::Age,
        Field::SystolicBp,
        Field::DiastolicBp,
        Field::Glucose,
    ];

    /// Wire name, matching the JSON keys of `VitalsInput`.
    pub fn key(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::SystolicBp => "systolicBP",
            Field::DiastolicBp => "diastolicBP",
            Field::Glucose => "glucose",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::SystolicBp => "Systolic BP",
            Field::DiastolicBp => "Diastolic BP",
            Field::Glucose => "Glucose",
        }
    }

    /// Presentation-layer bounds from the vitals entry form.
    ///
    /// These are hints for input widgets and opt-in validation. The scorer
    /// does not enforce them.
    pub fn bounds(self) -> FieldBounds {
        match self {
            Field::Age => FieldBounds {
                field: self,
                min: 1.0,
                max: 120.0,
                unit: "years".to_string(),
            },
            Field::SystolicBp => FieldBounds {
                field: self,
                min: 70.0,
                max: 250.0,
                unit: "mmHg".to_string(),
            },
            Field::DiastolicBp => FieldBounds {
                field: self,
                min: 40.0,
                max: 150.0,
                unit: "mmHg".to_string(),
            },
            Field::Glucose => FieldBounds {
                field: self,
                min: 40.0,
                max: 400.0,
                unit: "mg/dL".to_string(),
            },
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    /// Accepts the wire name case-insensitively, plus the short CLI aliases
    /// `sbp`, `dbp` and `systolic`/`diastolic`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "age" => Ok(Field::Age),
            "systolicbp" | "systolic" | "sbp" => Ok(Field::SystolicBp),
            "diastolicbp" | "diastolic" | "dbp" => Ok(Field::DiastolicBp),
            "glucose" => Ok(Field::Glucose),
            _ => Err(CoreError::UnknownField(s.to_string())),
        }
    }
}

/// Inclusive range accepted by the entry form for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldBounds {
    pub field: Field,
    pub min: f64,
    pub max: f64,
    pub unit: String,
}

impl FieldBounds {
    /// `false` for NaN and infinities as well as out-of-range values.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}
