use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use vitalrisk_core::models::field::{Field, FieldBounds};
use vitalrisk_core::models::vitals::VitalsInput;

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub value: f64,
    pub expected_range: FieldBounds,
    pub message: String,
}

/// Check every field against its form bounds.
///
/// Returns one error per offending field, in model order. Non-finite values
/// always fail.
pub fn validate(vitals: &VitalsInput) -> Vec<ValidationError> {
    Field::ALL
        .iter()
        .filter_map(|&field| check_field(field, vitals.get(field)))
        .collect()
}

fn check_field(field: Field, value: f64) -> Option<ValidationError> {
    let bounds = field.bounds();
    if bounds.contains(value) {
        return None;
    }

    let message = if value.is_finite() {
        format!(
            "{}: {} is outside range [{}, {}] {}",
            field.label(),
            value,
            bounds.min,
            bounds.max,
            bounds.unit,
        )
    } else {
        format!("{}: {} is not a finite number", field.label(), value)
    };

    Some(ValidationError {
        field,
        value,
        expected_range: bounds,
        message,
    })
}
