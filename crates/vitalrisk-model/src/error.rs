use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{} field(s) failed validation: {}", .0.len(), join_messages(.0))]
    InvalidVitals(Vec<ValidationError>),
}

impl ModelError {
    /// Every field-level failure carried by this error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ModelError::InvalidVitals(errors) => errors,
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
