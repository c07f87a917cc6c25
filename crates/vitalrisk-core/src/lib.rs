//! vitalrisk-core
//!
//! Pure domain types shared by every VitalRisk crate: vitals, predictions,
//! boundary-plot points, and the insight returned by the language model.
//! No AWS SDK dependency.

pub mod error;
pub mod models;
