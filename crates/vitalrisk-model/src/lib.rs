//! vitalrisk-model
//!
//! The fixed-coefficient logistic regression risk model. Pure arithmetic,
//! no I/O: scoring, per-feature contributions, opt-in form validation, and
//! the synthetic grid used to draw the decision boundary.

pub mod boundary;
pub mod error;
pub mod scorer;
pub mod validation;
pub mod weights;

pub use boundary::{BoundaryGrid, generate_boundary_grid};
pub use scorer::{classify, contributions, logit, score, score_checked, sigmoid};
pub use weights::Weights;
