//! Synthetic grid and reference cohort for the decision-boundary plot.
//!
//! The grid sweeps systolic blood pressure against glucose with age held at
//! 50 and diastolic pressure tied to systolic (roughly two thirds), scoring
//! every cell with the same model the patient is scored with.

use vitalrisk_core::models::boundary::{BoundaryPoint, Cohort, ReferencePoint, ReferenceRegion};
use vitalrisk_core::models::vitals::VitalsInput;

use crate::weights::Weights;

pub const GRID_AGE: f64 = 50.0;
pub const DIASTOLIC_RATIO: f64 = 0.67;

pub const SYSTOLIC_MIN: u32 = 80;
pub const SYSTOLIC_MAX: u32 = 200;
pub const SYSTOLIC_STEP: u32 = 10;

pub const GLUCOSE_MIN: u32 = 60;
pub const GLUCOSE_MAX: u32 = 250;
pub const GLUCOSE_STEP: u32 = 15;

const SYSTOLIC_COUNT: usize = ((SYSTOLIC_MAX - SYSTOLIC_MIN) / SYSTOLIC_STEP + 1) as usize;
const GLUCOSE_COUNT: usize = ((GLUCOSE_MAX - GLUCOSE_MIN) / GLUCOSE_STEP + 1) as usize;

/// Lazy iterator over the boundary grid, systolic-major.
///
/// Cloning yields an independent cursor, so a fresh sweep can be restarted
/// from any clone of the initial value.
#[derive(Debug, Clone)]
pub struct BoundaryGrid {
    weights: Weights,
    next: usize,
}

/// The grid scored with the default weights.
pub fn generate_boundary_grid() -> BoundaryGrid {
    BoundaryGrid::new(Weights::DEFAULT)
}

impl BoundaryGrid {
    pub fn new(weights: Weights) -> Self {
        Self { weights, next: 0 }
    }

    /// Distinct systolic values along the x axis.
    pub fn systolic_values() -> impl Iterator<Item = f64> + Clone {
        (0..SYSTOLIC_COUNT as u32).map(|i| f64::from(SYSTOLIC_MIN + i * SYSTOLIC_STEP))
    }

    /// Distinct glucose values along the y axis.
    pub fn glucose_values() -> impl Iterator<Item = f64> + Clone {
        (0..GLUCOSE_COUNT as u32).map(|j| f64::from(GLUCOSE_MIN + j * GLUCOSE_STEP))
    }

    fn point_at(&self, index: usize) -> BoundaryPoint {
        let systolic_bp = f64::from(SYSTOLIC_MIN + (index / GLUCOSE_COUNT) as u32 * SYSTOLIC_STEP);
        let glucose = f64::from(GLUCOSE_MIN + (index % GLUCOSE_COUNT) as u32 * GLUCOSE_STEP);

        let vitals = VitalsInput::new(
            GRID_AGE,
            systolic_bp,
            systolic_bp * DIASTOLIC_RATIO,
            glucose,
        );
        let prediction = self.weights.score(&vitals);

        BoundaryPoint {
            systolic_bp,
            glucose,
            risk: u8::from(prediction.is_at_risk),
            probability: prediction.probability,
        }
    }
}

impl Iterator for BoundaryGrid {
    type Item = BoundaryPoint;

    fn next(&mut self) -> Option<BoundaryPoint> {
        if self.next >= SYSTOLIC_COUNT * GLUCOSE_COUNT {
            return None;
        }
        let point = self.point_at(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (SYSTOLIC_COUNT * GLUCOSE_COUNT).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundaryGrid {}

impl std::iter::FusedIterator for BoundaryGrid {}

/// Historical observations drawn behind the current patient.
pub fn reference_points() -> Vec<ReferencePoint> {
    const HEALTHY: [(f64, f64); 4] = [(110.0, 80.0), (115.0, 90.0), (125.0, 85.0), (105.0, 95.0)];
    const AT_RISK: [(f64, f64); 5] = [
        (135.0, 110.0),
        (145.0, 140.0),
        (155.0, 130.0),
        (165.0, 180.0),
        (130.0, 160.0),
    ];

    let tag = |cohort: Cohort| {
        move |&(systolic_bp, glucose): &(f64, f64)| ReferencePoint {
            systolic_bp,
            glucose,
            cohort,
        }
    };

    HEALTHY
        .iter()
        .map(tag(Cohort::Healthy))
        .chain(AT_RISK.iter().map(tag(Cohort::AtRisk)))
        .collect()
}

/// Shaded healthy and at-risk areas of the plot.
pub fn reference_regions() -> [ReferenceRegion; 2] {
    [
        ReferenceRegion {
            cohort: Cohort::Healthy,
            systolic_min: 80.0,
            systolic_max: 130.0,
            glucose_min: 60.0,
            glucose_max: 120.0,
        },
        ReferenceRegion {
            cohort: Cohort::AtRisk,
            systolic_min: 130.0,
            systolic_max: 200.0,
            glucose_min: 120.0,
            glucose_max: 200.0,
        },
    ]
}
