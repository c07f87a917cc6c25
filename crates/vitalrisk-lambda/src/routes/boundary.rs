use axum::Json;
use serde::Serialize;

use vitalrisk_core::models::boundary::{BoundaryPoint, ReferencePoint, ReferenceRegion};
use vitalrisk_model::boundary::{reference_points, reference_regions};
use vitalrisk_model::generate_boundary_grid;

#[derive(Serialize)]
pub struct ReferenceData {
    points: Vec<ReferencePoint>,
    regions: [ReferenceRegion; 2],
}

pub async fn get_boundary() -> Json<Vec<BoundaryPoint>> {
    Json(generate_boundary_grid().collect())
}

pub async fn get_reference() -> Json<ReferenceData> {
    Json(ReferenceData {
        points: reference_points(),
        regions: reference_regions(),
    })
}
