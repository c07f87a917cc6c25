use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use vitalrisk_core::models::field::{Field, FieldBounds};
use vitalrisk_core::models::vitals::VitalsInput;
use vitalrisk_model::Weights;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct FormSchema {
    fields: Vec<FieldBounds>,
    defaults: VitalsInput,
    weights: Weights,
}

pub async fn get_form() -> Json<FormSchema> {
    Json(FormSchema {
        fields: Field::ALL.iter().map(|f| f.bounds()).collect(),
        defaults: VitalsInput::default(),
        weights: Weights::DEFAULT,
    })
}

pub async fn get_field_bounds(Path(name): Path<String>) -> Result<Json<FieldBounds>, ApiError> {
    let field: Field = name.parse()?;
    Ok(Json(field.bounds()))
}
