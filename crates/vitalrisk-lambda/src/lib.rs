//! vitalrisk-lambda
//!
//! HTTP API over the risk model. The router is exposed here so integration
//! tests can drive it in-process; `main.rs` only wires configuration.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use vitalrisk_bedrock::insight::InsightClient;

use state::AppState;

pub fn app<C>(state: AppState<C>) -> Router
where
    C: InsightClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/form", get(routes::form::get_form))
        .route("/form/{field}", get(routes::form::get_field_bounds))
        .route("/predict", post(routes::assess::predict))
        .route("/assess", post(routes::assess::assess::<C>))
        .route("/boundary", get(routes::boundary::get_boundary))
        .route("/reference", get(routes::boundary::get_reference))
        .layer(axum_mw::from_fn(middleware::logging::log_request))
        .layer(cors)
        .with_state(state)
}
