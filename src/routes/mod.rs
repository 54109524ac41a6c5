pub mod assessment;
pub mod export;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    let assessment_api = Router::new()
        .route(
            "/api/assessments/generate",
            post(assessment::generate_assessment),
        )
        .route("/api/assessments/grade", post(assessment::grade_assessment))
        .route(
            "/api/assessments/coverage",
            post(assessment::compute_coverage),
        )
        .route("/api/assessments/public", post(assessment::public_view))
        .route("/api/assessments/export", post(export::export_assessment))
        .route(
            "/api/assessments/export/coverage",
            post(export::export_coverage),
        );

    Router::new()
        .route("/health", get(health::health))
        .merge(assessment_api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
