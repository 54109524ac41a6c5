use axum::{extract::State, Json};

use crate::dto::assessment_dto::{CoveragePayload, GenerateAssessmentPayload, GradePayload};
use crate::dto::public_dto::PublicAssessment;
use crate::error::Result;
use crate::models::assessment::Assessment;
use crate::models::coverage::CoverageReport;
use crate::models::grade::GradeReport;
use crate::services::assessment_service::GenerationOutput;
use crate::services::coverage_service::CoverageService;
use crate::utils::validation::validate;
use crate::AppState;

#[axum::debug_handler]
pub async fn generate_assessment(
    State(state): State<AppState>,
    Json(payload): Json<GenerateAssessmentPayload>,
) -> Result<Json<GenerationOutput>> {
    validate(&payload)?;
    let meta = payload.into_meta(state.max_items_per_type)?;
    let output = state
        .assessment_service
        .generate(meta, payload.prefer_remote)
        .await;
    Ok(Json(output))
}

#[axum::debug_handler]
pub async fn grade_assessment(
    State(state): State<AppState>,
    Json(payload): Json<GradePayload>,
) -> Result<Json<GradeReport>> {
    let report = state.grading_service.grade(&payload.items, &payload.answers);
    Ok(Json(report))
}

#[axum::debug_handler]
pub async fn compute_coverage(Json(payload): Json<CoveragePayload>) -> Result<Json<CoverageReport>> {
    Ok(Json(CoverageService::compute(&payload.items)))
}

/// Strips answer keys so the assessment can be shown to a candidate.
#[axum::debug_handler]
pub async fn public_view(Json(assessment): Json<Assessment>) -> Result<Json<PublicAssessment>> {
    Ok(Json(PublicAssessment::from(&assessment)))
}
