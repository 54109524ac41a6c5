use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::error::Result;
use crate::models::assessment::Assessment;
use crate::services::coverage_service::CoverageService;
use crate::services::export_service::ExportService;

fn attachment(filename: String, body: String) -> impl IntoResponse {
    let disposition = format!("attachment; filename=\"{}\"", filename);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
}

/// Export the full assessment, answer keys included, as a JSON download
#[axum::debug_handler]
pub async fn export_assessment(Json(assessment): Json<Assessment>) -> Result<impl IntoResponse> {
    let body = ExportService::assessment_json(&assessment)?;
    let filename = ExportService::assessment_filename(&assessment.meta.role, chrono::Utc::now().date_naive());
    Ok(attachment(filename, body))
}

/// Export coverage recomputed from the submitted items
#[axum::debug_handler]
pub async fn export_coverage(Json(assessment): Json<Assessment>) -> Result<impl IntoResponse> {
    let coverage = CoverageService::compute(&assessment.items);
    let body = ExportService::coverage_json(&coverage)?;
    let filename = ExportService::coverage_filename(&assessment.meta.role, chrono::Utc::now().date_naive());
    Ok(attachment(filename, body))
}
