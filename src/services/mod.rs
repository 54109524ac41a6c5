pub mod ai_service;
pub mod aptitude_service;
pub mod assembler_service;
pub mod assessment_service;
pub mod coverage_service;
pub mod export_service;
pub mod generator_service;
pub mod grading_service;
pub mod template_bank;
