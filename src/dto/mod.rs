pub mod assessment_dto;
pub mod public_dto;
