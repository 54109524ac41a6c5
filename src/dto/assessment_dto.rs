use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::answer::AnswerState;
use crate::models::assessment::{AssessmentItem, AssessmentMeta, Difficulty, ItemCounts, ItemType};
use crate::utils::validation::normalize_skills;

pub const DEFAULT_MCQ_COUNT: u32 = 15;
pub const DEFAULT_SAQ_COUNT: u32 = 5;
pub const DEFAULT_CASELET_COUNT: u32 = 1;
pub const DEFAULT_APTITUDE_COUNT: u32 = 5;

fn default_mcq() -> u32 {
    DEFAULT_MCQ_COUNT
}

fn default_saq() -> u32 {
    DEFAULT_SAQ_COUNT
}

fn default_caselet() -> u32 {
    DEFAULT_CASELET_COUNT
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountsPayload {
    #[serde(default = "default_mcq")]
    pub mcq: u32,
    #[serde(default = "default_saq")]
    pub saq: u32,
    #[serde(default = "default_caselet")]
    pub caselet: u32,
    /// Only used when aptitude is included; defaults to five.
    pub aptitude: Option<u32>,
}

impl Default for CountsPayload {
    fn default() -> Self {
        Self {
            mcq: DEFAULT_MCQ_COUNT,
            saq: DEFAULT_SAQ_COUNT,
            caselet: DEFAULT_CASELET_COUNT,
            aptitude: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAssessmentPayload {
    #[validate(length(min = 1, message = "Please enter a role."))]
    pub role: String,
    #[validate(length(min = 1, message = "Add at least one skill."))]
    pub skills: Vec<String>,
    pub job_description: Option<String>,
    /// Text already extracted from an uploaded document, appended to the job description.
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub counts: CountsPayload,
    #[serde(default = "default_true")]
    pub include_aptitude: bool,
    #[serde(default = "default_true")]
    pub prefer_remote: bool,
}

impl GenerateAssessmentPayload {
    pub fn into_meta(&self, max_per_type: u32) -> Result<AssessmentMeta> {
        let role = self.role.trim();
        if role.is_empty() {
            return Err(Error::BadRequest("Please enter a role.".to_string()));
        }

        let skills = normalize_skills(&self.skills);
        if skills.is_empty() {
            return Err(Error::BadRequest("Add at least one skill.".to_string()));
        }

        let aptitude = if self.include_aptitude {
            self.counts.aptitude.unwrap_or(DEFAULT_APTITUDE_COUNT)
        } else {
            0
        };
        let counts = ItemCounts::new(self.counts.mcq, self.counts.saq, self.counts.caselet, aptitude);
        for item_type in ItemType::ALL {
            if counts.get(item_type) > max_per_type {
                return Err(Error::BadRequest(format!(
                    "At most {} {} items can be requested.",
                    max_per_type, item_type
                )));
            }
        }

        let mut meta = AssessmentMeta::new(role, skills, self.difficulty, counts);
        if let Some(jd) = self.job_description.as_deref() {
            meta.append_job_description(jd);
        }
        if let Some(text) = self.extracted_text.as_deref() {
            meta.append_job_description(text);
        }
        Ok(meta)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradePayload {
    pub items: Vec<AssessmentItem>,
    #[serde(default)]
    pub answers: AnswerState,
}

/// Coverage is always recomputed from `items`; `meta` is accepted for
/// symmetry with exported assessments and otherwise ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoveragePayload {
    #[serde(default)]
    pub meta: Option<AssessmentMeta>,
    pub items: Vec<AssessmentItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> GenerateAssessmentPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn defaults_follow_the_form() {
        let p = payload(json!({"role": "Analyst", "skills": ["SQL"]}));
        assert!(p.validate().is_ok());
        let meta = p.into_meta(50).unwrap();
        assert_eq!(meta.difficulty, Difficulty::Medium);
        assert_eq!(meta.counts, ItemCounts::new(15, 5, 1, 5));
        assert!(p.prefer_remote);
    }

    #[test]
    fn excluding_aptitude_zeroes_its_count() {
        let p = payload(json!({
            "role": "Analyst", "skills": ["SQL"], "includeAptitude": false,
            "counts": {"mcq": 3, "saq": 0, "caselet": 0, "aptitude": 9}
        }));
        assert_eq!(p.into_meta(50).unwrap().counts, ItemCounts::new(3, 0, 0, 0));
    }

    #[test]
    fn blank_role_and_blank_skills_are_rejected() {
        let p = payload(json!({"role": "   ", "skills": ["SQL"]}));
        assert!(matches!(p.into_meta(50), Err(Error::BadRequest(msg)) if msg == "Please enter a role."));

        let p = payload(json!({"role": "Dev", "skills": [" ", ""]}));
        assert!(p.validate().is_ok());
        assert!(matches!(p.into_meta(50), Err(Error::BadRequest(msg)) if msg == "Add at least one skill."));

        let p = payload(json!({"role": "", "skills": []}));
        assert!(p.validate().is_err());
    }

    #[test]
    fn counts_above_limit_are_rejected() {
        let p = payload(json!({"role": "Dev", "skills": ["Go"], "counts": {"mcq": 51}}));
        assert!(matches!(p.into_meta(50), Err(Error::BadRequest(_))));
    }

    #[test]
    fn skills_and_description_are_cleaned() {
        let p = payload(json!({
            "role": " Data Engineer ",
            "skills": ["SQL", " Python ", "SQL", ""],
            "jobDescription": "Build pipelines.",
            "extractedText": "  Airflow experience required.  ",
            "difficulty": "hard"
        }));
        let meta = p.into_meta(50).unwrap();
        assert_eq!(meta.role, "Data Engineer");
        assert_eq!(meta.skills, vec!["SQL", "Python"]);
        assert_eq!(meta.difficulty, Difficulty::Hard);
        assert_eq!(
            meta.job_description.as_deref(),
            Some("Build pipelines.\n\nAirflow experience required.")
        );
    }
}
