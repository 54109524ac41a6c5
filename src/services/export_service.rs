use crate::error::Result;
use crate::models::assessment::Assessment;
use crate::models::coverage::CoverageReport;
use chrono::NaiveDate;

pub struct ExportService;

impl ExportService {
    fn slug(input: &str) -> String {
        let slug: String = input
            .trim()
            .chars()
            .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        let slug = slug
            .split('_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_");
        if slug.is_empty() {
            "untitled".to_string()
        } else {
            slug
        }
    }
}

impl ExportService {
    /// Pretty-printed JSON of the whole assessment, answer keys included.
    pub fn assessment_json(assessment: &Assessment) -> Result<String> {
        Ok(serde_json::to_string_pretty(assessment)?)
    }

    pub fn coverage_json(coverage: &CoverageReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(coverage)?)
    }

    pub fn assessment_filename(role: &str, date: NaiveDate) -> String {
        format!("assessment_{}_{}.json", Self::slug(role), date.format("%Y%m%d"))
    }

    pub fn coverage_filename(role: &str, date: NaiveDate) -> String {
        format!("coverage_{}_{}.json", Self::slug(role), date.format("%Y%m%d"))
    }
}
