use crate::models::answer::AnswerValue;
use crate::models::assessment::ItemType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Auto-graded skills scoring below this percentage are flagged for practice.
pub const PRACTICE_THRESHOLD: u32 = 70;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeReport {
    pub score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub band: ScoreBand,
    pub message: String,
    pub needs_review: bool,
    /// Only skills with auto-graded items appear here.
    pub by_skill: BTreeMap<String, SkillGrade>,
    pub per_item: Vec<ItemGrade>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGrade {
    pub awarded: u32,
    pub max_points: u32,
    pub percentage: u32,
    pub needs_practice: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl SkillGrade {
    pub fn new(skill: &str, awarded: u32, max_points: u32) -> Self {
        let percentage = percentage_of(awarded, max_points);
        let needs_practice = percentage < PRACTICE_THRESHOLD;
        Self {
            awarded,
            max_points,
            percentage,
            needs_practice,
            recommendation: needs_practice.then(|| format!("Study more {} concepts and practice", skill)),
        }
    }
}

/// Rounded share of `max` in percent; 0 when nothing was gradable.
pub fn percentage_of(score: u32, max: u32) -> u32 {
    if max == 0 {
        0
    } else {
        (score as f64 / max as f64 * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemGrade {
    pub item_id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub skill: String,
    pub awarded: u32,
    pub max_points: u32,
    /// `None` for items that are not auto-graded.
    pub is_correct: Option<bool>,
    pub submitted: Option<AnswerValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_answer: Option<String>,
    pub needs_review: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Outstanding,
    Great,
    Good,
    Fair,
    KeepPractising,
}

impl ScoreBand {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            90..=u32::MAX => ScoreBand::Outstanding,
            80..=89 => ScoreBand::Great,
            70..=79 => ScoreBand::Good,
            60..=69 => ScoreBand::Fair,
            _ => ScoreBand::KeepPractising,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Outstanding => "Outstanding!",
            ScoreBand::Great => "Great work!",
            ScoreBand::Good => "Good job!",
            ScoreBand::Fair => "Not bad, room for improvement",
            ScoreBand::KeepPractising => "Keep practicing!",
        }
    }
}
