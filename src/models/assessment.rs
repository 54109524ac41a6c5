use crate::models::coverage::CoverageReport;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Sentence-case label used in rationales.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Mcq,
    Saq,
    Caselet,
    Aptitude,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::Mcq,
        ItemType::Saq,
        ItemType::Caselet,
        ItemType::Aptitude,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Mcq => "mcq",
            ItemType::Saq => "saq",
            ItemType::Caselet => "caselet",
            ItemType::Aptitude => "aptitude",
        }
    }

    pub fn id_prefix(self) -> &'static str {
        match self {
            ItemType::Mcq => "mcq",
            ItemType::Saq => "saq",
            ItemType::Caselet => "case",
            ItemType::Aptitude => "apt",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One assessment item. Serialises flat, with `type` as the discriminant:
/// `{"id": "...", "type": "mcq", "skill": "...", "difficulty": "easy", "question": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentItem {
    #[serde(default)]
    pub id: String,
    pub skill: String,
    pub difficulty: Difficulty,
    #[serde(flatten)]
    pub kind: ItemKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Mcq(McqItem),
    Saq(SaqItem),
    Caselet(CaseletItem),
    Aptitude(AptitudeItem),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McqItem {
    pub question: String,
    pub options: Vec<String>,
    pub answer_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaqItem {
    pub question: String,
    pub expected_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseletItem {
    pub passage: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<String>,
}

/// Aptitude answers are matched by option value, not position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AptitudeItem {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl AssessmentItem {
    pub fn new(id: String, skill: impl Into<String>, difficulty: Difficulty, kind: ItemKind) -> Self {
        Self {
            id,
            skill: skill.into(),
            difficulty,
            kind,
        }
    }

    pub fn item_type(&self) -> ItemType {
        match self.kind {
            ItemKind::Mcq(_) => ItemType::Mcq,
            ItemKind::Saq(_) => ItemType::Saq,
            ItemKind::Caselet(_) => ItemType::Caselet,
            ItemKind::Aptitude(_) => ItemType::Aptitude,
        }
    }

    /// The text a candidate reads first: the question, or the prompt for caselets.
    pub fn display_text(&self) -> &str {
        match &self.kind {
            ItemKind::Mcq(mcq) => &mcq.question,
            ItemKind::Saq(saq) => &saq.question,
            ItemKind::Caselet(caselet) => &caselet.prompt,
            ItemKind::Aptitude(apt) => &apt.question,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemCounts {
    pub mcq: u32,
    pub saq: u32,
    pub caselet: u32,
    #[serde(default)]
    pub aptitude: u32,
}

impl ItemCounts {
    pub fn new(mcq: u32, saq: u32, caselet: u32, aptitude: u32) -> Self {
        Self {
            mcq,
            saq,
            caselet,
            aptitude,
        }
    }

    pub fn get(&self, item_type: ItemType) -> u32 {
        match item_type {
            ItemType::Mcq => self.mcq,
            ItemType::Saq => self.saq,
            ItemType::Caselet => self.caselet,
            ItemType::Aptitude => self.aptitude,
        }
    }

    pub fn total(&self) -> u32 {
        self.mcq + self.saq + self.caselet + self.aptitude
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentMeta {
    pub role: String,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    pub difficulty: Difficulty,
    pub counts: ItemCounts,
}

impl AssessmentMeta {
    pub fn new(role: impl Into<String>, skills: Vec<String>, difficulty: Difficulty, counts: ItemCounts) -> Self {
        Self {
            role: role.into(),
            skills,
            job_description: None,
            difficulty,
            counts,
        }
    }

    /// Appends extracted document text to the job description, separated by a blank line.
    pub fn append_job_description(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        match self.job_description.as_mut() {
            Some(existing) if !existing.trim().is_empty() => {
                existing.push_str("\n\n");
                existing.push_str(text);
            }
            _ => self.job_description = Some(text.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub meta: AssessmentMeta,
    pub items: Vec<AssessmentItem>,
    pub coverage: CoverageReport,
}
