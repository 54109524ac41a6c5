use serde::{Deserialize, Serialize};

use crate::models::assessment::{Assessment, AssessmentItem, AssessmentMeta, Difficulty, ItemKind, ItemType};

/// Candidate-facing view of an assessment with every answer key removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAssessment {
    pub meta: AssessmentMeta,
    pub total_items: usize,
    pub items: Vec<PublicItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub skill: String,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl From<&AssessmentItem> for PublicItem {
    fn from(item: &AssessmentItem) -> Self {
        let mut public = PublicItem {
            id: item.id.clone(),
            item_type: item.item_type(),
            skill: item.skill.clone(),
            difficulty: item.difficulty,
            question: None,
            options: None,
            passage: None,
            prompt: None,
        };
        match &item.kind {
            ItemKind::Mcq(mcq) => {
                public.question = Some(mcq.question.clone());
                public.options = Some(mcq.options.clone());
            }
            ItemKind::Saq(saq) => public.question = Some(saq.question.clone()),
            ItemKind::Caselet(caselet) => {
                public.passage = Some(caselet.passage.clone());
                public.prompt = Some(caselet.prompt.clone());
            }
            ItemKind::Aptitude(apt) => {
                public.question = Some(apt.question.clone());
                public.options = apt.options.clone();
            }
        }
        public
    }
}

impl From<&Assessment> for PublicAssessment {
    fn from(assessment: &Assessment) -> Self {
        Self {
            meta: assessment.meta.clone(),
            total_items: assessment.items.len(),
            items: assessment.items.iter().map(PublicItem::from).collect(),
        }
    }
}
