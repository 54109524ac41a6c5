use crate::models::answer::{AnswerState, AnswerValue};
use crate::models::assessment::{AptitudeItem, AssessmentItem, ItemKind, McqItem, SaqItem};
use crate::models::grade::{percentage_of, GradeReport, ItemGrade, ScoreBand, SkillGrade};
use crate::utils::text::similarity;
use std::collections::BTreeMap;
use tracing::debug;

pub const MCQ_POINTS: u32 = 1;
pub const APTITUDE_POINTS: u32 = 1;
pub const SAQ_POINTS: u32 = 3;

/// Similarity cut-offs for short answers. `full` and `partial` are inclusive,
/// `minimal` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradingThresholds {
    pub full: f64,
    pub partial: f64,
    pub minimal: f64,
}

impl Default for GradingThresholds {
    fn default() -> Self {
        Self {
            full: 0.70,
            partial: 0.40,
            minimal: 0.15,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GradingService {
    thresholds: GradingThresholds,
}

impl GradingService {
    pub fn new(thresholds: GradingThresholds) -> Self {
        Self { thresholds }
    }

    pub fn saq_points(&self, similarity: f64) -> u32 {
        let t = &self.thresholds;
        if similarity >= t.full {
            3
        } else if similarity >= t.partial {
            2
        } else if similarity > t.minimal {
            1
        } else {
            0
        }
    }

    /// Scores every item against `answers`. Pure: the same input always gives
    /// the same report. Caselets carry no points and are flagged for review.
    pub fn grade(&self, items: &[AssessmentItem], answers: &AnswerState) -> GradeReport {
        let per_item: Vec<ItemGrade> = items
            .iter()
            .map(|item| self.grade_item(item, answers.get(&item.id)))
            .collect();

        let score: u32 = per_item.iter().map(|g| g.awarded).sum();
        let max_score: u32 = per_item.iter().map(|g| g.max_points).sum();
        let percentage = percentage_of(score, max_score);
        let band = ScoreBand::from_percentage(percentage);
        let needs_review = per_item.iter().any(|g| g.needs_review);
        let by_skill = skill_breakdown(&per_item);

        debug!(score, max_score, percentage, needs_review, "Graded assessment");

        GradeReport {
            score,
            max_score,
            percentage,
            band,
            message: band.message().to_string(),
            needs_review,
            by_skill,
            per_item,
        }
    }

    fn grade_item(&self, item: &AssessmentItem, submitted: Option<&AnswerValue>) -> ItemGrade {
        let submitted = submitted.filter(|value| !value.is_unanswered());
        let mut grade = ItemGrade {
            item_id: item.id.clone(),
            item_type: item.item_type(),
            skill: item.skill.clone(),
            awarded: 0,
            max_points: 0,
            is_correct: None,
            submitted: submitted.cloned(),
            correct_index: None,
            similarity: None,
            expected_answer: None,
            needs_review: false,
        };

        match &item.kind {
            ItemKind::Mcq(mcq) => {
                let correct = mcq_is_correct(mcq, submitted);
                grade.max_points = MCQ_POINTS;
                grade.awarded = if correct { MCQ_POINTS } else { 0 };
                grade.is_correct = Some(correct);
                grade.correct_index = Some(mcq.answer_index);
            }
            ItemKind::Aptitude(apt) => {
                let correct = aptitude_is_correct(apt, submitted);
                grade.max_points = APTITUDE_POINTS;
                grade.awarded = if correct { APTITUDE_POINTS } else { 0 };
                grade.is_correct = Some(correct);
                grade.correct_index = aptitude_correct_index(apt);
            }
            ItemKind::Saq(saq) => {
                let sim = saq_similarity(saq, submitted);
                let points = self.saq_points(sim);
                grade.max_points = SAQ_POINTS;
                grade.awarded = points;
                grade.is_correct = Some(points == SAQ_POINTS);
                grade.similarity = Some(sim);
                grade.expected_answer = Some(saq.expected_answer.clone());
            }
            ItemKind::Caselet(_) => {
                grade.needs_review = true;
            }
        }

        grade
    }
}

/// Sums awarded and maximum points per skill over auto-graded items.
fn skill_breakdown(per_item: &[ItemGrade]) -> BTreeMap<String, SkillGrade> {
    let mut totals: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for grade in per_item.iter().filter(|g| g.max_points > 0) {
        let entry = totals.entry(grade.skill.as_str()).or_default();
        entry.0 += grade.awarded;
        entry.1 += grade.max_points;
    }
    totals
        .into_iter()
        .map(|(skill, (awarded, max))| (skill.to_string(), SkillGrade::new(skill, awarded, max)))
        .collect()
}

fn mcq_is_correct(mcq: &McqItem, submitted: Option<&AnswerValue>) -> bool {
    submitted
        .and_then(AnswerValue::as_index)
        .and_then(|idx| usize::try_from(idx).ok())
        .map_or(false, |idx| idx == mcq.answer_index)
}

/// Matches by option value: the chosen option and the answer key are compared
/// after trimming, case-sensitively.
fn aptitude_is_correct(apt: &AptitudeItem, submitted: Option<&AnswerValue>) -> bool {
    let (Some(options), Some(answer)) = (apt.options.as_ref(), apt.answer.as_ref()) else {
        return false;
    };
    submitted
        .and_then(AnswerValue::as_index)
        .and_then(|idx| usize::try_from(idx).ok())
        .and_then(|idx| options.get(idx))
        .map_or(false, |chosen| chosen.trim() == answer.trim())
}

fn aptitude_correct_index(apt: &AptitudeItem) -> Option<usize> {
    let answer = apt.answer.as_ref()?;
    apt.options
        .as_ref()?
        .iter()
        .position(|option| option.trim() == answer.trim())
}

fn saq_similarity(saq: &SaqItem, submitted: Option<&AnswerValue>) -> f64 {
    match submitted.and_then(AnswerValue::as_text) {
        Some(text) => similarity(text, &saq.expected_answer),
        None => 0.0,
    }
}
