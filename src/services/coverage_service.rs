use crate::models::assessment::AssessmentItem;
use crate::models::coverage::CoverageReport;

pub struct CoverageService;

impl CoverageService {
    /// Tallies items by skill, difficulty and type. Always recomputed from the
    /// items at hand; a coverage value carried alongside them is never reused.
    pub fn compute(items: &[AssessmentItem]) -> CoverageReport {
        items.iter().fold(CoverageReport::default(), |mut report, item| {
            *report.by_skill.entry(item.skill.clone()).or_insert(0) += 1;
            report.by_difficulty.increment(item.difficulty);
            report.totals.record(item.item_type());
            report
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::{AptitudeItem, CaseletItem, Difficulty, ItemKind, McqItem, SaqItem};
    use serde_json::json;

    fn sample_items() -> Vec<AssessmentItem> {
        vec![
            AssessmentItem::new(
                "mcq_1".into(),
                "SQL",
                Difficulty::Easy,
                ItemKind::Mcq(McqItem {
                    question: "q".into(),
                    options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    answer_index: 2,
                    rationale: None,
                }),
            ),
            AssessmentItem::new(
                "mcq_2".into(),
                "Python",
                Difficulty::Easy,
                ItemKind::Mcq(McqItem {
                    question: "q2".into(),
                    options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    answer_index: 0,
                    rationale: None,
                }),
            ),
            AssessmentItem::new(
                "saq_1".into(),
                "SQL",
                Difficulty::Easy,
                ItemKind::Saq(SaqItem {
                    question: "why".into(),
                    expected_answer: "because".into(),
                    rubric: None,
                }),
            ),
            AssessmentItem::new(
                "case_1".into(),
                "SQL",
                Difficulty::Easy,
                ItemKind::Caselet(CaseletItem {
                    passage: "p".into(),
                    prompt: "do".into(),
                    rubric: None,
                }),
            ),
            AssessmentItem::new(
                "apt_1".into(),
                "aptitude",
                Difficulty::Easy,
                ItemKind::Aptitude(AptitudeItem {
                    question: "1 + 1".into(),
                    options: None,
                    answer: Some("2".into()),
                }),
            ),
        ]
    }

    #[test]
    fn totals_match_item_list() {
        let items = sample_items();
        let report = CoverageService::compute(&items);

        assert_eq!(report.totals.items, items.len() as u32);
        assert_eq!(report.totals.mcq, 2);
        assert_eq!(report.totals.saq, 1);
        assert_eq!(report.totals.caselet, 1);
        assert_eq!(report.totals.aptitude, 1);
        assert_eq!(
            report.totals.mcq + report.totals.saq + report.totals.caselet + report.totals.aptitude,
            report.totals.items
        );
        assert_eq!(report.by_difficulty.total(), report.totals.items);
        assert_eq!(report.by_skill.get("SQL"), Some(&3));
        assert_eq!(report.by_skill.get("Python"), Some(&1));
        assert_eq!(report.by_skill.get("aptitude"), Some(&1));
    }

    #[test]
    fn all_difficulty_keys_are_serialised() {
        let report = CoverageService::compute(&sample_items());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["byDifficulty"], json!({"easy": 5, "medium": 0, "hard": 0}));
    }

    #[test]
    fn empty_items_give_zero_totals() {
        let report = CoverageService::compute(&[]);
        assert!(report.by_skill.is_empty());
        assert_eq!(
            serde_json::to_value(&report.totals).unwrap(),
            json!({"items": 0, "mcq": 0, "saq": 0, "caselet": 0, "aptitude": 0})
        );
    }

    #[test]
    fn recomputing_is_deterministic() {
        let items = sample_items();
        assert_eq!(CoverageService::compute(&items), CoverageService::compute(&items));
    }
}
