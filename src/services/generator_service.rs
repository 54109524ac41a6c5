use crate::models::assessment::{
    AssessmentItem, CaseletItem, Difficulty, ItemKind, ItemType, McqItem, SaqItem,
};
use crate::services::aptitude_service::AptitudeService;
use crate::services::template_bank::{self as bank, render};
use crate::utils::random::{pick, shuffle, RandomSource};
use crate::utils::token::generate_item_id;

/// Fills templates into single assessment items. Generation is total: any
/// skill and role string, including the `general` fallback, yields an item.
pub struct ItemGenerator;

impl ItemGenerator {
    pub fn generate(
        rng: &mut dyn RandomSource,
        item_type: ItemType,
        skill: &str,
        difficulty: Difficulty,
        role: &str,
    ) -> AssessmentItem {
        match item_type {
            ItemType::Mcq => Self::mcq(rng, skill, difficulty, role),
            ItemType::Saq => Self::saq(rng, skill, difficulty, role),
            ItemType::Caselet => Self::caselet(rng, skill, difficulty, role),
            ItemType::Aptitude => AptitudeService::generate(rng, difficulty),
        }
    }

    pub fn mcq(rng: &mut dyn RandomSource, skill: &str, difficulty: Difficulty, role: &str) -> AssessmentItem {
        let context = *pick(rng, bank::MCQ_CONTEXTS);
        let vars = [
            ("skill", skill),
            ("role", role),
            ("context", context),
            ("difficulty", difficulty.label()),
        ];

        let correct = render(*pick(rng, bank::MCQ_CORRECT), &vars);

        let mut distractors: Vec<String> = bank::MCQ_DISTRACTORS
            .iter()
            .map(|template| render(template, &vars))
            .collect();
        shuffle(rng, &mut distractors);
        distractors.truncate(3);

        let mut options = Vec::with_capacity(4);
        options.push(correct.clone());
        options.extend(distractors);
        shuffle(rng, &mut options);
        let answer_index = options.iter().position(|o| *o == correct).unwrap_or(0);

        let question = format!(
            "{}{}",
            render(*pick(rng, bank::MCQ_STEMS), &vars),
            render(bank::MCQ_STEM_SUFFIX, &vars)
        );

        AssessmentItem::new(
            generate_item_id(rng, ItemType::Mcq.id_prefix()),
            skill,
            difficulty,
            ItemKind::Mcq(McqItem {
                question,
                options,
                answer_index,
                rationale: Some(render(bank::MCQ_RATIONALE, &vars)),
            }),
        )
    }

    pub fn saq(rng: &mut dyn RandomSource, skill: &str, difficulty: Difficulty, role: &str) -> AssessmentItem {
        let selected = pick(rng, bank::SAQ_PROMPTS);
        let vars = [("skill", skill), ("role", role), ("focus", selected.focus)];

        AssessmentItem::new(
            generate_item_id(rng, ItemType::Saq.id_prefix()),
            skill,
            difficulty,
            ItemKind::Saq(SaqItem {
                question: render(selected.prompt, &vars),
                expected_answer: render(bank::SAQ_EXPECTED_ANSWER, &vars),
                rubric: Some(render(bank::SAQ_RUBRIC, &vars)),
            }),
        )
    }

    pub fn caselet(rng: &mut dyn RandomSource, skill: &str, difficulty: Difficulty, role: &str) -> AssessmentItem {
        let scenario = pick(rng, bank::CASELET_SCENARIOS);
        let vars = [
            ("skill", skill),
            ("role", role),
            ("context", scenario.context),
            ("challenge", scenario.challenge),
        ];
        let prompt = render(*pick(rng, bank::CASELET_PROMPTS), &vars);

        AssessmentItem::new(
            generate_item_id(rng, ItemType::Caselet.id_prefix()),
            skill,
            difficulty,
            ItemKind::Caselet(CaseletItem {
                passage: render(scenario.passage, &vars),
                prompt,
                rubric: Some(render(bank::CASELET_RUBRIC, &vars)),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::random::testing::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn mcq_answer_index_points_at_a_correct_statement() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let item = ItemGenerator::generate(&mut rng, ItemType::Mcq, "SQL", Difficulty::Medium, "Data Analyst");
            let ItemKind::Mcq(mcq) = &item.kind else {
                panic!("expected mcq");
            };

            assert_eq!(mcq.options.len(), 4);
            assert!(mcq.answer_index < 4);

            let chosen = &mcq.options[mcq.answer_index];
            let is_correct_template = bank::MCQ_CORRECT.iter().any(|t| {
                bank::MCQ_CONTEXTS.iter().any(|ctx| {
                    render(t, &[("skill", "SQL"), ("role", "Data Analyst"), ("context", ctx)]) == *chosen
                })
            });
            assert!(is_correct_template, "seed {} picked {}", seed, chosen);

            let correct_count = mcq
                .options
                .iter()
                .filter(|o| o.starts_with("Implement comprehensive")
                    || o.starts_with("Apply industry-standard")
                    || o.starts_with("Execute structured")
                    || o.starts_with("Deploy proven"))
                .count();
            assert_eq!(correct_count, 1);
        }
    }

    #[test]
    fn mcq_answer_position_varies_across_draws() {
        let mut seen = [false; 4];
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let item = ItemGenerator::mcq(&mut rng, "Python", Difficulty::Easy, "Engineer");
            if let ItemKind::Mcq(mcq) = item.kind {
                seen[mcq.answer_index] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn mcq_question_carries_context_and_rationale_difficulty() {
        let mut rng = ScriptedSource::constant(0.0);
        let item = ItemGenerator::mcq(&mut rng, "Kafka", Difficulty::Hard, "Platform Engineer");
        let ItemKind::Mcq(mcq) = item.kind else {
            panic!("expected mcq");
        };
        assert_eq!(
            mcq.question,
            "Which approach best demonstrates advanced Kafka expertise for a Platform Engineer? \
Consider enterprise-level implementation requirements."
        );
        let rationale = mcq.rationale.unwrap();
        assert!(rationale.starts_with("Hard: This tests practical Kafka application in enterprise-level implementation."));
        assert!(rationale.ends_with("for Platform Engineer professionals."));
    }

    #[test]
    fn saq_expected_answer_lists_grading_dimensions() {
        let mut rng = StdRng::seed_from_u64(9);
        let item = ItemGenerator::saq(&mut rng, "Negotiation", Difficulty::Medium, "Account Manager");
        assert_eq!(item.skill, "Negotiation");
        assert_eq!(item.item_type(), ItemType::Saq);
        let ItemKind::Saq(saq) = item.kind else {
            panic!("expected saq");
        };
        assert!(saq.question.contains("Negotiation"));
        assert!(saq.expected_answer.contains("Negotiation principles"));
        assert!(saq.expected_answer.contains("Account Manager responsibilities"));
        assert!(saq.expected_answer.contains("mitigation"));
        assert!(saq.expected_answer.contains("success metrics"));
        assert!(saq.expected_answer.contains("organizational objectives"));
        assert!(saq.rubric.unwrap().contains("(25%)"));
    }

    #[test]
    fn skill_text_with_braces_is_kept_verbatim() {
        let mut rng = StdRng::seed_from_u64(3);
        let item = ItemGenerator::saq(&mut rng, "{role}", Difficulty::Easy, "Chef");
        assert_eq!(item.skill, "{role}");
        let ItemKind::Saq(saq) = item.kind else {
            panic!("expected saq");
        };
        assert!(saq.expected_answer.contains("{role} principles"));
        assert!(saq.expected_answer.contains("Chef responsibilities"));

        let mut rng = StdRng::seed_from_u64(3);
        let item = ItemGenerator::mcq(&mut rng, "C{context}", Difficulty::Easy, "Engineer");
        let ItemKind::Mcq(mcq) = item.kind else {
            panic!("expected mcq");
        };
        assert!(mcq.question.contains("C{context}"));
        assert!(mcq.options.iter().all(|o| !o.contains("Cquality")));
    }

    #[test]
    fn caselet_fills_scenario_and_prompt() {
        let mut rng = StdRng::seed_from_u64(21);
        let item = ItemGenerator::caselet(&mut rng, "general", Difficulty::Easy, "Ops Lead");
        assert!(item.id.starts_with("case_"));
        let ItemKind::Caselet(caselet) = item.kind else {
            panic!("expected caselet");
        };
        assert!(caselet.passage.contains("Ops Lead"));
        assert!(caselet.passage.contains("general"));
        assert!(!caselet.prompt.contains('{'));
        assert!(caselet.rubric.unwrap().contains("general technical application"));
    }

    #[test]
    fn aptitude_dispatch_uses_fixed_skill_label() {
        let mut rng = StdRng::seed_from_u64(4);
        let item = ItemGenerator::generate(&mut rng, ItemType::Aptitude, "ignored", Difficulty::Hard, "Role");
        assert_eq!(item.skill, "aptitude");
        assert_eq!(item.difficulty, Difficulty::Hard);
    }
}
