use crate::models::assessment::{AptitudeItem, AssessmentItem, Difficulty, ItemKind, ItemType};
use crate::utils::random::{pick, shuffle, RandomSource};
use crate::utils::token::generate_item_id;

pub const APTITUDE_SKILL: &str = "aptitude";

#[derive(Debug, Clone, PartialEq)]
pub struct AptitudeProblem {
    pub question: String,
    pub correct: String,
    pub options: Vec<String>,
}

pub type ProblemGenerator = fn(&mut dyn RandomSource) -> AptitudeProblem;

const EASY: &[ProblemGenerator] = &[addition, multiplication];
const MEDIUM: &[ProblemGenerator] = &[tripling_sequence, percentage_of];
const HARD: &[ProblemGenerator] = &[equation_square, work_rate, compound_interest];

pub struct AptitudeService;

impl AptitudeService {
    pub fn pool(difficulty: Difficulty) -> &'static [ProblemGenerator] {
        match difficulty {
            Difficulty::Easy => EASY,
            Difficulty::Medium => MEDIUM,
            Difficulty::Hard => HARD,
        }
    }

    pub fn problem(rng: &mut dyn RandomSource, difficulty: Difficulty) -> AptitudeProblem {
        let generator = *pick(rng, Self::pool(difficulty));
        generator(rng)
    }

    pub fn generate(rng: &mut dyn RandomSource, difficulty: Difficulty) -> AssessmentItem {
        let AptitudeProblem {
            question,
            correct,
            mut options,
        } = Self::problem(rng, difficulty);
        shuffle(rng, &mut options);

        AssessmentItem::new(
            generate_item_id(rng, ItemType::Aptitude.id_prefix()),
            APTITUDE_SKILL,
            difficulty,
            ItemKind::Aptitude(AptitudeItem {
                question,
                options: Some(options),
                answer: Some(correct),
            }),
        )
    }
}

/// Builds four option strings with the correct value first. A distractor that
/// collides with an earlier option is bumped upward until it is unique.
fn numeric_options(correct: i64, distractors: [i64; 3]) -> Vec<String> {
    let mut values = vec![correct];
    for distractor in distractors {
        let mut value = distractor;
        while values.contains(&value) {
            value += 1;
        }
        values.push(value);
    }
    values.into_iter().map(|v| v.to_string()).collect()
}

fn problem(question: String, correct: i64, distractors: [i64; 3]) -> AptitudeProblem {
    AptitudeProblem {
        question,
        correct: correct.to_string(),
        options: numeric_options(correct, distractors),
    }
}

fn round(value: f64) -> i64 {
    value.round() as i64
}

// operands in [15, 39]
fn addition(rng: &mut dyn RandomSource) -> AptitudeProblem {
    let n1 = rng.int_range(15, 40);
    let n2 = rng.int_range(15, 40);
    let sum = n1 + n2;
    problem(format!("Calculate: {} + {}", n1, n2), sum, [sum + 2, sum - 3, sum + 5])
}

// base in [8, 19], multiplier in [3, 8]
fn multiplication(rng: &mut dyn RandomSource) -> AptitudeProblem {
    let base = rng.int_range(8, 20);
    let multiplier = rng.int_range(3, 9);
    let product = base * multiplier;
    problem(
        format!("What is {} × {}?", base, multiplier),
        product,
        [product + 1, product - 2, base * (multiplier + 1)],
    )
}

// start in [3, 10], ratio 3
fn tripling_sequence(rng: &mut dyn RandomSource) -> AptitudeProblem {
    let start = rng.int_range(3, 11);
    let second = start * 3;
    let next = second * 3;
    problem(
        format!("In the sequence {}, {}, ?, what is the next number?", start, second),
        next,
        [second + start, second * 2, second + 3],
    )
}

// percentage in [10, 39], total in [100, 299]
fn percentage_of(rng: &mut dyn RandomSource) -> AptitudeProblem {
    let total = rng.int_range(100, 300);
    let percentage = rng.int_range(10, 40);
    let share = |pct: i64| round(total as f64 * pct as f64 / 100.0);
    problem(
        format!("What is {}% of {}?", percentage, total),
        share(percentage),
        [
            share(percentage + 5),
            share(percentage - 5),
            round(total as f64 * percentage as f64 / 50.0),
        ],
    )
}

// x in [3, 9]
fn equation_square(rng: &mut dyn RandomSource) -> AptitudeProblem {
    let x = rng.int_range(3, 10);
    problem(
        format!("If 2x + 5 = {}, what is x²?", 2 * x + 5),
        x * x,
        [(x + 1) * (x + 1), (x - 1) * (x - 1), x * 3],
    )
}

// workers in [4, 11], days in [8, 13]
fn work_rate(rng: &mut dyn RandomSource) -> AptitudeProblem {
    let workers = rng.int_range(4, 12);
    let days = rng.int_range(8, 14);
    let new_workers = workers + 2;
    problem(
        format!(
            "If {} workers can complete a task in {} days, how many days will {} workers take?",
            workers, days, new_workers
        ),
        round((workers * days) as f64 / new_workers as f64),
        [days - 1, days + 1, round(days as f64 * 0.8)],
    )
}

// principal in [10000, 14999], rate in [5, 12], two years
fn compound_interest(rng: &mut dyn RandomSource) -> AptitudeProblem {
    let principal = rng.int_range(10_000, 15_000);
    let rate = rng.int_range(5, 13);
    let years = 2;
    let growth = 1.0 + rate as f64 / 100.0;
    problem(
        format!(
            "An investment of {} at {}% compound interest per year. What's the value after {} years?",
            principal, rate, years
        ),
        round(principal as f64 * growth.powi(years)),
        [
            round(principal as f64 * growth * years as f64),
            round(principal as f64 * 1.15),
            round(principal as f64 * 1.25),
        ],
    )
}
