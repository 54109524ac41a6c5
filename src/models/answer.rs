use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A submitted answer: an option index for choice items, free text otherwise.
/// `null` decodes to `Unanswered`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Index(i64),
    Number(f64),
    Text(String),
    Unanswered,
}

impl AnswerValue {
    /// Integral numbers only; `2.0` reads as index 2, `1.5` as no index.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            AnswerValue::Index(idx) => Some(*idx),
            AnswerValue::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_unanswered(&self) -> bool {
        matches!(self, AnswerValue::Unanswered)
    }
}

/// Item id to submitted value. Items without an entry are unanswered.
pub type AnswerState = HashMap<String, AnswerValue>;
