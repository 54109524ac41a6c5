use crate::models::assessment::{Difficulty, ItemType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub by_skill: BTreeMap<String, u32>,
    pub by_difficulty: DifficultyTally,
    pub totals: CoverageTotals,
}

/// Every difficulty is always present, so the serialised form carries all three keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DifficultyTally {
    #[serde(default)]
    pub easy: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub hard: u32,
}

impl DifficultyTally {
    pub fn increment(&mut self, difficulty: Difficulty) {
        match difficulty {
            Difficulty::Easy => self.easy += 1,
            Difficulty::Medium => self.medium += 1,
            Difficulty::Hard => self.hard += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.easy + self.medium + self.hard
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoverageTotals {
    pub items: u32,
    pub mcq: u32,
    pub saq: u32,
    pub caselet: u32,
    pub aptitude: u32,
}

impl CoverageTotals {
    pub fn record(&mut self, item_type: ItemType) {
        match item_type {
            ItemType::Mcq => self.mcq += 1,
            ItemType::Saq => self.saq += 1,
            ItemType::Caselet => self.caselet += 1,
            ItemType::Aptitude => self.aptitude += 1,
        }
        self.items += 1;
    }
}
