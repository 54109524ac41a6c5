use crate::models::assessment::{Assessment, AssessmentItem, AssessmentMeta, ItemType};
use crate::services::aptitude_service::APTITUDE_SKILL;
use crate::services::coverage_service::CoverageService;
use crate::services::generator_service::ItemGenerator;
use crate::utils::random::RandomSource;
use std::collections::HashSet;
use tracing::debug;

pub const FALLBACK_SKILL: &str = "general";

pub struct AssemblerService;

impl AssemblerService {
    /// Round-robin skill assignment for `count` slots. Falls back to
    /// [`FALLBACK_SKILL`] when no skills were given.
    pub fn skill_sequence(skills: &[String], count: u32) -> Vec<&str> {
        (0..count as usize)
            .map(|i| {
                if skills.is_empty() {
                    FALLBACK_SKILL
                } else {
                    skills[i % skills.len()].as_str()
                }
            })
            .collect()
    }

    /// Generates every requested item in the order mcq, saq, caselet, aptitude
    /// and attaches freshly computed coverage.
    pub fn assemble(meta: AssessmentMeta, rng: &mut dyn RandomSource) -> Assessment {
        let mut items: Vec<AssessmentItem> = Vec::with_capacity(meta.counts.total() as usize);
        let mut used_ids = HashSet::new();

        for item_type in ItemType::ALL {
            let count = meta.counts.get(item_type);
            let skills = if item_type == ItemType::Aptitude {
                vec![APTITUDE_SKILL; count as usize]
            } else {
                Self::skill_sequence(&meta.skills, count)
            };

            for skill in skills {
                let mut item = ItemGenerator::generate(rng, item_type, skill, meta.difficulty, &meta.role);
                item.id = unique_id(&mut used_ids, item.id);
                items.push(item);
            }
        }

        let coverage = CoverageService::compute(&items);
        debug!(
            role = %meta.role,
            items = coverage.totals.items,
            "Assembled assessment locally"
        );

        Assessment { meta, items, coverage }
    }
}

/// Returns `id`, or `id_2`, `id_3`, ... if it was already taken.
pub(crate) fn unique_id(used: &mut HashSet<String>, id: String) -> String {
    if used.insert(id.clone()) {
        return id;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}_{}", id, n);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}
