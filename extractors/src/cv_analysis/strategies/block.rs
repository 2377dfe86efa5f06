use shared_types::{CandidateMission, ExtractionError, MissionStrategy};

use super::build_candidate;
use crate::cv_analysis::client_detector::ClientDetector;
use crate::cv_analysis::date_parser::{date_bounds, parse_dates};
use crate::cv_analysis::sections::split_blocks;
use crate::cv_analysis::skills::SkillExtractor;

/// Blocks shorter than this carry too little context to describe a mission.
const MIN_BLOCK_CHARS: usize = 100;

/// One candidate per text block that mentions dates or a client.
#[derive(Debug, Default)]
pub struct BlockStrategy {
    clients: ClientDetector,
    skills: SkillExtractor,
}

impl BlockStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MissionStrategy for BlockStrategy {
    fn name(&self) -> &'static str {
        "block"
    }

    fn propose(&self, text: &str) -> Result<Vec<CandidateMission>, ExtractionError> {
        let mut candidates = Vec::new();

        for block in split_blocks(text) {
            if block.chars().count() < MIN_BLOCK_CHARS {
                continue;
            }

            let dates = parse_dates(&block);
            let client = self.clients.detect(&block);
            if dates.is_empty() && client.is_none() {
                continue;
            }

            let (date_debut, date_fin) = date_bounds(&dates);
            candidates.push(build_candidate(
                &block,
                client,
                date_debut,
                date_fin,
                &self.skills,
            ));
        }

        tracing::debug!("Block strategy proposed {} candidates", candidates.len());
        Ok(candidates)
    }
}
