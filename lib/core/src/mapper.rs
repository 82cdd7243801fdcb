//! Greedy structure mapping.
//!
//! Each iteration filters the surviving candidates against the commitments,
//! scores every one of them and commits the best if its score is positive.
//! Accepted correspondences are never revisited.

use ahash::AHashSet;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use tracing::{debug, info, trace, warn};

use crate::candidate::generate_candidates;
use crate::commitments::{CommitOutcome, Commitments, Correspondence};
use crate::config::MappingConfig;
use crate::error::{Error, Result, Side};
use crate::filter::filter_candidates;
use crate::provider::RelationProvider;
use crate::scorer::{CandidateScore, PairScorer};
use crate::types::{CandidateMapping, Entity};

/// One accepted step of the search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationRecord {
    /// 1-based iteration that accepted this candidate
    pub iteration: usize,
    pub candidate: CandidateMapping,
    pub score: CandidateScore,
}

impl fmt::Display for RelationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} (score {:.3})",
            self.candidate.forward(),
            self.candidate.backward(),
            self.score.total
        )
    }
}

/// Why the search stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Every base entity has a counterpart
    AllMapped,
    /// The best remaining candidate scored zero
    NoPositiveScore,
    /// No candidate survived the constraint filter
    NoCandidates,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::AllMapped => write!(f, "all base entities mapped"),
            StopReason::NoPositiveScore => write!(f, "no positive-scoring candidate left"),
            StopReason::NoCandidates => write!(f, "no consistent candidate left"),
        }
    }
}

/// Final correspondences plus the relations that justified them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    pub mapping: Vec<Correspondence>,
    pub relations: Vec<RelationRecord>,
    pub iterations: usize,
    pub stop_reason: StopReason,
}

impl MappingResult {
    /// `"base --> target"` lines in commitment order
    pub fn mapping_lines(&self) -> Vec<String> {
        self.mapping.iter().map(|c| c.to_string()).collect()
    }

    pub fn target_of(&self, base: &str) -> Option<&str> {
        self.mapping
            .iter()
            .find(|c| c.base == base)
            .map(|c| c.target.as_str())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Progress notifications emitted while mapping
#[derive(Debug, Clone, Copy)]
pub enum MappingEvent<'a> {
    IterationStarted {
        iteration: usize,
        candidates: usize,
    },
    CandidateScored {
        iteration: usize,
        index: usize,
        total: usize,
        candidate: &'a CandidateMapping,
        score: f32,
    },
    Committed {
        record: &'a RelationRecord,
    },
    Finished {
        reason: StopReason,
        mapped: usize,
    },
}

/// Greedy mapper driving generation, filtering and scoring
#[derive(Debug, Clone)]
pub struct Mapper<P> {
    scorer: PairScorer<P>,
}

impl<P: RelationProvider> Mapper<P> {
    /// Mapper with the default configuration
    pub fn new(provider: P) -> Self {
        Self {
            scorer: PairScorer::new(provider, MappingConfig::default()),
        }
    }

    pub fn with_config(provider: P, config: MappingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scorer: PairScorer::new(provider, config),
        })
    }

    pub fn config(&self) -> &MappingConfig {
        self.scorer.config()
    }

    pub fn scorer(&self) -> &PairScorer<P> {
        &self.scorer
    }

    /// Map `base` onto `target`
    pub fn map(&self, base: &[Entity], target: &[Entity]) -> Result<MappingResult> {
        self.map_with_progress(base, target, |_| {})
    }

    /// Map `base` onto `target`, reporting progress to `on_event`
    pub fn map_with_progress<F>(
        &self,
        base: &[Entity],
        target: &[Entity],
        mut on_event: F,
    ) -> Result<MappingResult>
    where
        F: FnMut(&MappingEvent<'_>),
    {
        check_domain(base, Side::Base)?;
        check_domain(target, Side::Target)?;

        let mut candidates = generate_candidates(base, target);
        info!(
            "Mapping {} base onto {} target entities ({} candidates)",
            base.len(),
            target.len(),
            candidates.len()
        );

        let mut commitments = Commitments::new();
        let mut relations: Vec<RelationRecord> = Vec::new();
        let mut iteration = 0;

        let stop_reason = loop {
            if commitments.len() == base.len() {
                break StopReason::AllMapped;
            }
            iteration += 1;

            candidates = filter_candidates(candidates, &commitments);
            debug!(
                "Iteration {}: {} consistent candidates, {} committed",
                iteration,
                candidates.len(),
                commitments.len()
            );
            on_event(&MappingEvent::IterationStarted {
                iteration,
                candidates: candidates.len(),
            });

            if candidates.is_empty() {
                break StopReason::NoCandidates;
            }

            let total = candidates.len();
            let mut ranked: Vec<(usize, CandidateScore)> = Vec::with_capacity(total);
            for (index, candidate) in candidates.iter().enumerate() {
                let score = self.scorer.score(candidate);
                trace!("{} scored {:.3}", candidate, score.total);
                on_event(&MappingEvent::CandidateScored {
                    iteration,
                    index,
                    total,
                    candidate,
                    score: score.total,
                });
                ranked.push((index, score));
            }
            // Stable: equal scores keep generation order.
            ranked.sort_by_key(|(_, score)| Reverse(OrderedFloat(score.total)));

            let (best_index, best_score) = ranked.swap_remove(0);
            if best_score.total <= 0.0 {
                debug!("Best remaining score is {:.3}, stopping", best_score.total);
                break StopReason::NoPositiveScore;
            }

            let best = candidates[best_index].clone();
            for (b, t) in best.forward().correspondences() {
                if commitments.commit(b, t) == CommitOutcome::Conflict {
                    warn!("Skipping conflicting correspondence {} --> {}", b, t);
                }
            }
            info!(
                "Iteration {}: committed {} (score {:.3})",
                iteration, best, best_score.total
            );

            relations.push(RelationRecord {
                iteration,
                candidate: best,
                score: best_score,
            });
            if let Some(record) = relations.last() {
                on_event(&MappingEvent::Committed { record });
            }
        };

        info!(
            "Mapping finished after {} iterations: {} ({} of {} base entities mapped)",
            iteration,
            stop_reason,
            commitments.len(),
            base.len()
        );
        on_event(&MappingEvent::Finished {
            reason: stop_reason,
            mapped: commitments.len(),
        });

        Ok(MappingResult {
            mapping: commitments.into_correspondences(),
            relations,
            iterations: iteration,
            stop_reason,
        })
    }
}

/// Entities of one side must be present and unique.
///
/// Names are compared trimmed and case-insensitively, the way relation
/// tables key them.
fn check_domain(entities: &[Entity], side: Side) -> Result<()> {
    if entities.is_empty() {
        return Err(Error::EmptyDomain(side));
    }
    let mut seen = AHashSet::with_capacity(entities.len());
    for entity in entities {
        if !seen.insert(entity.trim().to_lowercase()) {
            return Err(Error::DuplicateEntity {
                side,
                entity: entity.clone(),
            });
        }
    }
    Ok(())
}
