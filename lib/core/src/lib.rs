//! # Analogy Core
//!
//! Core library for analogical structure mapping.
//!
//! Given a *base* and a *target* list of entities, the mapper infers which base
//! entity corresponds to which target entity from the similarity of the
//! relations holding between entity pairs on each side.
//!
//! - [`generate_candidates`] - every two-correspondence hypothesis, in both orientations
//! - [`filter_candidates`] - drops hypotheses that contradict accepted correspondences
//! - [`PairScorer`] - cluster-level bipartite matching of relation properties
//! - [`solve_assignment`] - Hungarian min-cost assignment used by the scorer
//! - [`Mapper`] - greedy loop committing the best hypothesis until no evidence is left
//!
//! Relation properties, their similarity and their clustering come from a
//! [`RelationProvider`].
//!
//! ## Example
//!
//! ```rust
//! use analogy_core::{Clusters, Mapper, Property, RelationProvider};
//! use std::collections::BTreeSet;
//!
//! struct Orbits;
//!
//! impl RelationProvider for Orbits {
//!     fn similarity(&self, a: &str, b: &str) -> f32 {
//!         if a == b { 1.0 } else { 0.0 }
//!     }
//!
//!     fn edge_props(&self, from: &str, to: &str) -> Vec<Property> {
//!         match (from, to) {
//!             ("earth", "sun") | ("electron", "nucleus") => vec!["orbits".to_string()],
//!             _ => Vec::new(),
//!         }
//!     }
//!
//!     fn clustering(&self, properties: &[Property], _threshold: f32) -> Clusters {
//!         properties.iter().map(|p| BTreeSet::from([p.clone()])).collect()
//!     }
//! }
//!
//! let base = vec!["sun".to_string(), "earth".to_string()];
//! let target = vec!["electron".to_string(), "nucleus".to_string()];
//!
//! let result = Mapper::new(Orbits).map(&base, &target).unwrap();
//! assert_eq!(result.target_of("earth"), Some("electron"));
//! assert_eq!(result.target_of("sun"), Some("nucleus"));
//! ```

pub mod assignment;
pub mod candidate;
pub mod commitments;
pub mod config;
pub mod error;
pub mod filter;
pub mod mapper;
pub mod provider;
pub mod scorer;
pub mod types;

pub use assignment::{solve_assignment, CostMatrix};
pub use candidate::{candidate_count, generate_candidates};
pub use commitments::{CommitOutcome, Commitments, Correspondence};
pub use config::{MappingConfig, DEFAULT_DISTANCE_THRESHOLD, DEFAULT_SCORE_PRECISION};
pub use error::{Error, Result, Side};
pub use filter::{filter_candidates, is_consistent};
pub use mapper::{Mapper, MappingEvent, MappingResult, RelationRecord, StopReason};
pub use provider::{Clusters, RelationProvider};
pub use scorer::{CandidateScore, ClusterGraph, DirectionScore, PairScorer, PropertyEdge};
pub use types::{CandidateMapping, Direction, Entity, Property};
