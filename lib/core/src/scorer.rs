//! Pair scorer: how well a base relation lines up with a target relation.
//!
//! For each direction of a candidate the scorer
//!
//! 1. fetches the relation properties of the base pair and the target pair,
//! 2. compares every base property with every target property,
//! 3. clusters each side so near-duplicate properties collapse together,
//! 4. keeps only the strongest edge between any two clusters,
//! 5. solves a full min-cost assignment with cost `max(0, 1 - similarity)`,
//! 6. sums the similarities of the chosen edges.
//!
//! Direction scores keep their sign. The candidate score is the sum over both
//! directions, floored at zero.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::assignment::{solve_assignment, CostMatrix};
use crate::config::MappingConfig;
use crate::provider::{Clusters, RelationProvider};
use crate::types::{CandidateMapping, Direction, Property};

/// A similarity edge between one base property and one target property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyEdge {
    pub base: Property,
    pub target: Property,
    pub similarity: f32,
}

/// Score of a single direction plus the edges that produced it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionScore {
    pub score: f32,
    pub matched: Vec<PropertyEdge>,
}

/// Score of a whole candidate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub total: f32,
    pub directions: [DirectionScore; 2],
}

/// Cluster id of every property on one side of the bipartite graph.
///
/// Properties the provider left out of its clustering get a cluster of
/// their own.
#[derive(Debug, Clone)]
struct ClusterIndex {
    of_property: Vec<usize>,
    count: usize,
}

impl ClusterIndex {
    fn new(properties: &[Property], clusters: &Clusters) -> Self {
        let mut lookup: AHashMap<&str, usize> = AHashMap::new();
        for (id, members) in clusters.iter().enumerate() {
            for member in members {
                lookup.entry(member.as_str()).or_insert(id);
            }
        }

        let mut count = clusters.len();
        let mut orphans: AHashMap<&str, usize> = AHashMap::new();
        let of_property = properties
            .iter()
            .map(|p| match lookup.get(p.as_str()) {
                Some(&id) => id,
                None => *orphans.entry(p.as_str()).or_insert_with(|| {
                    count += 1;
                    count - 1
                }),
            })
            .collect();

        Self { of_property, count }
    }
}

/// Bipartite graph between base clusters and target clusters holding at most
/// one edge, the strongest, per cluster pair.
#[derive(Debug, Clone)]
pub struct ClusterGraph {
    base_clusters: usize,
    target_clusters: usize,
    edges: AHashMap<(usize, usize), PropertyEdge>,
}

impl ClusterGraph {
    /// Reduce the full property graph to the cluster level.
    ///
    /// `edges` must hold one entry per `(base, target)` property pair in
    /// row-major order, as produced by [`property_edges`]. Any other length
    /// yields an empty graph.
    pub fn build(
        base: &[Property],
        target: &[Property],
        edges: Vec<PropertyEdge>,
        base_clusters: &Clusters,
        target_clusters: &Clusters,
    ) -> Self {
        if edges.len() != base.len() * target.len() {
            warn!(
                "Expected {} property edges for {} x {} properties, got {}",
                base.len() * target.len(),
                base.len(),
                target.len(),
                edges.len()
            );
            return Self {
                base_clusters: 0,
                target_clusters: 0,
                edges: AHashMap::new(),
            };
        }

        let base_index = ClusterIndex::new(base, base_clusters);
        let target_index = ClusterIndex::new(target, target_clusters);

        let mut best: AHashMap<(usize, usize), PropertyEdge> = AHashMap::new();
        for (k, edge) in edges.into_iter().enumerate() {
            let (i, j) = (k / target.len(), k % target.len());
            let key = (base_index.of_property[i], target_index.of_property[j]);
            match best.get(&key) {
                Some(current) if current.similarity >= edge.similarity => {}
                _ => {
                    best.insert(key, edge);
                }
            }
        }

        Self {
            base_clusters: base_index.count,
            target_clusters: target_index.count,
            edges: best,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, base_cluster: usize, target_cluster: usize) -> Option<&PropertyEdge> {
        self.edges.get(&(base_cluster, target_cluster))
    }

    /// Maximum-similarity full matching between clusters
    pub fn best_matching(&self) -> Vec<PropertyEdge> {
        let mut costs = CostMatrix::new(self.base_clusters, self.target_clusters);
        for (&(i, j), edge) in &self.edges {
            costs.set(i, j, (1.0 - edge.similarity as f64).max(0.0));
        }

        solve_assignment(&costs)
            .into_iter()
            .filter_map(|(i, j)| self.edges.get(&(i, j)).cloned())
            .collect()
    }
}

/// The complete similarity graph between two property lists, row-major
pub fn property_edges<P: RelationProvider>(
    provider: &P,
    base: &[Property],
    target: &[Property],
) -> Vec<PropertyEdge> {
    let mut edges = Vec::with_capacity(base.len() * target.len());
    for b in base {
        for t in target {
            edges.push(PropertyEdge {
                base: b.clone(),
                target: t.clone(),
                similarity: provider.similarity(b, t),
            });
        }
    }
    edges
}

/// Scores candidates against a [`RelationProvider`]
#[derive(Debug, Clone)]
pub struct PairScorer<P> {
    provider: P,
    config: MappingConfig,
}

impl<P: RelationProvider> PairScorer<P> {
    pub fn new(provider: P, config: MappingConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Score one direction; missing relations on either side score zero
    pub fn score_direction(&self, direction: &Direction) -> DirectionScore {
        let base_props = self.provider.edge_props(&direction.base.0, &direction.base.1);
        let target_props = self
            .provider
            .edge_props(&direction.target.0, &direction.target.1);

        if base_props.is_empty() || target_props.is_empty() {
            trace!(
                "No relation properties for {} ({} base, {} target)",
                direction,
                base_props.len(),
                target_props.len()
            );
            return DirectionScore::default();
        }

        let edges = property_edges(&self.provider, &base_props, &target_props);
        let threshold = self.config.distance_threshold;
        let base_clusters = self.provider.clustering(&base_props, threshold);
        let target_clusters = self.provider.clustering(&target_props, threshold);

        let graph = ClusterGraph::build(
            &base_props,
            &target_props,
            edges,
            &base_clusters,
            &target_clusters,
        );
        let matched = graph.best_matching();
        let sum: f32 = matched.iter().map(|e| e.similarity).sum();
        let score = self.config.round_score(sum);

        trace!(
            "{}: {} clusters x {} clusters, {} cluster edges, {} matched, score {:.3}",
            direction,
            base_clusters.len(),
            target_clusters.len(),
            graph.edge_count(),
            matched.len(),
            score
        );

        DirectionScore { score, matched }
    }

    /// Score both directions of a candidate; the total is never negative
    pub fn score(&self, candidate: &CandidateMapping) -> CandidateScore {
        let forward = self.score_direction(candidate.forward());
        let backward = self.score_direction(candidate.backward());
        CandidateScore {
            total: (forward.score + backward.score).max(0.0),
            directions: [forward, backward],
        }
    }
}
