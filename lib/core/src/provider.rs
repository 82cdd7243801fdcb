//! Similarity and clustering collaborator consumed by the scorer.

use std::collections::BTreeSet;

use crate::types::Property;

/// Clusters of near-duplicate properties; the index is the cluster id
pub type Clusters = Vec<BTreeSet<Property>>;

/// Source of relation properties, property similarity and property clustering.
///
/// The mapping search treats implementations as pure functions: the same
/// query is expected to give the same answer for the duration of a run.
pub trait RelationProvider {
    /// Semantic closeness of two properties, roughly in `[-1, 1]`
    fn similarity(&self, a: &str, b: &str) -> f32;

    /// Properties describing the relation `from : to`; empty when none is known
    fn edge_props(&self, from: &str, to: &str) -> Vec<Property>;

    /// Group `properties` so that members of one cluster lie within
    /// `distance_threshold` of each other
    fn clustering(&self, properties: &[Property], distance_threshold: f32) -> Clusters;
}

impl<P: RelationProvider + ?Sized> RelationProvider for &P {
    fn similarity(&self, a: &str, b: &str) -> f32 {
        (**self).similarity(a, b)
    }

    fn edge_props(&self, from: &str, to: &str) -> Vec<Property> {
        (**self).edge_props(from, to)
    }

    fn clustering(&self, properties: &[Property], distance_threshold: f32) -> Clusters {
        (**self).clustering(properties, distance_threshold)
    }
}

impl<P: RelationProvider + ?Sized> RelationProvider for Box<P> {
    fn similarity(&self, a: &str, b: &str) -> f32 {
        (**self).similarity(a, b)
    }

    fn edge_props(&self, from: &str, to: &str) -> Vec<Property> {
        (**self).edge_props(from, to)
    }

    fn clustering(&self, properties: &[Property], distance_threshold: f32) -> Clusters {
        (**self).clustering(properties, distance_threshold)
    }
}
