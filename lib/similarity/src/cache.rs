//! Memoizing wrapper around any [`RelationProvider`].
//!
//! The mapper asks the same questions every iteration: the same entity pairs,
//! the same property lists, the same property pairs. `CachedProvider` answers
//! each of them from the wrapped provider once.

use ahash::AHashMap;
use analogy_core::{Clusters, Property, RelationProvider};
use parking_lot::RwLock;
use tracing::trace;

type PairKey = (String, String);

/// Number of memoized answers per query kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub similarities: usize,
    pub edge_props: usize,
    pub clusterings: usize,
}

/// Memoizes `similarity`, `edge_props` and `clustering` of `P`.
///
/// Similarity is keyed without regard to argument order, so the wrapped
/// provider must be symmetric.
#[derive(Debug, Default)]
pub struct CachedProvider<P> {
    inner: P,
    similarities: RwLock<AHashMap<PairKey, f32>>,
    edge_props: RwLock<AHashMap<PairKey, Vec<Property>>>,
    clusterings: RwLock<AHashMap<(Vec<Property>, u32), Clusters>>,
}

impl<P: RelationProvider> CachedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            similarities: RwLock::new(AHashMap::new()),
            edge_props: RwLock::new(AHashMap::new()),
            clusterings: RwLock::new(AHashMap::new()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn into_inner(self) -> P {
        self.inner
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            similarities: self.similarities.read().len(),
            edge_props: self.edge_props.read().len(),
            clusterings: self.clusterings.read().len(),
        }
    }

    pub fn clear(&self) {
        self.similarities.write().clear();
        self.edge_props.write().clear();
        self.clusterings.write().clear();
    }
}

fn unordered_key(a: &str, b: &str) -> PairKey {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl<P: RelationProvider> RelationProvider for CachedProvider<P> {
    fn similarity(&self, a: &str, b: &str) -> f32 {
        let key = unordered_key(a, b);
        if let Some(&score) = self.similarities.read().get(&key) {
            return score;
        }
        let score = self.inner.similarity(a, b);
        self.similarities.write().insert(key, score);
        score
    }

    fn edge_props(&self, from: &str, to: &str) -> Vec<Property> {
        let key = (from.to_string(), to.to_string());
        if let Some(props) = self.edge_props.read().get(&key) {
            return props.clone();
        }
        let props = self.inner.edge_props(from, to);
        self.edge_props.write().insert(key, props.clone());
        props
    }

    fn clustering(&self, properties: &[Property], distance_threshold: f32) -> Clusters {
        let key = (properties.to_vec(), distance_threshold.to_bits());
        if let Some(clusters) = self.clusterings.read().get(&key) {
            return clusters.clone();
        }
        trace!("Clustering {} properties", properties.len());
        let clusters = self.inner.clustering(properties, distance_threshold);
        self.clusterings.write().insert(key, clusters.clone());
        clusters
    }
}
