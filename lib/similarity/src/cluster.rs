//! Agglomerative threshold clustering of property strings
//!
//! Starts from singleton clusters and repeatedly merges the two closest
//! clusters until the closest pair is at least `distance_threshold` apart.
//! Distance between two properties is `1 - similarity`.

use analogy_core::{Clusters, Property};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How the distance between two clusters is derived from member distances
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Linkage {
    /// Mean of all pairwise member distances
    #[default]
    Average,
    /// Closest pair of members
    Single,
    /// Farthest pair of members
    Complete,
}

impl FromStr for Linkage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "average" => Ok(Linkage::Average),
            "single" => Ok(Linkage::Single),
            "complete" => Ok(Linkage::Complete),
            other => Err(format!(
                "unknown linkage '{other}' (expected average, single or complete)"
            )),
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Linkage::Average => write!(f, "average"),
            Linkage::Single => write!(f, "single"),
            Linkage::Complete => write!(f, "complete"),
        }
    }
}

/// Cluster `properties` at `distance_threshold`.
///
/// Duplicate strings are collapsed first. Clusters come back ordered by the
/// first appearance of any of their members in `properties`.
pub fn agglomerative<F>(
    properties: &[Property],
    distance_threshold: f32,
    linkage: Linkage,
    similarity: F,
) -> Clusters
where
    F: Fn(&str, &str) -> f32,
{
    let mut unique: Vec<&Property> = Vec::with_capacity(properties.len());
    for p in properties {
        if !unique.contains(&p) {
            unique.push(p);
        }
    }
    let n = unique.len();
    if n == 0 {
        return Vec::new();
    }

    let mut distance = vec![0.0f32; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = 1.0 - similarity(unique[i], unique[j]);
            distance[i * n + j] = d;
            distance[j * n + i] = d;
        }
    }

    let mut groups: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
    while groups.len() > 1 {
        let mut closest: Option<(usize, usize, f32)> = None;
        for a in 0..groups.len() {
            for b in (a + 1)..groups.len() {
                let d = cluster_distance(&groups[a], &groups[b], &distance, n, linkage);
                if closest.map_or(true, |(_, _, best)| d < best) {
                    closest = Some((a, b, d));
                }
            }
        }

        match closest {
            Some((a, b, d)) if d < distance_threshold => {
                let merged = groups.remove(b);
                groups[a].extend(merged);
            }
            _ => break,
        }
    }

    groups
        .into_iter()
        .map(|members| members.into_iter().map(|i| unique[i].clone()).collect::<BTreeSet<_>>())
        .collect()
}

fn cluster_distance(a: &[usize], b: &[usize], distance: &[f32], n: usize, linkage: Linkage) -> f32 {
    let pairs = a.iter().flat_map(|&i| b.iter().map(move |&j| distance[i * n + j]));
    match linkage {
        Linkage::Average => {
            let (sum, count) = pairs.fold((0.0f32, 0usize), |(s, c), d| (s + d, c + 1));
            sum / count as f32
        }
        Linkage::Single => pairs.fold(f32::INFINITY, f32::min),
        Linkage::Complete => pairs.fold(f32::NEG_INFINITY, f32::max),
    }
}
