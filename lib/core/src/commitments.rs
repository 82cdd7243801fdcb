use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Entity;

/// A finalized base -> target correspondence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Correspondence {
    pub base: Entity,
    pub target: Entity,
}

impl fmt::Display for Correspondence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --> {}", self.base, self.target)
    }
}

/// Outcome of [`Commitments::commit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new correspondence was recorded
    Added,
    /// The exact correspondence was already recorded
    AlreadyPresent,
    /// One side is already bound to a different partner; nothing changed
    Conflict,
}

/// Append-only, one-to-one correspondences between base and target entities.
///
/// Lookups work in both directions in O(1) and insertion order is preserved,
/// so `base_entities()[i]` always maps to `target_entities()[i]`.
#[derive(Debug, Clone, Default)]
pub struct Commitments {
    order: Vec<Correspondence>,
    base_to_target: AHashMap<Entity, usize>,
    target_to_base: AHashMap<Entity, usize>,
}

impl Commitments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains_base(&self, base: &str) -> bool {
        self.base_to_target.contains_key(base)
    }

    pub fn contains_target(&self, target: &str) -> bool {
        self.target_to_base.contains_key(target)
    }

    /// The committed image of a base entity
    pub fn target_of(&self, base: &str) -> Option<&str> {
        self.base_to_target
            .get(base)
            .map(|&i| self.order[i].target.as_str())
    }

    /// The committed source of a target entity
    pub fn base_of(&self, target: &str) -> Option<&str> {
        self.target_to_base
            .get(target)
            .map(|&i| self.order[i].base.as_str())
    }

    /// Record `base -> target` unless either side is already taken.
    pub fn commit(&mut self, base: &str, target: &str) -> CommitOutcome {
        match (self.target_of(base), self.base_of(target)) {
            (Some(t), Some(b)) if t == target && b == base => CommitOutcome::AlreadyPresent,
            (None, None) => {
                let index = self.order.len();
                self.order.push(Correspondence {
                    base: base.to_string(),
                    target: target.to_string(),
                });
                self.base_to_target.insert(base.to_string(), index);
                self.target_to_base.insert(target.to_string(), index);
                CommitOutcome::Added
            }
            _ => CommitOutcome::Conflict,
        }
    }

    /// Correspondences in commitment order
    pub fn correspondences(&self) -> &[Correspondence] {
        &self.order
    }

    pub fn base_entities(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|c| c.base.as_str())
    }

    pub fn target_entities(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|c| c.target.as_str())
    }

    pub fn into_correspondences(self) -> Vec<Correspondence> {
        self.order
    }
}
