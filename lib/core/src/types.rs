use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque name of a concept in the base or target domain
pub type Entity = String;

/// Text describing the relation that holds between an ordered entity pair
pub type Property = String;

/// One oriented hypothesis: `base.0 -> target.0` and `base.1 -> target.1`,
/// comparing the relation `base.0 : base.1` against `target.0 : target.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub base: (Entity, Entity),
    pub target: (Entity, Entity),
}

impl Direction {
    #[inline]
    #[must_use]
    pub fn new(base: (Entity, Entity), target: (Entity, Entity)) -> Self {
        Self { base, target }
    }

    /// The same hypothesis read from the other end of both relations
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            base: (self.base.1.clone(), self.base.0.clone()),
            target: (self.target.1.clone(), self.target.0.clone()),
        }
    }

    /// The two correspondences this direction proposes, in order
    pub fn correspondences(&self) -> [(&str, &str); 2] {
        [
            (self.base.0.as_str(), self.target.0.as_str()),
            (self.base.1.as_str(), self.target.1.as_str()),
        ]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} : {}) ~ ({} : {})",
            self.base.0, self.base.1, self.target.0, self.target.1
        )
    }
}

/// A hypothesis about two correspondences, checked in both orientations.
///
/// The second direction is always the mirror of the first; the two are built
/// together and never filtered independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateMapping {
    directions: [Direction; 2],
}

impl CandidateMapping {
    #[must_use]
    pub fn new(base: (Entity, Entity), target: (Entity, Entity)) -> Self {
        let forward = Direction::new(base, target);
        let backward = forward.mirrored();
        Self {
            directions: [forward, backward],
        }
    }

    #[inline]
    pub fn forward(&self) -> &Direction {
        &self.directions[0]
    }

    #[inline]
    pub fn backward(&self) -> &Direction {
        &self.directions[1]
    }

    #[inline]
    pub fn directions(&self) -> &[Direction; 2] {
        &self.directions
    }
}

impl fmt::Display for CandidateMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [(b0, t0), (b1, t1)] = self.forward().correspondences();
        write!(f, "{b0} --> {t0}, {b1} --> {t1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> (Entity, Entity) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_candidate_directions_are_mirrors() {
        let candidate = CandidateMapping::new(pair("earth", "sun"), pair("electrons", "nucleus"));

        assert_eq!(candidate.forward().base, pair("earth", "sun"));
        assert_eq!(candidate.forward().target, pair("electrons", "nucleus"));
        assert_eq!(candidate.backward().base, pair("sun", "earth"));
        assert_eq!(candidate.backward().target, pair("nucleus", "electrons"));
        assert_eq!(candidate.backward().mirrored(), *candidate.forward());
    }

    #[test]
    fn test_correspondences_follow_positions() {
        let direction = Direction::new(pair("a", "b"), pair("y", "x"));
        assert_eq!(direction.correspondences(), [("a", "y"), ("b", "x")]);
    }

    #[test]
    fn test_display() {
        let candidate = CandidateMapping::new(pair("a", "b"), pair("x", "y"));
        assert_eq!(candidate.to_string(), "a --> x, b --> y");
        assert_eq!(candidate.backward().to_string(), "(b : a) ~ (y : x)");
    }
}
