// Constraint filter: keep only candidates consistent with what is already committed
use crate::commitments::Commitments;
use crate::types::{CandidateMapping, Direction};

/// Whether `candidate` can still be accepted given `commitments`.
///
/// Only the forward direction is inspected; the backward one uses the same
/// four entities.
pub fn is_consistent(candidate: &CandidateMapping, commitments: &Commitments) -> bool {
    let Direction { base, target } = candidate.forward();

    // Nothing new to learn once both ends are bound.
    if commitments.contains_base(&base.0) && commitments.contains_base(&base.1) {
        return false;
    }
    for (b, t) in [(&base.0, &target.0), (&base.1, &target.1)] {
        if let Some(image) = commitments.target_of(b) {
            if image != t {
                return false;
            }
        }
    }

    if commitments.contains_target(&target.0) && commitments.contains_target(&target.1) {
        return false;
    }
    for (b, t) in [(&base.0, &target.0), (&base.1, &target.1)] {
        if let Some(source) = commitments.base_of(t) {
            if source != b {
                return false;
            }
        }
    }

    true
}

/// Drop every candidate that contradicts or duplicates a commitment.
pub fn filter_candidates(
    candidates: Vec<CandidateMapping>,
    commitments: &Commitments,
) -> Vec<CandidateMapping> {
    if commitments.is_empty() {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|c| is_consistent(c, commitments))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::generate_candidates;

    fn candidate(b0: &str, b1: &str, t0: &str, t1: &str) -> CandidateMapping {
        CandidateMapping::new(
            (b0.to_string(), b1.to_string()),
            (t0.to_string(), t1.to_string()),
        )
    }

    fn names(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{prefix}{i}")).collect()
    }

    #[test]
    fn test_empty_commitments_keep_everything() {
        let candidates = generate_candidates(&names("b", 4), &names("t", 4));
        let kept = filter_candidates(candidates.clone(), &Commitments::new());
        assert_eq!(kept, candidates);
    }

    #[test]
    fn test_fully_committed_base_pair_is_dropped() {
        let mut commitments = Commitments::new();
        commitments.commit("a", "x");
        commitments.commit("b", "y");

        assert!(!is_consistent(&candidate("a", "b", "x", "y"), &commitments));
        assert!(!is_consistent(&candidate("a", "b", "y", "x"), &commitments));
    }

    #[test]
    fn test_fully_committed_target_pair_is_dropped() {
        let mut commitments = Commitments::new();
        commitments.commit("a", "x");
        commitments.commit("b", "y");

        assert!(!is_consistent(&candidate("c", "d", "x", "y"), &commitments));
    }

    #[test]
    fn test_contradicting_base_image_is_dropped() {
        let mut commitments = Commitments::new();
        commitments.commit("a", "x");

        assert!(!is_consistent(&candidate("a", "c", "y", "z"), &commitments));
        assert!(!is_consistent(&candidate("c", "a", "z", "y"), &commitments));
        assert!(is_consistent(&candidate("a", "c", "x", "z"), &commitments));
        assert!(is_consistent(&candidate("c", "a", "z", "x"), &commitments));
    }

    #[test]
    fn test_contradicting_target_source_is_dropped() {
        let mut commitments = Commitments::new();
        commitments.commit("a", "x");

        // x is taken by a, so nobody else may map onto it
        assert!(!is_consistent(&candidate("c", "d", "x", "z"), &commitments));
        assert!(!is_consistent(&candidate("c", "d", "z", "x"), &commitments));
        assert!(is_consistent(&candidate("c", "d", "y", "z"), &commitments));
    }

    #[test]
    fn test_three_entity_walkthrough() {
        let base = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let target = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        let mut commitments = Commitments::new();
        commitments.commit("a", "1");
        commitments.commit("b", "2");

        let kept = filter_candidates(generate_candidates(&base, &target), &commitments);
        let rendered: Vec<String> = kept.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec!["a --> 1, c --> 3", "b --> 2, c --> 3"]);
    }

    #[test]
    fn test_filter_is_monotonic() {
        let base = names("b", 5);
        let target = names("t", 5);
        let all = generate_candidates(&base, &target);

        let mut commitments = Commitments::new();
        let mut previous = filter_candidates(all.clone(), &commitments).len();
        for i in [0usize, 3, 1, 4] {
            commitments.commit(&base[i], &target[(i + 2) % 5]);
            let current = filter_candidates(all.clone(), &commitments).len();
            assert!(current <= previous, "{current} > {previous}");
            previous = current;
        }
    }
}
