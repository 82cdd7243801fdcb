// Candidate generation: every two-entity hypothesis between base and target
use crate::types::{CandidateMapping, Entity};

/// All unordered pairs of `items`, in combination order
/// (`[a, b, c]` gives `(a, b), (a, c), (b, c)`).
pub fn combinations(items: &[Entity]) -> Vec<(Entity, Entity)> {
    let mut pairs = Vec::with_capacity(pair_count(items.len()));
    for (i, first) in items.iter().enumerate() {
        for second in &items[i + 1..] {
            pairs.push((first.clone(), second.clone()));
        }
    }
    pairs
}

/// `C(n, 2)`
#[inline]
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Number of candidates [`generate_candidates`] yields for lists of the given sizes
#[inline]
pub fn candidate_count(base_len: usize, target_len: usize) -> usize {
    pair_count(base_len) * pair_count(target_len) * 2
}

/// Enumerate every candidate mapping between `base` and `target`.
///
/// Base pairs are unordered; target pairs are taken in both orders, all
/// combinations first and then all of them reversed. The result is stable
/// for a given input order and holds `C(n,2) * C(m,2) * 2` candidates.
pub fn generate_candidates(base: &[Entity], target: &[Entity]) -> Vec<CandidateMapping> {
    let base_pairs = combinations(base);
    let mut target_pairs = combinations(target);
    let reversed: Vec<_> = target_pairs
        .iter()
        .map(|(a, b)| (b.clone(), a.clone()))
        .collect();
    target_pairs.extend(reversed);

    let mut candidates = Vec::with_capacity(base_pairs.len() * target_pairs.len());
    for base_pair in &base_pairs {
        for target_pair in &target_pairs {
            candidates.push(CandidateMapping::new(base_pair.clone(), target_pair.clone()));
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entities(names: &[&str]) -> Vec<Entity> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_candidate_count_matches_formula() {
        for n in 0..7 {
            let base: Vec<_> = (0..n).map(|i| format!("b{i}")).collect();
            let target: Vec<_> = (0..n).map(|i| format!("t{i}")).collect();
            let candidates = generate_candidates(&base, &target);
            assert_eq!(candidates.len(), pair_count(n) * pair_count(n) * 2);
            assert_eq!(candidates.len(), candidate_count(n, n));
        }
        assert_eq!(candidate_count(2, 2), 2);
        assert_eq!(candidate_count(3, 3), 18);
        assert_eq!(candidate_count(4, 4), 72);
    }

    #[test]
    fn test_uneven_lists() {
        let base = entities(&["a", "b", "c"]);
        let target = entities(&["x", "y"]);
        assert_eq!(generate_candidates(&base, &target).len(), 6);
    }

    #[test]
    fn test_generation_order() {
        let base = entities(&["a", "b", "c"]);
        let target = entities(&["1", "2", "3"]);
        let candidates = generate_candidates(&base, &target);

        let first_block: Vec<String> = candidates[..6].iter().map(|c| c.to_string()).collect();
        assert_eq!(
            first_block,
            vec![
                "a --> 1, b --> 2",
                "a --> 1, b --> 3",
                "a --> 2, b --> 3",
                "a --> 2, b --> 1",
                "a --> 3, b --> 1",
                "a --> 3, b --> 2",
            ]
        );
        assert_eq!(candidates[6].forward().base, ("a".to_string(), "c".to_string()));
        assert_eq!(candidates[12].forward().base, ("b".to_string(), "c".to_string()));
    }

    #[test]
    fn test_candidates_are_distinct_and_never_self_paired() {
        let base = entities(&["earth", "sun", "gravity", "newton"]);
        let target = entities(&["electrons", "nucleus", "electricity", "faraday"]);
        let candidates = generate_candidates(&base, &target);

        let unique: HashSet<_> = candidates.iter().collect();
        assert_eq!(unique.len(), candidates.len());

        for candidate in &candidates {
            let forward = candidate.forward();
            assert_ne!(forward.base.0, forward.base.1);
            assert_ne!(forward.target.0, forward.target.1);
            assert_eq!(candidate.backward(), &forward.mirrored());
        }
    }

    #[test]
    fn test_generation_is_stable() {
        let base = entities(&["a", "b", "c", "d"]);
        let target = entities(&["w", "x", "y", "z"]);
        assert_eq!(generate_candidates(&base, &target), generate_candidates(&base, &target));
    }
}
