//! String similarity functions for relation properties
//!
//! All functions return a similarity score in range [0.0, 1.0] where 1.0 means identical.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// How two property strings are compared
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMethod {
    /// Character trigram Jaccard index, tolerant to inflection and typos
    #[default]
    Trigram,
    /// Jaccard index over lowercase word tokens
    Jaccard,
    /// 1 if equal ignoring ASCII case, 0 otherwise
    Exact,
}

impl FromStr for SimilarityMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trigram" => Ok(SimilarityMethod::Trigram),
            "jaccard" => Ok(SimilarityMethod::Jaccard),
            "exact" => Ok(SimilarityMethod::Exact),
            other => Err(format!(
                "unknown similarity method '{other}' (expected trigram, jaccard or exact)"
            )),
        }
    }
}

impl fmt::Display for SimilarityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityMethod::Trigram => write!(f, "trigram"),
            SimilarityMethod::Jaccard => write!(f, "jaccard"),
            SimilarityMethod::Exact => write!(f, "exact"),
        }
    }
}

/// Calculate text similarity between two strings
///
/// # Arguments
/// * `a` - First text value
/// * `b` - Second text value
/// * `method` - The similarity method to use
///
/// # Returns
/// Similarity score in [0.0, 1.0]
pub fn text_similarity(a: &str, b: &str, method: SimilarityMethod) -> f32 {
    match method {
        SimilarityMethod::Trigram => trigram_similarity(a, b),
        SimilarityMethod::Jaccard => jaccard_tokens(a, b),
        SimilarityMethod::Exact => {
            if a.trim().eq_ignore_ascii_case(b.trim()) {
                1.0
            } else {
                0.0
            }
        }
    }
}

/// Calculate Jaccard similarity between token sets
///
/// Tokenizes strings by whitespace and computes Jaccard index
fn jaccard_tokens(a: &str, b: &str) -> f32 {
    let tokens_a: HashSet<String> = a.split_whitespace().map(str::to_lowercase).collect();
    let tokens_b: HashSet<String> = b.split_whitespace().map(str::to_lowercase).collect();

    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 1.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.union(&tokens_b).count();

    if union == 0 {
        0.0
    } else {
        intersection as f32 / union as f32
    }
}

/// Calculate trigram similarity between two strings
///
/// Uses character trigrams for fuzzy text matching
fn trigram_similarity(a: &str, b: &str) -> f32 {
    let trigrams_a = generate_trigrams(&a.trim().to_lowercase());
    let trigrams_b = generate_trigrams(&b.trim().to_lowercase());

    if trigrams_a.is_empty() && trigrams_b.is_empty() {
        return 1.0;
    }

    if trigrams_a.is_empty() || trigrams_b.is_empty() {
        return 0.0;
    }

    let intersection = trigrams_a.intersection(&trigrams_b).count();
    let union = trigrams_a.union(&trigrams_b).count();

    if union == 0 {
        0.0
    } else {
        intersection as f32 / union as f32
    }
}

/// Generate character trigrams from a string
fn generate_trigrams(s: &str) -> HashSet<String> {
    if s.is_empty() {
        return HashSet::new();
    }

    let padded = format!("  {}  ", s);
    let chars: Vec<char> = padded.chars().collect();

    chars.windows(3).map(|w| w.iter().collect::<String>()).collect()
}
