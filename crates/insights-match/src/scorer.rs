//! String-similarity scorers on a common 0-100 scale.

use rapidfuzz::distance::jaro_winkler;
use rapidfuzz::fuzz;
use serde::{Deserialize, Serialize};

/// Similarity function used to compare a prefix against canonical codes.
///
/// The default is partial-ratio: a short prefix that aligns with a
/// contiguous window of a longer code scores highly regardless of the
/// length difference (`"325"` vs `"32599"` scores 100), which is what
/// truncated postal codes need. Plain ratio and Jaro-Winkler are available
/// for callers that want whole-string comparison instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum SimilarityScorer {
    #[default]
    PartialRatio,
    Ratio,
    JaroWinkler,
}

impl SimilarityScorer {
    /// Score two strings; the result is always in `0.0..=100.0`.
    pub fn score(self, query: &str, candidate: &str) -> f64 {
        match self {
            Self::PartialRatio => fuzz::partial_ratio(query.chars(), candidate.chars()),
            Self::Ratio => fuzz::ratio(query.chars(), candidate.chars()),
            Self::JaroWinkler => {
                jaro_winkler::similarity(query.chars(), candidate.chars()) * 100.0
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PartialRatio => "partial-ratio",
            Self::Ratio => "ratio",
            Self::JaroWinkler => "jaro-winkler",
        }
    }
}

impl std::fmt::Display for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ratio_rewards_contained_prefixes() {
        let score = SimilarityScorer::PartialRatio.score("325", "32599");
        assert_eq!(score, 100.0);
    }

    #[test]
    fn ratio_penalizes_length_difference() {
        let score = SimilarityScorer::Ratio.score("325", "32599");
        assert!(score < 80.0, "full ratio should stay low, got {score}");
    }

    #[test]
    fn jaro_winkler_scales_to_hundred() {
        let score = SimilarityScorer::JaroWinkler.score("32599", "32599");
        assert_eq!(score, 100.0);
        let partial = SimilarityScorer::JaroWinkler.score("325", "32599");
        assert!(partial > 80.0 && partial < 100.0);
    }
}
