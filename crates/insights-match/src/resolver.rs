//! Prefix-to-canonical-code resolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use insights_model::{DemographicTable, ZipCode};

use crate::scorer::SimilarityScorer;

/// Default acceptance threshold on the 0-100 score scale.
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Options controlling match acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Minimum acceptable similarity score (0-100 scale).
    pub threshold: f64,
    /// Similarity function selector.
    pub scorer: SimilarityScorer,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            scorer: SimilarityScorer::default(),
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_scorer(mut self, scorer: SimilarityScorer) -> Self {
        self.scorer = scorer;
        self
    }
}

/// An accepted resolution of a prefix to a canonical code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipMatch {
    pub zip: ZipCode,
    pub score: f64,
}

/// Resolves listing prefixes against the distinct canonical code set.
///
/// Candidates are deduplicated and held sorted ascending; that order is the
/// documented tie-break (on equal scores the lower code wins), so
/// resolution is deterministic for a fixed candidate set.
#[derive(Debug, Clone)]
pub struct ZipResolver {
    candidates: Vec<ZipCode>,
    options: MatchOptions,
}

impl ZipResolver {
    pub fn new(candidates: impl IntoIterator<Item = ZipCode>, options: MatchOptions) -> Self {
        let mut candidates: Vec<ZipCode> = candidates.into_iter().collect();
        candidates.sort();
        candidates.dedup();
        Self {
            candidates,
            options,
        }
    }

    pub fn from_table(table: &DemographicTable, options: MatchOptions) -> Self {
        Self::new(table.zip_codes().cloned(), options)
    }

    pub fn candidates(&self) -> &[ZipCode] {
        &self.candidates
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Best-scoring candidate for a prefix, regardless of the threshold.
    ///
    /// `None` only for an empty candidate set. Useful for inspecting why a
    /// prefix was rejected.
    pub fn best(&self, prefix: &str) -> Option<ZipMatch> {
        let mut best: Option<ZipMatch> = None;
        for candidate in &self.candidates {
            let score = self.options.scorer.score(prefix, candidate.as_str());
            // Strictly-greater keeps the earliest candidate on ties.
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(ZipMatch {
                    zip: candidate.clone(),
                    score,
                });
            }
        }
        best
    }

    /// Best-scoring candidate for a prefix, if it clears the threshold.
    ///
    /// An empty candidate set or an under-threshold best score both yield
    /// `None`; neither is an error.
    pub fn resolve(&self, prefix: &str) -> Option<ZipMatch> {
        self.best(prefix)
            .filter(|m| m.score >= self.options.threshold)
    }

    /// Resolve a set of prefixes, scoring each distinct value exactly once.
    pub fn resolve_all<'a>(
        &self,
        prefixes: impl IntoIterator<Item = &'a str>,
    ) -> BTreeMap<String, Option<ZipMatch>> {
        let mut resolved: BTreeMap<String, Option<ZipMatch>> = BTreeMap::new();
        for prefix in prefixes {
            if !resolved.contains_key(prefix) {
                resolved.insert(prefix.to_string(), self.resolve(prefix));
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zip(code: &str) -> ZipCode {
        ZipCode::new(code).unwrap()
    }

    #[test]
    fn resolves_prefix_to_containing_code() {
        let resolver = ZipResolver::new([zip("32599"), zip("10001")], MatchOptions::default());
        let matched = resolver.resolve("325").expect("prefix should match");
        assert_eq!(matched.zip.as_str(), "32599");
        assert!(matched.score >= 80.0);
    }

    #[test]
    fn below_threshold_yields_none() {
        let resolver = ZipResolver::new([zip("10001")], MatchOptions::default());
        assert!(resolver.resolve("999").is_none());
    }

    #[test]
    fn empty_candidate_set_yields_none() {
        let resolver = ZipResolver::new([], MatchOptions::default());
        assert!(resolver.resolve("325").is_none());
    }

    #[test]
    fn ties_keep_the_lower_code() {
        // "1" aligns perfectly inside both candidates under partial-ratio.
        let resolver = ZipResolver::new([zip("11112"), zip("11111")], MatchOptions::default());
        let matched = resolver.resolve("1").expect("tie should still match");
        assert_eq!(matched.zip.as_str(), "11111");
    }

    #[test]
    fn duplicate_candidates_collapse() {
        let resolver = ZipResolver::new(
            [zip("32599"), zip("32599"), zip("10001")],
            MatchOptions::default(),
        );
        assert_eq!(resolver.candidates().len(), 2);
    }

    #[test]
    fn resolution_is_idempotent() {
        let resolver = ZipResolver::new([zip("32599"), zip("10001")], MatchOptions::default());
        let first = resolver.resolve("325");
        let second = resolver.resolve("325");
        assert_eq!(first, second);

        let once = resolver.resolve_all(["325", "999", "325"]);
        let twice = resolver.resolve_all(["325", "999"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn resolve_all_scores_each_distinct_prefix_once() {
        let resolver = ZipResolver::new([zip("32599")], MatchOptions::default());
        let resolved = resolver.resolve_all(["325", "325", "325"]);
        assert_eq!(resolved.len(), 1);
        assert!(resolved.get("325").unwrap().is_some());
    }

    #[test]
    fn threshold_is_configurable() {
        let strict = MatchOptions::new().with_threshold(100.0);
        let resolver = ZipResolver::new([zip("32599")], strict);
        // "326" has no perfect window in "32599".
        assert!(resolver.resolve("326").is_none());
        assert!(resolver.resolve("325").is_some());
    }

    #[test]
    fn full_ratio_scorer_rejects_short_prefixes() {
        let options = MatchOptions::new().with_scorer(SimilarityScorer::Ratio);
        let resolver = ZipResolver::new([zip("32599")], options);
        assert!(resolver.resolve("325").is_none());
    }
}
