#![deny(unsafe_code)]

/// Data-quality counters for one pipeline run.
///
/// `matched + no_prefix + below_threshold` always equals `listings_total`,
/// so the counts explain exactly which listings the inner join dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReconcileStats {
    /// Listings read from the source.
    pub listings_total: usize,
    /// Listings whose raw postal code contained no digit run.
    pub no_prefix: usize,
    /// Listings whose prefix scored below the acceptance threshold against
    /// every canonical code (including the empty-candidate case).
    pub below_threshold: usize,
    /// Listings that resolved to a canonical code and joined.
    pub matched: usize,
    /// Distinct prefixes the resolver actually scored.
    pub distinct_prefixes: usize,
    /// Demographic rows dropped for duplicating an earlier canonical code.
    pub demo_duplicates_dropped: usize,
    /// Demographic rows dropped for an un-normalizable postal code.
    pub demo_invalid_dropped: usize,
}

impl ReconcileStats {
    /// Listings excluded from the output table.
    pub fn listings_dropped(&self) -> usize {
        self.no_prefix + self.below_threshold
    }
}
