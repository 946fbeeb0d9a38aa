//! The load → reconcile → merge pipeline.
//!
//! One run is a single synchronous unit of work producing an immutable
//! [`PipelineOutcome`]. Unusable sources degrade to an empty output table
//! with warnings instead of an error, so a presentation layer can render a
//! notice rather than crash. Memoization of repeated runs lives in
//! [`crate::cache::SessionCache`].

use std::path::Path;

use tracing::{info, info_span, warn};

use insights_ingest::{load_demographics, load_listings};
use insights_match::{MatchOptions, ZipResolver};
use insights_model::{EnrichedTable, PipelineWarning, ReconcileStats};

use crate::merge::{merge_and_enrich, reconcile};

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct PipelineOutcome {
    /// The denormalized output table; empty when a source was unusable.
    pub table: EnrichedTable,
    /// Data-quality counters for the run.
    pub stats: ReconcileStats,
    /// Recoverable conditions for the consumer to surface.
    pub warnings: Vec<PipelineWarning>,
}

/// Run the full pipeline once.
///
/// Loader failures on either source are demoted to warnings and yield an
/// empty table; reconciliation and the join cannot fail.
pub fn run_pipeline(
    demo_path: &Path,
    listings_path: &Path,
    options: &MatchOptions,
) -> PipelineOutcome {
    let span = info_span!(
        "pipeline",
        demographics = %demo_path.display(),
        listings = %listings_path.display(),
        scorer = %options.scorer,
        threshold = options.threshold,
    );
    let _guard = span.enter();

    let demographics = load_demographics(demo_path);
    let listings = load_listings(listings_path);

    let mut warnings = Vec::new();
    if let Err(error) = &demographics {
        warn!(error = %error, "demographics source unusable");
        warnings.push(PipelineWarning::DemographicsUnavailable {
            path: demo_path.to_path_buf(),
            reason: error.to_string(),
        });
    }
    if let Err(error) = &listings {
        warn!(error = %error, "listings source unusable");
        warnings.push(PipelineWarning::ListingsUnavailable {
            path: listings_path.to_path_buf(),
            reason: error.to_string(),
        });
    }
    let (Ok(demographics), Ok(mut listings)) = (demographics, listings) else {
        return PipelineOutcome {
            table: EnrichedTable::default(),
            stats: ReconcileStats::default(),
            warnings,
        };
    };

    let resolver = ZipResolver::from_table(&demographics, options.clone());
    let mut stats = reconcile(&mut listings, &resolver);
    stats.demo_duplicates_dropped = demographics.duplicates_dropped;
    stats.demo_invalid_dropped = demographics.invalid_dropped;

    let table = merge_and_enrich(&listings, &demographics);
    info!(
        rows = table.len(),
        matched = stats.matched,
        dropped = stats.listings_dropped(),
        "pipeline complete"
    );

    PipelineOutcome {
        table,
        stats,
        warnings,
    }
}
