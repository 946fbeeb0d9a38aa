//! The listing-enrichment pipeline.
//!
//! Stages, in order:
//! 1. **Load**: both CSV sources into typed tables (`insights-ingest`)
//! 2. **Reconcile**: prefix extraction and fuzzy resolution of listing
//!    postal codes against the canonical set (`insights-match`)
//! 3. **Merge**: inner join on the resolved codes plus the derived
//!    `price_per_sqft` metric
//!
//! [`run_pipeline`] runs the stages once; [`SessionCache`] memoizes runs
//! per source identity and options within a session.

pub mod cache;
pub mod merge;
pub mod pipeline;
pub mod summary;

pub use cache::{CacheKey, CacheStore, InMemoryStore, SessionCache};
pub use merge::{merge_and_enrich, reconcile};
pub use pipeline::{PipelineOutcome, run_pipeline};
pub use summary::{TableSummary, average_attribute, summarize};
