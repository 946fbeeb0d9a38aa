//! Session-scoped memoization of pipeline runs.
//!
//! Repeated invocations with the same inputs within a session return the
//! cached outcome instead of recomputing. The key is the resolved identity
//! of both sources (canonical path, length, mtime) plus the match options,
//! so a rewritten file or a changed threshold recomputes. Each session owns
//! its cache value; nothing is shared globally.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use insights_match::{MatchOptions, SimilarityScorer};

use crate::pipeline::{PipelineOutcome, run_pipeline};

/// Resolved identity of one source file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceStamp {
    path: PathBuf,
    len: u64,
    modified: SystemTime,
}

impl SourceStamp {
    /// Stamp a source, or `None` when it cannot be resolved (missing file).
    fn of(path: &Path) -> Option<Self> {
        let canonical = path.canonicalize().ok()?;
        let metadata = std::fs::metadata(&canonical).ok()?;
        let modified = metadata.modified().ok()?;
        Some(Self {
            path: canonical,
            len: metadata.len(),
            modified,
        })
    }
}

/// Cache key for one (sources, options) combination.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CacheKey {
    demographics: SourceStamp,
    listings: SourceStamp,
    /// Threshold as raw bits so the key stays totally ordered.
    threshold_bits: u64,
    scorer: SimilarityScorer,
}

impl CacheKey {
    fn for_run(demo_path: &Path, listings_path: &Path, options: &MatchOptions) -> Option<Self> {
        Some(Self {
            demographics: SourceStamp::of(demo_path)?,
            listings: SourceStamp::of(listings_path)?,
            threshold_bits: options.threshold.to_bits(),
            scorer: options.scorer,
        })
    }
}

/// Backing store for cached outcomes, injectable for testing.
pub trait CacheStore {
    fn get(&self, key: &CacheKey) -> Option<Arc<PipelineOutcome>>;
    fn insert(&mut self, key: CacheKey, outcome: Arc<PipelineOutcome>);
    fn clear(&mut self);
}

/// Default in-memory store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: BTreeMap<CacheKey, Arc<PipelineOutcome>>,
}

impl CacheStore for InMemoryStore {
    fn get(&self, key: &CacheKey) -> Option<Arc<PipelineOutcome>> {
        self.entries.get(key).cloned()
    }

    fn insert(&mut self, key: CacheKey, outcome: Arc<PipelineOutcome>) {
        self.entries.insert(key, outcome);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Per-session pipeline cache.
///
/// Outcomes are immutable after creation and shared as `Arc`, so a cache
/// hit is a pointer clone. Runs whose sources cannot be stamped (missing
/// files) are computed but never cached; a source that appears later is
/// picked up on the next call.
#[derive(Debug, Default)]
pub struct SessionCache<S: CacheStore = InMemoryStore> {
    store: S,
}

impl SessionCache<InMemoryStore> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: CacheStore> SessionCache<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Memoized [`run_pipeline`].
    pub fn get_or_compute(
        &mut self,
        demo_path: &Path,
        listings_path: &Path,
        options: &MatchOptions,
    ) -> Arc<PipelineOutcome> {
        let Some(key) = CacheKey::for_run(demo_path, listings_path, options) else {
            return Arc::new(run_pipeline(demo_path, listings_path, options));
        };
        if let Some(hit) = self.store.get(&key) {
            debug!("pipeline cache hit");
            return hit;
        }
        let outcome = Arc::new(run_pipeline(demo_path, listings_path, options));
        self.store.insert(key, Arc::clone(&outcome));
        outcome
    }

    /// Drop all cached outcomes.
    pub fn clear(&mut self) {
        self.store.clear();
    }
}
