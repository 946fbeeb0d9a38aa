//! Postal-code reconciliation.
//!
//! Bridges the two identifier spaces the pipeline joins across: canonical
//! five-digit demographic codes on one side, free-form listing postal codes
//! on the other. An exact-key join would silently drop most rows, so the
//! reconciler extracts the usable digit prefix from each listing value and
//! resolves it to the best-scoring canonical code by partial string
//! similarity, subject to an acceptance threshold.

pub mod prefix;
pub mod resolver;
pub mod scorer;

pub use prefix::extract_zip_prefix;
pub use resolver::{DEFAULT_THRESHOLD, MatchOptions, ZipMatch, ZipResolver};
pub use scorer::SimilarityScorer;
