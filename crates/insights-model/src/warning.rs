#![deny(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

/// A recoverable condition surfaced to the presentation layer.
///
/// Warnings accompany an empty output table instead of failing the run, so
/// a consumer can render them rather than crash.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum PipelineWarning {
    #[error("demographics source unusable ({path}): {reason}")]
    DemographicsUnavailable { path: PathBuf, reason: String },
    #[error("listings source unusable ({path}): {reason}")]
    ListingsUnavailable { path: PathBuf, reason: String },
}
