//! Error types for data ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a tabular source.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file missing or not a regular file.
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the file as CSV.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Required column not present in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Demographics source carries no numeric attribute column.
    #[error("no numeric demographic attribute column in {path}")]
    NoNumericAttribute { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
