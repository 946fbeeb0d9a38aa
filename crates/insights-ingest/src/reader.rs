//! Raw CSV reading shared by both loaders.

use std::path::Path;

use crate::error::{IngestError, Result};
use crate::header::HeaderIndex;

/// A delimited file read into memory: resolved header plus trimmed cells.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub header: HeaderIndex,
    pub rows: Vec<Vec<String>>,
}

/// Read a header-first CSV file into a [`RawTable`].
///
/// Cells are trimmed, rows that are entirely empty are skipped, and short
/// rows are padded out to the header width so column indexing stays safe.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Err(IngestError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if !metadata.is_file() {
        return Err(IngestError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;

    let header = HeaderIndex::new(reader.headers().map_err(|source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    })?);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let mut row: Vec<String> = Vec::with_capacity(header.len());
        for idx in 0..header.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(row);
    }

    Ok(RawTable { header, rows })
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
