//! Demographics loading and canonical postal-code normalization.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::{debug, warn};

use insights_model::{DemographicRecord, DemographicTable, ZipCode};

use crate::columns::column_stats;
use crate::error::{IngestError, Result};
use crate::reader::read_raw_table;

/// Column holding the canonical postal code.
pub const ZIP_COLUMN: &str = "zip_code";

/// Normalize a raw demographic postal code to its canonical five-digit form.
///
/// Numeric codes shorter than five digits are left-padded with zeros, which
/// restores leading zeros lost to numeric typing upstream. Values that are
/// empty, longer than five digits, or not purely numeric have no canonical
/// form and return `None`.
pub fn normalize_zip(raw: &str) -> Option<ZipCode> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.len() > 5 {
        return None;
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    ZipCode::new(format!("{trimmed:0>5}")).ok()
}

/// Load the demographics source into a typed table.
///
/// Requirements checked here:
/// - the path names a readable CSV file with a header row,
/// - a `zip_code` column is present (case-insensitive),
/// - at least one other column is numeric, when the file has data rows.
///
/// Rows whose postal code has no canonical form are dropped and counted, as
/// are rows duplicating an already-seen canonical code (first row wins), so
/// match targets stay deterministic.
pub fn load_demographics(path: &Path) -> Result<DemographicTable> {
    let raw = read_raw_table(path)?;
    let zip_idx = raw.header.require(ZIP_COLUMN, path)?;

    if !raw.rows.is_empty() {
        let has_numeric_attribute = (0..raw.header.len())
            .filter(|idx| *idx != zip_idx)
            .any(|idx| column_stats(&raw.rows, idx).is_numeric());
        if !has_numeric_attribute {
            return Err(IngestError::NoNumericAttribute {
                path: path.to_path_buf(),
            });
        }
    }

    let mut seen: BTreeSet<ZipCode> = BTreeSet::new();
    let mut table = DemographicTable::default();
    for row in &raw.rows {
        let raw_zip = row.get(zip_idx).map(String::as_str).unwrap_or("");
        let Some(zip_code) = normalize_zip(raw_zip) else {
            warn!(value = %raw_zip, "dropping demographic row with un-normalizable postal code");
            table.invalid_dropped += 1;
            continue;
        };
        if !seen.insert(zip_code.clone()) {
            warn!(zip = %zip_code, "dropping demographic row with duplicate canonical code");
            table.duplicates_dropped += 1;
            continue;
        }

        let mut attributes = BTreeMap::new();
        for (idx, name) in raw.header.names().iter().enumerate() {
            if idx == zip_idx {
                continue;
            }
            attributes.insert(name.clone(), row.get(idx).cloned().unwrap_or_default());
        }
        table.records.push(DemographicRecord {
            zip_code,
            attributes,
        });
    }

    debug!(
        path = %path.display(),
        records = table.records.len(),
        duplicates_dropped = table.duplicates_dropped,
        invalid_dropped = table.invalid_dropped,
        "loaded demographics"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_numeric_codes() {
        assert_eq!(normalize_zip("501").unwrap().as_str(), "00501");
        assert_eq!(normalize_zip("32599").unwrap().as_str(), "32599");
    }

    #[test]
    fn rejects_values_without_canonical_form() {
        assert!(normalize_zip("").is_none());
        assert!(normalize_zip("123456").is_none());
        assert!(normalize_zip("32A99").is_none());
        assert!(normalize_zip("N/A").is_none());
    }
}
