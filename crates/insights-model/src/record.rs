#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use crate::ZipCode;

/// One neighborhood demographics row.
///
/// All non-key source columns ride along in `attributes`, keyed by the
/// source header. School rating and crime index are ordinary attributes,
/// not dedicated fields, so new demographic columns pass through untouched.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DemographicRecord {
    pub zip_code: ZipCode,
    pub attributes: BTreeMap<String, String>,
}

/// Loaded demographics with load-time data-quality counts.
///
/// Canonical codes are unique within `records`: the loader keeps the first
/// row per code and counts the rest in `duplicates_dropped`.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct DemographicTable {
    pub records: Vec<DemographicRecord>,
    /// Rows dropped because an earlier row claimed the same canonical code.
    pub duplicates_dropped: usize,
    /// Rows dropped because the postal code could not be normalized to
    /// five digits.
    pub invalid_dropped: usize,
}

impl DemographicTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct attribute columns across all records, sorted.
    pub fn attribute_columns(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .flat_map(|r| r.attributes.keys().cloned())
            .collect()
    }

    pub fn zip_codes(&self) -> impl Iterator<Item = &ZipCode> {
        self.records.iter().map(|r| &r.zip_code)
    }
}

/// One raw property listing row.
///
/// `zip_prefix` and `matched_zip` are working fields filled in by the
/// reconciler; they never appear in the output table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListingRecord {
    /// Raw postal code as it appeared in the source; `None` for an empty cell.
    pub postal_code: Option<String>,
    /// Listing price; NaN when the source value did not parse.
    pub listing_price: f64,
    /// Floor area; NaN when the source value did not parse.
    pub sq_ft: f64,
    pub raw_address: String,
    /// Pass-through columns beyond the required four.
    pub extras: BTreeMap<String, String>,
    /// First maximal digit run of `postal_code`, if any.
    pub zip_prefix: Option<String>,
    /// Canonical code the prefix resolved to, if the match was accepted.
    pub matched_zip: Option<ZipCode>,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ListingTable {
    pub records: Vec<ListingRecord>,
}

impl ListingTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct extra (pass-through) columns across all records, sorted.
    pub fn extra_columns(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .flat_map(|r| r.extras.keys().cloned())
            .collect()
    }
}
