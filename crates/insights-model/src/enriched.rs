#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::ZipCode;

/// Fixed leading columns of the output table, in contract order.
pub const FIXED_COLUMNS: [&str; 5] = [
    "zip_code",
    "listing_price",
    "sq_ft",
    "price_per_sqft",
    "raw_address",
];

/// One row of the denormalized output table: a listing unioned with the
/// demographics of its matched canonical code, plus the derived valuation
/// metric. Immutable after the merge builds it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EnrichedListing {
    pub zip_code: ZipCode,
    pub listing_price: f64,
    pub sq_ft: f64,
    /// `listing_price / sq_ft`; non-finite when `sq_ft` is zero or NaN.
    pub price_per_sqft: f64,
    pub raw_address: String,
    /// Demographic attributes of the matched code.
    pub attributes: BTreeMap<String, String>,
    /// Pass-through listing columns.
    pub extras: BTreeMap<String, String>,
}

impl EnrichedListing {
    /// Value of a named output column, rendered as text.
    ///
    /// Demographic attributes shadow same-named listing extras, matching the
    /// column order in [`EnrichedTable::columns`]. Unknown columns render
    /// empty.
    pub fn display_value(&self, column: &str) -> String {
        match column {
            "zip_code" => self.zip_code.to_string(),
            "listing_price" => format_number(self.listing_price),
            "sq_ft" => format_number(self.sq_ft),
            "price_per_sqft" => format_number(self.price_per_sqft),
            "raw_address" => self.raw_address.clone(),
            other => self
                .attributes
                .get(other)
                .or_else(|| self.extras.get(other))
                .cloned()
                .unwrap_or_default(),
        }
    }
}

fn format_number(value: f64) -> String {
    format!("{value}")
}

/// The single denormalized table handed to consumers: a stable column list
/// (fixed columns, then sorted demographic attributes, then sorted listing
/// extras) and one row per matched listing. The reconciler's working fields
/// are not part of the column list.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct EnrichedTable {
    pub columns: Vec<String>,
    pub rows: Vec<EnrichedListing>,
}

impl EnrichedTable {
    /// Build the column list from the fixed contract columns plus the given
    /// pass-through columns. Duplicates of earlier columns are skipped.
    pub fn build_columns<I, J>(attribute_columns: I, extra_columns: J) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        let mut columns: Vec<String> = FIXED_COLUMNS.iter().map(|c| (*c).to_string()).collect();
        for column in attribute_columns.into_iter().chain(extra_columns) {
            if !columns.iter().any(|c| c == &column) {
                columns.push(column);
            }
        }
        columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
