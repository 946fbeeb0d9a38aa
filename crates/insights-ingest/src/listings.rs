//! Listings loading.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use insights_model::{ListingRecord, ListingTable};

use crate::columns::parse_f64;
use crate::error::Result;
use crate::reader::read_raw_table;

/// Required listing columns.
pub const POSTAL_COLUMN: &str = "postal_code";
pub const PRICE_COLUMN: &str = "listing_price";
pub const SQFT_COLUMN: &str = "sq_ft";
pub const ADDRESS_COLUMN: &str = "raw_address";

/// Load the listings source into a typed table.
///
/// Numeric fields parse leniently: an empty or malformed price/area becomes
/// NaN and the row survives. Such rows fall out later, either at the join
/// (no usable postal code) or as a non-finite derived metric the consumer
/// must tolerate. Columns beyond the required four ride along in `extras`.
pub fn load_listings(path: &Path) -> Result<ListingTable> {
    let raw = read_raw_table(path)?;
    let postal_idx = raw.header.require(POSTAL_COLUMN, path)?;
    let price_idx = raw.header.require(PRICE_COLUMN, path)?;
    let sqft_idx = raw.header.require(SQFT_COLUMN, path)?;
    let address_idx = raw.header.require(ADDRESS_COLUMN, path)?;

    let required = [postal_idx, price_idx, sqft_idx, address_idx];
    let mut table = ListingTable::default();
    for row in &raw.rows {
        let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");

        let postal = cell(postal_idx);
        let postal_code = if postal.is_empty() {
            None
        } else {
            Some(postal.to_string())
        };

        let mut extras = BTreeMap::new();
        for (idx, name) in raw.header.names().iter().enumerate() {
            if required.contains(&idx) {
                continue;
            }
            extras.insert(name.clone(), row.get(idx).cloned().unwrap_or_default());
        }

        table.records.push(ListingRecord {
            postal_code,
            listing_price: parse_f64(cell(price_idx)).unwrap_or(f64::NAN),
            sq_ft: parse_f64(cell(sqft_idx)).unwrap_or(f64::NAN),
            raw_address: cell(address_idx).to_string(),
            extras,
            zip_prefix: None,
            matched_zip: None,
        });
    }

    debug!(
        path = %path.display(),
        records = table.records.len(),
        "loaded listings"
    );
    Ok(table)
}
