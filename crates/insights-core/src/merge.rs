//! Reconciliation assignment and the inner join.

use std::collections::BTreeMap;

use tracing::debug;

use insights_match::{ZipResolver, extract_zip_prefix};
use insights_model::{
    DemographicRecord, DemographicTable, EnrichedListing, EnrichedTable, ListingTable,
    ReconcileStats, ZipCode,
};

/// Fill each listing's `zip_prefix` and `matched_zip` working fields.
///
/// Every distinct prefix is scored once against the resolver's candidate
/// set; per-row work is a map lookup. Returns the listing-side counters
/// (the demographic-side counters come from the loaded table).
pub fn reconcile(listings: &mut ListingTable, resolver: &ZipResolver) -> ReconcileStats {
    for record in &mut listings.records {
        record.zip_prefix = record.postal_code.as_deref().and_then(extract_zip_prefix);
    }

    let resolved = resolver.resolve_all(
        listings
            .records
            .iter()
            .filter_map(|r| r.zip_prefix.as_deref()),
    );

    let mut stats = ReconcileStats {
        listings_total: listings.len(),
        distinct_prefixes: resolved.len(),
        ..ReconcileStats::default()
    };

    for record in &mut listings.records {
        match &record.zip_prefix {
            None => {
                record.matched_zip = None;
                stats.no_prefix += 1;
            }
            Some(prefix) => match resolved.get(prefix.as_str()).and_then(Option::as_ref) {
                Some(matched) => {
                    record.matched_zip = Some(matched.zip.clone());
                    stats.matched += 1;
                }
                None => {
                    record.matched_zip = None;
                    stats.below_threshold += 1;
                }
            },
        }
    }

    debug!(
        distinct_prefixes = stats.distinct_prefixes,
        matched = stats.matched,
        no_prefix = stats.no_prefix,
        below_threshold = stats.below_threshold,
        "reconciled listings"
    );
    stats
}

/// Inner join of reconciled listings against demographics, plus the derived
/// `price_per_sqft` metric.
///
/// Listings with no `matched_zip` are dropped. A zero or NaN area yields a
/// non-finite metric and the row is kept; filtering non-finite values is the
/// consumer's call.
pub fn merge_and_enrich(
    listings: &ListingTable,
    demographics: &DemographicTable,
) -> EnrichedTable {
    let by_zip: BTreeMap<&ZipCode, &DemographicRecord> = demographics
        .records
        .iter()
        .map(|r| (&r.zip_code, r))
        .collect();

    let columns = EnrichedTable::build_columns(
        demographics.attribute_columns(),
        listings.extra_columns(),
    );

    let mut rows = Vec::new();
    for record in &listings.records {
        let Some(zip) = &record.matched_zip else {
            continue;
        };
        let Some(demo) = by_zip.get(zip) else {
            continue;
        };
        rows.push(EnrichedListing {
            zip_code: demo.zip_code.clone(),
            listing_price: record.listing_price,
            sq_ft: record.sq_ft,
            price_per_sqft: record.listing_price / record.sq_ft,
            raw_address: record.raw_address.clone(),
            attributes: demo.attributes.clone(),
            extras: record.extras.clone(),
        });
    }

    EnrichedTable { columns, rows }
}
