pub mod enriched;
pub mod error;
pub mod record;
pub mod stats;
pub mod warning;
pub mod zip;

pub use enriched::{EnrichedListing, EnrichedTable, FIXED_COLUMNS};
pub use error::{ModelError, Result};
pub use record::{DemographicRecord, DemographicTable, ListingRecord, ListingTable};
pub use stats::ReconcileStats;
pub use warning::PipelineWarning;
pub use zip::ZipCode;

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn demographic_table_collects_attribute_columns() {
        let mut a = BTreeMap::new();
        a.insert("school_rating".to_string(), "8".to_string());
        let mut b = BTreeMap::new();
        b.insert("crime_index".to_string(), "Low".to_string());
        let table = DemographicTable {
            records: vec![
                DemographicRecord {
                    zip_code: ZipCode::new("32599").unwrap(),
                    attributes: a,
                },
                DemographicRecord {
                    zip_code: ZipCode::new("10001").unwrap(),
                    attributes: b,
                },
            ],
            duplicates_dropped: 0,
            invalid_dropped: 0,
        };
        let columns: Vec<String> = table.attribute_columns().into_iter().collect();
        assert_eq!(columns, vec!["crime_index", "school_rating"]);
    }

    #[test]
    fn stats_serialize_round_trip() {
        let stats = ReconcileStats {
            listings_total: 10,
            no_prefix: 2,
            below_threshold: 1,
            matched: 7,
            distinct_prefixes: 5,
            demo_duplicates_dropped: 1,
            demo_invalid_dropped: 0,
        };
        let json = serde_json::to_string(&stats).expect("serialize stats");
        let round: ReconcileStats = serde_json::from_str(&json).expect("deserialize stats");
        assert_eq!(round, stats);
        assert_eq!(round.listings_dropped(), 3);
    }
}
