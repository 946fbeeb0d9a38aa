//! Defensive aggregates over the output table.
//!
//! The derived metric can be non-finite (zero or unparsable area), so every
//! average here excludes non-finite values rather than poisoning the mean.

use insights_model::EnrichedTable;

/// KPI aggregates for one output table.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TableSummary {
    pub total_listings: usize,
    /// `None` when no row has a finite price.
    pub avg_listing_price: Option<f64>,
    /// `None` when no row has a finite metric.
    pub avg_price_per_sqft: Option<f64>,
}

/// Compute the standard aggregates.
pub fn summarize(table: &EnrichedTable) -> TableSummary {
    TableSummary {
        total_listings: table.len(),
        avg_listing_price: mean_finite(table.rows.iter().map(|r| r.listing_price)),
        avg_price_per_sqft: mean_finite(table.rows.iter().map(|r| r.price_per_sqft)),
    }
}

/// Average of a named numeric demographic attribute across the table
/// (e.g. `school_rating`). Non-numeric values are skipped; `None` when
/// nothing numeric is present.
pub fn average_attribute(table: &EnrichedTable, attribute: &str) -> Option<f64> {
    mean_finite(
        table
            .rows
            .iter()
            .filter_map(|r| r.attributes.get(attribute))
            .filter_map(|v| v.trim().parse::<f64>().ok()),
    )
}

fn mean_finite(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values.filter(|v| v.is_finite()) {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use insights_model::{EnrichedListing, ZipCode};

    use super::*;

    fn row(price: f64, sq_ft: f64, school: Option<&str>) -> EnrichedListing {
        let mut attributes = BTreeMap::new();
        if let Some(school) = school {
            attributes.insert("school_rating".to_string(), school.to_string());
        }
        EnrichedListing {
            zip_code: ZipCode::new("32599").unwrap(),
            listing_price: price,
            sq_ft,
            price_per_sqft: price / sq_ft,
            raw_address: "12 Bay St".to_string(),
            attributes,
            extras: BTreeMap::new(),
        }
    }

    #[test]
    fn averages_exclude_non_finite_metrics() {
        let table = EnrichedTable {
            columns: Vec::new(),
            rows: vec![
                row(100000.0, 1000.0, None),
                // Division by zero: infinite metric must not poison the mean.
                row(200000.0, 0.0, None),
            ],
        };
        let summary = summarize(&table);
        assert_eq!(summary.total_listings, 2);
        assert_eq!(summary.avg_listing_price, Some(150000.0));
        assert_eq!(summary.avg_price_per_sqft, Some(100.0));
    }

    #[test]
    fn empty_table_has_no_averages() {
        let summary = summarize(&EnrichedTable::default());
        assert_eq!(summary.total_listings, 0);
        assert_eq!(summary.avg_listing_price, None);
        assert_eq!(summary.avg_price_per_sqft, None);
    }

    #[test]
    fn attribute_average_skips_non_numeric_values() {
        let table = EnrichedTable {
            columns: Vec::new(),
            rows: vec![
                row(1.0, 1.0, Some("8.0")),
                row(1.0, 1.0, Some("6.0")),
                row(1.0, 1.0, Some("n/a")),
                row(1.0, 1.0, None),
            ],
        };
        assert_eq!(average_attribute(&table, "school_rating"), Some(7.0));
        assert_eq!(average_attribute(&table, "crime_index"), None);
    }
}
