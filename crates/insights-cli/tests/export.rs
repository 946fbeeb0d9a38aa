use std::collections::BTreeMap;

use tempfile::TempDir;

use insights_cli::export::write_enriched_csv;
use insights_model::{EnrichedListing, EnrichedTable, ZipCode};

fn sample_table() -> EnrichedTable {
    let columns = EnrichedTable::build_columns(
        ["crime_index".to_string(), "school_rating".to_string()],
        ["year_built".to_string()],
    );
    let rows = vec![
        EnrichedListing {
            zip_code: ZipCode::new("32599").unwrap(),
            listing_price: 250000.0,
            sq_ft: 1200.0,
            price_per_sqft: 250000.0 / 1200.0,
            raw_address: "12 Bay St".to_string(),
            attributes: BTreeMap::from([
                ("crime_index".to_string(), "Low".to_string()),
                ("school_rating".to_string(), "8.1".to_string()),
            ]),
            extras: BTreeMap::from([("year_built".to_string(), "1987".to_string())]),
        },
        EnrichedListing {
            zip_code: ZipCode::new("10001").unwrap(),
            listing_price: 100000.0,
            sq_ft: 0.0,
            price_per_sqft: f64::INFINITY,
            raw_address: "9 Flat Rd".to_string(),
            attributes: BTreeMap::new(),
            extras: BTreeMap::new(),
        },
    ];
    EnrichedTable { columns, rows }
}

#[test]
fn export_writes_contract_columns_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("enriched.csv");
    write_enriched_csv(&path, &sample_table()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "zip_code,listing_price,sq_ft,price_per_sqft,raw_address,crime_index,school_rating,year_built"
    );

    let first = lines.next().unwrap();
    assert!(first.starts_with("32599,250000,1200,"));
    assert!(first.contains("12 Bay St"));
    assert!(first.ends_with("Low,8.1,1987"));
}

#[test]
fn export_excludes_working_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("enriched.csv");
    write_enriched_csv(&path, &sample_table()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(!contents.contains("zip_prefix"));
    assert!(!contents.contains("matched_zip"));
}

#[test]
fn export_renders_non_finite_metrics_and_missing_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("enriched.csv");
    write_enriched_csv(&path, &sample_table()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let second = contents.lines().nth(2).unwrap();
    assert!(second.starts_with("10001,100000,0,inf,9 Flat Rd"));
    // Missing pass-through values render as empty cells.
    assert!(second.ends_with(",,,"));
}
