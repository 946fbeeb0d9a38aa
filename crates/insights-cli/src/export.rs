//! CSV export of the enriched output table.

use std::path::Path;

use anyhow::{Context, Result};

use insights_model::EnrichedTable;

/// Write the table to `path` with exactly its column list, in order.
pub fn write_enriched_csv(path: &Path, table: &EnrichedTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create export file {}", path.display()))?;
    writer
        .write_record(&table.columns)
        .context("write header row")?;
    for row in &table.rows {
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| row.display_value(column))
            .collect();
        writer.write_record(&record).context("write data row")?;
    }
    writer.flush().context("flush export file")?;
    Ok(())
}
