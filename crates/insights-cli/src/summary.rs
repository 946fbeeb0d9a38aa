//! Console rendering of pipeline results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use insights_core::{PipelineOutcome, average_attribute, summarize};
use insights_model::ReconcileStats;

/// Conventional school-rating column name; averaged when present.
const SCHOOL_RATING: &str = "school_rating";

pub fn print_run_summary(outcome: &PipelineOutcome) {
    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }
    if outcome.table.is_empty() && !outcome.warnings.is_empty() {
        eprintln!("no output produced; verify both source files are present and readable");
        return;
    }

    print_reconcile_table(&outcome.stats);
    println!();
    print_kpi_table(outcome);
}

fn print_reconcile_table(stats: &ReconcileStats) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Reconciliation"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Listings read"), Cell::new(stats.listings_total)]);
    table.add_row(vec![
        Cell::new("Matched"),
        Cell::new(stats.matched)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("No digit prefix"),
        count_cell(stats.no_prefix),
    ]);
    table.add_row(vec![
        Cell::new("Below threshold"),
        count_cell(stats.below_threshold),
    ]);
    table.add_row(vec![
        Cell::new("Distinct prefixes scored"),
        Cell::new(stats.distinct_prefixes),
    ]);
    table.add_row(vec![
        Cell::new("Demographic duplicates dropped"),
        count_cell(stats.demo_duplicates_dropped),
    ]);
    table.add_row(vec![
        Cell::new("Demographic invalid codes dropped"),
        count_cell(stats.demo_invalid_dropped),
    ]);
    println!("{table}");
}

fn print_kpi_table(outcome: &PipelineOutcome) {
    let summary = summarize(&outcome.table);
    let school_rating = average_attribute(&outcome.table, SCHOOL_RATING);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Matched listings"),
        Cell::new(summary.total_listings),
    ]);
    table.add_row(vec![
        Cell::new("Avg listing price"),
        money_cell(summary.avg_listing_price, 0),
    ]);
    table.add_row(vec![
        Cell::new("Avg price / sqft"),
        money_cell(summary.avg_price_per_sqft, 2),
    ]);
    if let Some(rating) = school_rating {
        table.add_row(vec![
            Cell::new("Avg school rating"),
            Cell::new(format!("{rating:.1}")),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn money_cell(value: Option<f64>, decimals: usize) -> Cell {
    match value {
        Some(value) => Cell::new(format!("${value:.decimals$}")),
        None => dim_cell("-"),
    }
}
