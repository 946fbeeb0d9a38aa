//! Command implementations.

use anyhow::{Context, Result};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use tracing::info;

use insights_core::run_pipeline;
use insights_ingest::load_demographics;
use insights_match::{MatchOptions, ZipResolver, extract_zip_prefix};

use insights_cli::export::write_enriched_csv;

use crate::cli::{ResolveArgs, RunArgs, ScorerArg};
use crate::summary::{align_column, apply_table_style, header_cell, print_run_summary};

fn match_options(threshold: f64, scorer: ScorerArg) -> MatchOptions {
    MatchOptions::new()
        .with_threshold(threshold)
        .with_scorer(scorer.into())
}

pub fn run(args: &RunArgs) -> Result<()> {
    let options = match_options(args.threshold, args.scorer);
    let outcome = run_pipeline(&args.demographics, &args.listings, &options);
    print_run_summary(&outcome);

    if let Some(path) = &args.export {
        write_enriched_csv(path, &outcome.table)
            .with_context(|| format!("export table to {}", path.display()))?;
        info!(rows = outcome.table.len(), path = %path.display(), "exported enriched table");
        println!("Exported {} rows to {}", outcome.table.len(), path.display());
    }

    Ok(())
}

pub fn resolve(args: &ResolveArgs) -> Result<()> {
    let options = match_options(args.threshold, args.scorer);
    let demographics = load_demographics(&args.demographics).context("load demographics")?;
    let resolver = ZipResolver::from_table(&demographics, options);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Query"),
        header_cell("Prefix"),
        header_cell("Best candidate"),
        header_cell("Score"),
        header_cell("Accepted"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    for query in &args.queries {
        let prefix = extract_zip_prefix(query);
        let row = match &prefix {
            None => vec![
                Cell::new(query),
                Cell::new("-").add_attribute(Attribute::Dim),
                Cell::new("-").add_attribute(Attribute::Dim),
                Cell::new("-").add_attribute(Attribute::Dim),
                rejected_cell(),
            ],
            Some(prefix) => match resolver.best(prefix) {
                None => vec![
                    Cell::new(query),
                    Cell::new(prefix),
                    Cell::new("-").add_attribute(Attribute::Dim),
                    Cell::new("-").add_attribute(Attribute::Dim),
                    rejected_cell(),
                ],
                Some(best) => {
                    let accepted = best.score >= resolver.options().threshold;
                    vec![
                        Cell::new(query),
                        Cell::new(prefix),
                        Cell::new(best.zip.as_str()),
                        Cell::new(format!("{:.1}", best.score)),
                        if accepted {
                            accepted_cell()
                        } else {
                            rejected_cell()
                        },
                    ]
                }
            },
        };
        table.add_row(row);
    }

    println!("{table}");
    Ok(())
}

fn accepted_cell() -> Cell {
    Cell::new("✓")
        .fg(Color::Green)
        .add_attribute(Attribute::Bold)
}

fn rejected_cell() -> Cell {
    Cell::new("✗").fg(Color::Red)
}
