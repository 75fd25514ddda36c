//! One statement in, two CSV tables out.

use std::path::Path;

use monarch_core::{Result, StatementError, StatementExtraction};
use monarch_ingest::{ExtractOptions, PageTextSource, StatementParser};
use serde::Serialize;
use tracing::info;

use crate::csv_out::{OutputPaths, write_table};
use crate::report::{ActivityTotals, activity_table, summary_table};

/// Result of a completed extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    pub paths: OutputPaths,
    pub transaction_count: usize,
    pub totals: ActivityTotals,
}

/// Read `input` through `source`, parse it with `parser`, and write
/// `<stem>.summary.csv` / `<stem>.activity.csv` beside it.
pub fn extract_statement_csvs(
    input: &Path,
    parser: &dyn StatementParser,
    source: &dyn PageTextSource,
    options: &ExtractOptions,
) -> Result<ExtractionReport> {
    if !input.exists() {
        return Err(StatementError::MissingInput(input.to_path_buf()));
    }

    let pages = source.read_pages(input)?;
    info!(
        backend = source.backend_name(),
        parser = parser.name(),
        pages = pages.len(),
        "read statement {}",
        input.display()
    );

    let extraction = parser.extract(&pages, options)?;
    write_extraction(input, &extraction)
}

/// Assemble both tables in memory and write them next to `input`.
pub fn write_extraction(input: &Path, extraction: &StatementExtraction) -> Result<ExtractionReport> {
    let paths = OutputPaths::for_input(input)?;
    let totals = ActivityTotals::from_transactions(&extraction.transactions);

    let summary = summary_table(&extraction.summary);
    let activity = activity_table(&extraction.transactions, &totals);

    write_table(&paths.summary, &summary)?;
    write_table(&paths.activity, &activity)?;
    info!(
        summary = %paths.summary.display(),
        activity = %paths.activity.display(),
        "wrote statement tables"
    );

    Ok(ExtractionReport {
        paths,
        transaction_count: extraction.transactions.len(),
        totals,
    })
}
