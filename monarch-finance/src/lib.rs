//! monarch-finance: statement output assembly, CSV tables, and the extraction pipeline

pub mod csv_out;
pub mod pipeline;
pub mod report;

pub use csv_out::OutputPaths;
pub use pipeline::{ExtractionReport, extract_statement_csvs, write_extraction};
pub use report::{ActivityTotals, Table, activity_table, summary_table};
