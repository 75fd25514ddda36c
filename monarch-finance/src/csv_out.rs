//! CSV serialization of the assembled tables.

use std::fs;
use std::path::{Path, PathBuf};

use monarch_core::{Result, StatementError};
use serde::Serialize;

use crate::report::Table;

/// Where the two tables for one statement are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    pub summary: PathBuf,
    pub activity: PathBuf,
}

impl OutputPaths {
    /// `<dir>/<stem>.summary.csv` and `<dir>/<stem>.activity.csv` beside the input.
    pub fn for_input(input: &Path) -> Result<Self> {
        let stem = input
            .file_stem()
            .ok_or_else(|| StatementError::MissingInput(input.to_path_buf()))?
            .to_string_lossy();
        let dir = input.parent().unwrap_or_else(|| Path::new(""));

        Ok(Self {
            summary: dir.join(format!("{stem}.summary.csv")),
            activity: dir.join(format!("{stem}.activity.csv")),
        })
    }
}

fn csv_writer(out: &mut Vec<u8>) -> csv::Writer<&mut Vec<u8>> {
    csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(out)
}

/// Serialize a table to CSV bytes. An empty row is written as a bare line
/// break; the csv writer would quote it as `""`.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut wtr = csv_writer(&mut out);
    wtr.write_record(&table.header)?;

    for row in &table.rows {
        if row.is_empty() {
            wtr.flush()?;
            drop(wtr);
            out.extend_from_slice(b"\r\n");
            wtr = csv_writer(&mut out);
        } else {
            wtr.write_record(row)?;
        }
    }

    wtr.flush()?;
    drop(wtr);
    Ok(out)
}

/// Build the whole file in memory, then replace `path` with it.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let bytes = to_csv_bytes(table)?;
    fs::write(path, bytes)?;
    Ok(())
}
