use std::io::{self, Write};

use thiserror::Error;

use crate::format::ExportFormat;
use crate::row::{Labels, Row};
use crate::table::render_table;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Header row in `labels`, then one record per row. Amounts are written as
/// plain decimals with two fraction digits so spreadsheets read them as numbers.
pub fn write_csv<W: Write>(rows: &[Row], labels: Labels, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(labels.headers())?;
    for row in rows {
        wtr.write_record([
            row.date.clone(),
            row.description.clone(),
            format!("{:.2}", row.credit),
            format!("{:.2}", row.debit),
            format!("{:.2}", row.balance),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Pretty-printed array of rows; keys are always the field names.
pub fn write_json<W: Write>(rows: &[Row], mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.write_all(b"\n")?;
    Ok(())
}

pub fn write_report<W: Write>(
    rows: &[Row],
    labels: Labels,
    format: ExportFormat,
    mut writer: W,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => write_csv(rows, labels, writer),
        ExportFormat::Json => write_json(rows, writer),
        ExportFormat::Table => {
            writer.write_all(render_table(rows, labels).as_bytes())?;
            Ok(())
        }
    }
}
