//! CSV reading operations.

use std::io::Cursor;

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader, DataType}};

/// Reads CSV text with a header row into a DataFrame whose columns are all strings.
///
/// Schema inference is switched off so that every cell reaches the caller as
/// written; numeric parsing is left to the caller. Rows with extra fields are
/// truncated to the header width.
pub(crate) fn read_csv_text(csv: &str) -> Result<DataFrame> {
    let options = CsvReadOptions::default()
        .with_has_header(true)
        .map_parse_options(|po| po.with_truncate_ragged_lines(true))
        .with_infer_schema_length(Some(0));

    CsvReader::new(Cursor::new(csv.as_bytes()))
        .with_options(options)
        .finish()
        .context("[io::csv::read] Failed to read CSV from string")
}

/// Check whether the DataFrame carries a column called `name`.
#[inline]
pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Extract a column as owned optional strings, one per row.
/// Empty cells come back as `None`.
pub(crate) fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)
        .with_context(|| format!("[io::csv::read] Missing column {name}"))?
        .cast(&DataType::String)
        .with_context(|| format!("[io::csv::read] Column {name} is not text"))?;

    Ok(column.str()?
        .into_iter()
        .map(|cell| cell.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string))
        .collect())
}

/// Like [`text_column`], but a missing column yields a column of `None`.
pub(crate) fn optional_text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    if has_column(df, name) {
        text_column(df, name)
    } else {
        Ok(vec![None; df.height()])
    }
}
