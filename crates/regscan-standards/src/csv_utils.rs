//! Shared CSV utilities for loading registry exports.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use encoding_rs::EUC_KR;
use tracing::debug;

use crate::error::{Result, StandardsError};

/// One CSV record keyed by trimmed header.
pub type CsvRow = BTreeMap<String, String>;

/// Parsed CSV file: header names in file order plus row maps.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

impl CsvTable {
    /// Fail unless `column` is one of the headers.
    pub fn require_column(&self, path: &Path, column: &str) -> Result<()> {
        if self.headers.iter().any(|header| header == column) {
            Ok(())
        } else {
            Err(StandardsError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            })
        }
    }
}

/// Decode registry export bytes.
///
/// Valid UTF-8 is used as-is; anything else is decoded as EUC-KR (CP949),
/// with undecodable sequences replaced by U+FFFD.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (text, _, had_errors) = EUC_KR.decode(bytes);
            if had_errors {
                debug!("replaced undecodable bytes while reading EUC-KR text");
            }
            text
        }
    }
}

/// Read a CSV file into a table of row maps.
///
/// Handles BOM characters and trims whitespace from headers and values.
pub fn read_csv_rows(path: &Path) -> Result<CsvTable> {
    if !path.exists() {
        return Err(StandardsError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    let text = decode_text(&bytes);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, &e))?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| StandardsError::csv(path, &e))?;
        let mut row = CsvRow::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers.get(idx).map_or("", String::as_str);
            row.insert(key.to_string(), value.trim().to_string());
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

/// Get a field value from a row, returning empty string if not present.
pub fn get_field(row: &CsvRow, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}
