use std::io::Read;
use std::path::{Path, PathBuf};

use crate::input::InputError;

/// One benchmark CSV: a header of scheme names and one numeric row per
/// index value.
#[derive(Debug, Clone)]
pub struct MeasurementTable {
    pub path: PathBuf,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl MeasurementTable {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name.trim()))
    }

    pub fn column(&self, name: &str) -> Result<Vec<f64>, InputError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| InputError::MissingColumn {
                path: self.path.clone(),
                column: name.to_string(),
            })?;
        Ok(self.rows.iter().map(|row| row[idx]).collect())
    }
}

pub fn parse_table<R: Read>(reader: R, path: &Path) -> Result<MeasurementTable, InputError> {
    let parse_err = |msg: String| InputError::Parse {
        path: path.to_path_buf(),
        msg,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = rdr
        .headers()
        .map_err(|e| parse_err(e.to_string()))?
        .iter()
        .map(|s| s.to_string())
        .collect();
    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(parse_err("table header is empty".to_string()));
    }

    let mut rows = Vec::new();
    for (row_idx, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| parse_err(e.to_string()))?;
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(columns.len());
        for (col_idx, field) in record.iter().enumerate() {
            let value = field
                .parse::<f64>()
                .map_err(|_| InputError::InvalidNumber {
                    path: path.to_path_buf(),
                    row: row_idx + 1,
                    column: columns[col_idx].clone(),
                    value: field.to_string(),
                })?;
            row.push(value);
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(parse_err("table has no data rows".to_string()));
    }

    Ok(MeasurementTable {
        path: path.to_path_buf(),
        columns,
        rows,
    })
}
