use std::path::{Path, PathBuf};

pub mod reader;
pub mod table;

pub use table::{MeasurementTable, parse_table};

use reader::open_maybe_gz;

pub const VC_ISSUANCE_DURATION: &str = "vc_issuance_duration";
pub const VC_VERIFICATION_DURATION: &str = "vc_verification_duration";
pub const VC_JWT_LENGTH: &str = "vc_jwt_length";
pub const VP_JWT_LENGTH: &str = "vp_jwt_length";

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("{path}: {msg}")]
    Parse { path: PathBuf, msg: String },
    #[error("{path}: row {row}, column {column}: invalid number {value:?}")]
    InvalidNumber {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
    },
    #[error("{path}: missing column {column}")]
    MissingColumn { path: PathBuf, column: String },
}

impl InputError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Per-bucket presentation table name, e.g. `20_vp_jwt_length`.
pub fn bucket_table(bucket: u32, metric: &str) -> String {
    format!("{}_{}", bucket, metric)
}

pub fn resolve_table_path(csv_dir: &Path, name: &str) -> Result<PathBuf, InputError> {
    let candidates = [format!("{}.csv", name), format!("{}.csv.gz", name)];
    for file in &candidates {
        let path = csv_dir.join(file);
        if path.exists() {
            return Ok(path);
        }
    }
    Err(InputError::MissingInput(format!(
        "{}/{}.csv(.gz)",
        csv_dir.display(),
        name
    )))
}

pub fn load_table(csv_dir: &Path, name: &str) -> Result<MeasurementTable, InputError> {
    let path = resolve_table_path(csv_dir, name)?;
    let reader = open_maybe_gz(&path)?;
    let table = parse_table(reader, &path)?;
    tracing::debug!(
        table = name,
        path = %path.display(),
        columns = ?table.columns,
        rows = table.n_rows(),
        "loaded measurement table"
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
