//! CSV loading. The header row must carry the exact, case-sensitive column
//! names of the job feed; a missing column is a load error, a missing cell
//! is just an empty string.

use std::io::Read;
use std::path::Path;

use crate::errors::AppError;
use crate::models::job::JobRecord;

/// Columns the feed must provide, by exact header name.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "JobTitle",
    "Company",
    "Location",
    "EmploymentType",
    "SalaryRange",
    "PostedDate",
];

/// Reads the dataset from a CSV file on disk.
pub fn load_from_path(path: &Path) -> Result<Vec<JobRecord>, AppError> {
    let file = std::fs::File::open(path)
        .map_err(|e| AppError::Dataset(format!("cannot open {}: {e}", path.display())))?;
    read_records(file)
}

/// Reads the dataset from an in-memory CSV payload (multipart upload).
pub fn load_from_bytes(bytes: &[u8]) -> Result<Vec<JobRecord>, AppError> {
    read_records(bytes)
}

fn read_records<R: Read>(reader: R) -> Result<Vec<JobRecord>, AppError> {
    let mut csv = csv::Reader::from_reader(reader);

    let headers = csv
        .headers()
        .map_err(|e| AppError::Dataset(format!("invalid CSV header: {e}")))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::Dataset(format!(
                "missing required column '{column}'"
            )));
        }
    }

    let mut records = Vec::new();
    for (i, row) in csv.deserialize::<JobRecord>().enumerate() {
        let record = row.map_err(|e| {
            // +2: one for the header row, one for 1-based line numbers.
            AppError::Dataset(format!("malformed CSV row {}: {e}", i + 2))
        })?;
        records.push(record);
    }
    Ok(records)
}
