// logtally - app/loader.rs
//
// Loads a log file from disk into an ordered list of records.
// Every I/O failure is classified into a LoadError; malformed lines are
// dropped by the parser and never surface here.

use crate::core::model::LogRecord;
use crate::core::parser;
use crate::platform::fs;
use crate::util::error::LoadError;
use std::path::Path;

/// Read and parse the whole file at `path`.
///
/// Returns the valid records in file order, possibly none. The file is fully
/// read before returning; the handle is released on every exit path.
pub fn load_records(path: &Path) -> Result<Vec<LogRecord>, LoadError> {
    let classify = |e| LoadError::from_io(path.to_path_buf(), e);

    let reader = fs::open_log(path).map_err(classify)?;
    let result = parser::parse_reader(reader).map_err(classify)?;

    tracing::debug!(
        path = %path.display(),
        lines = result.lines_read,
        records = result.records.len(),
        skipped = result.lines_skipped,
        "Log file parsed"
    );

    Ok(result.records)
}
