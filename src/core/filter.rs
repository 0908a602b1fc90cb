// logtally - core/filter.rs
//
// Level selection over parsed records.
// Core layer: pure logic, no I/O.

use crate::core::model::LogRecord;

/// Select the records whose level equals `level`, ignoring case.
///
/// Returns references in the original relative order. No match, or no
/// input, yields an empty Vec.
pub fn filter_by_level<'a>(records: &'a [LogRecord], level: &str) -> Vec<&'a LogRecord> {
    let wanted = level.to_uppercase();
    records
        .iter()
        .filter(|record| record.level.to_uppercase() == wanted)
        .collect()
}
