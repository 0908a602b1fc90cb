// logtally - core/counter.rs
//
// Per-level aggregation. Core layer: pure logic, no I/O.

use crate::core::model::{LevelCounts, LogRecord};

/// Count records per exact (case-preserved) level string.
///
/// Records with an empty level are not counted. Parsed records always carry
/// a level; hand-built ones may not.
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut counts = LevelCounts::default();
    for record in records.iter().filter(|r| !r.level.is_empty()) {
        counts.record(&record.level);
    }
    counts
}
