// logtally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.

use serde::Serialize;
use std::collections::HashMap;

// =============================================================================
// Log Record (output of parsing)
// =============================================================================

/// A single parsed log line.
///
/// Built once by the parser and never mutated afterwards. All four fields
/// are non-empty when produced by `parser::parse_line`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// First whitespace-delimited token. Format is not validated.
    pub date: String,

    /// Second token. Format is not validated.
    pub time: String,

    /// Third token, case preserved. Any token is accepted as a level.
    pub level: String,

    /// Remainder of the line with its internal whitespace preserved.
    pub message: String,
}

impl LogRecord {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            level: level.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// Level counts
// =============================================================================

/// Number of records seen per level, keyed by the level string exactly as it
/// appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    counts: HashMap<String, usize>,
}

impl LevelCounts {
    /// Add one occurrence of `level`.
    pub fn record(&mut self, level: &str) {
        *self.counts.entry(level.to_string()).or_insert(0) += 1;
    }

    /// Count for an exact level key, if present.
    pub fn get(&self, level: &str) -> Option<usize> {
        self.counts.get(level).copied()
    }

    /// Number of distinct levels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(level, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(level, count)| (level.as_str(), *count))
    }
}
