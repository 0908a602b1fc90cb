// logtally - core/report.rs
//
// Text and JSON rendering of level counts and level detail listings.
// Core layer: writes to any Write implementation, never to stdout directly.

use crate::core::filter::filter_by_level;
use crate::core::model::{LevelCounts, LogRecord};
use crate::util::constants;
use crate::util::error::ReportError;
use serde::Serialize;
use std::io::Write;

/// Order in which levels are listed.
///
/// Known levels come first, in `KNOWN_LEVELS` order. A known slot takes
/// every key whose upper-cased form equals it, so `INFO` and `info` are
/// listed together. All remaining keys follow in ascending order.
pub fn display_order(counts: &LevelCounts) -> Vec<(&str, usize)> {
    let mut sorted: Vec<(&str, usize)> = counts.iter().collect();
    sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut ordered = Vec::with_capacity(sorted.len());
    for known in constants::KNOWN_LEVELS {
        ordered.extend(
            sorted
                .iter()
                .filter(|(level, _)| level.to_uppercase() == *known)
                .copied(),
        );
    }
    ordered.extend(sorted.iter().filter(|(level, _)| !is_known(level)).copied());
    ordered
}

fn is_known(level: &str) -> bool {
    let upper = level.to_uppercase();
    constants::KNOWN_LEVELS.iter().any(|known| upper == *known)
}

/// Write the two-column counts table.
///
/// The level column is left-aligned and padded to `level_width`.
pub fn write_counts<W: Write>(
    out: &mut W,
    counts: &LevelCounts,
    level_width: usize,
) -> Result<(), ReportError> {
    writeln!(out)?;
    writeln!(
        out,
        "{:<level_width$}| {}",
        constants::LEVEL_COLUMN_TITLE,
        constants::COUNT_COLUMN_TITLE
    )?;
    writeln!(
        out,
        "{}|{}",
        "-".repeat(level_width),
        "-".repeat(constants::COUNT_COLUMN_RULE_WIDTH)
    )?;

    for (level, count) in display_order(counts) {
        writeln!(out, "{level:<level_width$}| {count}")?;
    }
    Ok(())
}

/// Write the detail listing for `level`.
///
/// Prints a not-found notice when no record matches; that is not an error.
pub fn write_details<W: Write>(
    out: &mut W,
    records: &[LogRecord],
    level: &str,
) -> Result<(), ReportError> {
    let matching = filter_by_level(records, level);
    let label = level.to_uppercase();

    writeln!(out)?;
    if matching.is_empty() {
        writeln!(out, "No entries found for level '{label}'.")?;
        return Ok(());
    }

    writeln!(out, "Log details for level '{label}':")?;
    for record in matching {
        writeln!(out, "{} {} - {}", record.date, record.time, record.message)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    counts: Vec<JsonCount<'a>>,
    details: Option<JsonDetails<'a>>,
}

#[derive(Serialize)]
struct JsonCount<'a> {
    level: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct JsonDetails<'a> {
    level: String,
    records: Vec<&'a LogRecord>,
}

/// Write counts and, when `level` is given, its detail listing as one
/// pretty-printed JSON document.
pub fn write_json<W: Write>(
    out: &mut W,
    counts: &LevelCounts,
    records: &[LogRecord],
    level: Option<&str>,
) -> Result<(), ReportError> {
    let report = JsonReport {
        counts: display_order(counts)
            .into_iter()
            .map(|(level, count)| JsonCount { level, count })
            .collect(),
        details: level.map(|level| JsonDetails {
            level: level.to_uppercase(),
            records: filter_by_level(records, level),
        }),
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
