// logtally - app/analysis.rs
//
// One analysis run: load, aggregate, report.
// Nothing is written to `out` unless loading succeeded with at least one
// valid record.

use crate::app::loader;
use crate::core::counter::count_by_level;
use crate::core::report;
use crate::platform::config::OutputFormat;
use crate::util::error::{AppError, ReportError, Result};
use std::io::Write;
use std::path::PathBuf;

/// Everything a run needs, resolved from CLI arguments and config.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Log file to analyse.
    pub path: PathBuf,
    /// Level whose records are listed after the counts, if any.
    pub level: Option<String>,
    /// Report format.
    pub format: OutputFormat,
    /// Width of the level column in the text counts table.
    pub level_column_width: usize,
}

/// Analyse the log file and write the report to `out`.
pub fn run<W: Write>(options: &RunOptions, out: &mut W) -> Result<()> {
    let records = loader::load_records(&options.path)?;
    if records.is_empty() {
        return Err(AppError::EmptyLog {
            path: options.path.clone(),
        });
    }

    let counts = count_by_level(&records);
    tracing::info!(
        records = records.len(),
        levels = counts.len(),
        "Log file analysed"
    );

    // An empty filter argument requests no listing.
    let level = options.level.as_deref().filter(|l| !l.is_empty());

    match options.format {
        OutputFormat::Text => {
            report::write_counts(out, &counts, options.level_column_width)?;
            if let Some(level) = level {
                report::write_details(out, &records, level)?;
            }
        }
        OutputFormat::Json => report::write_json(out, &counts, &records, level)?,
    }

    out.flush().map_err(ReportError::from)?;
    Ok(())
}
