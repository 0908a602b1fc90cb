// logtally - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logtally";

/// Application identifier used for the config directory.
pub const APP_ID: &str = "logtally";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed when the log file argument is missing.
pub const USAGE_LINES: &[&str] = &[
    "Usage: logtally <log_file_path> [level_filter]",
    "Example: logtally app.log",
    "Example: logtally app.log error",
];

// =============================================================================
// Report layout
// =============================================================================

/// Levels shown first in the counts table, in this order.
/// Any other level follows in ascending lexicographic order.
pub const KNOWN_LEVELS: &[&str] = &["INFO", "DEBUG", "ERROR", "WARNING"];

/// Default width of the level column in the counts table.
pub const DEFAULT_LEVEL_COLUMN_WIDTH: usize = 17;

/// Minimum configurable level column width.
pub const MIN_LEVEL_COLUMN_WIDTH: usize = 4;

/// Maximum configurable level column width.
pub const MAX_LEVEL_COLUMN_WIDTH: usize = 64;

/// Header of the level column.
pub const LEVEL_COLUMN_TITLE: &str = "Level";

/// Header of the count column.
pub const COUNT_COLUMN_TITLE: &str = "Count";

/// Width of the count column separator rule.
pub const COUNT_COLUMN_RULE_WIDTH: usize = 10;

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept at `warn` so diagnostics never crowd the report.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log levels accepted in the `[logging] level` config key.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum length of a log line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
