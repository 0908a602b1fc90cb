// logtally - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every file-level failure is terminal; malformed lines are not errors
// and never reach this module.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Top-level error type for a logtally run.
#[derive(Debug)]
pub enum AppError {
    /// The log file argument was not supplied.
    Usage,

    /// The log file could not be loaded.
    Load(LoadError),

    /// The log file was read but held no valid records.
    EmptyLog { path: PathBuf },

    /// The report could not be written.
    Report(ReportError),
}

impl AppError {
    /// Process exit status for this error. Every failure maps to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => f.write_str(&super::constants::USAGE_LINES.join("\n")),
            Self::Load(e) => write!(f, "{e}"),
            Self::EmptyLog { path } => write!(
                f,
                "Log file '{}' is empty or contains no valid entries",
                path.display()
            ),
            Self::Report(e) => write!(f, "Report error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Report(e) => Some(e),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors raised while opening or reading a log file.
#[derive(Debug)]
pub enum LoadError {
    /// The path does not exist.
    NotFound { path: PathBuf },

    /// The path exists but the caller may not read it.
    PermissionDenied { path: PathBuf, source: io::Error },

    /// Any other I/O failure, including non-UTF-8 content.
    Read { path: PathBuf, source: io::Error },
}

impl LoadError {
    /// Classify an I/O error raised for `path`.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Read { path, source },
        }
    }

    /// The path the failure relates to.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::PermissionDenied { path, .. } | Self::Read { path, .. } => {
                path
            }
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "File '{}' not found", path.display())
            }
            Self::PermissionDenied { path, .. } => {
                write!(f, "Permission denied reading '{}'", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "Failed to read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PermissionDenied { source, .. } => Some(source),
            Self::Read { source, .. } => Some(source),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Report errors
// ---------------------------------------------------------------------------

/// Errors raised while writing the report.
#[derive(Debug)]
pub enum ReportError {
    /// Writing to the output stream failed.
    Io(io::Error),

    /// JSON serialisation failed.
    Json(serde_json::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(source) => write!(f, "failed to write output: {source}"),
            Self::Json(source) => write!(f, "failed to serialise JSON: {source}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(source) => Some(source),
            Self::Json(source) => Some(source),
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<ReportError> for AppError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}

/// Convenience type alias for logtally results.
pub type Result<T> = std::result::Result<T, AppError>;
