// logtally - platform/config.rs
//
// Config directory resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// One pretty-printed JSON document.
    Json,
}

impl OutputFormat {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Default location of `config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    match ProjectDirs::from("", "", constants::APP_ID) {
        Some(dirs) => {
            let path = dirs.config_dir().join(constants::CONFIG_FILE_NAME);
            tracing::debug!(path = %path.display(), "Config path resolved");
            Some(path)
        }
        None => {
            tracing::debug!("Could not determine platform config directory");
            None
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are ignored so newer config files keep working.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[report]` section.
    pub report: ReportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[report]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// "text" or "json".
    pub format: Option<String>,
    /// Width of the level column in the counts table.
    pub level_column_width: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from `config.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Report format used when `--format` is not given.
    pub format: OutputFormat,
    /// Width of the level column in the counts table.
    pub level_column_width: usize,
    /// Logging level string (applied before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            level_column_width: constants::DEFAULT_LEVEL_COLUMN_WIDTH,
            log_level: None,
        }
    }
}

/// Load and validate the config file at `path`.
///
/// Returns the validated config and a list of non-fatal warnings. A missing
/// file yields defaults with no warnings. An unreadable or unparseable file,
/// or any out-of-range value, yields defaults for the affected settings and
/// a warning naming the problem.
pub fn load_config(path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(format!(
                "Could not read config file '{}': {e}. Using defaults.",
                path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    let config = validate(raw, &mut warnings);
    (config, warnings)
}

/// Validate each field against named constants, accumulating all problems.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Report: format --
    if let Some(ref name) = raw.report.format {
        match OutputFormat::from_name(name) {
            Some(format) => config.format = format,
            None => warnings.push(format!(
                "[report] format = \"{name}\" is not recognised. \
                 Expected \"text\" or \"json\". Using default (text).",
            )),
        }
    }

    // -- Report: level_column_width --
    if let Some(width) = raw.report.level_column_width {
        if (constants::MIN_LEVEL_COLUMN_WIDTH..=constants::MAX_LEVEL_COLUMN_WIDTH).contains(&width)
        {
            config.level_column_width = width;
        } else {
            warnings.push(format!(
                "[report] level_column_width = {width} is out of range ({}-{}). Using default ({}).",
                constants::MIN_LEVEL_COLUMN_WIDTH,
                constants::MAX_LEVEL_COLUMN_WIDTH,
                constants::DEFAULT_LEVEL_COLUMN_WIDTH,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_gives_defaults_silently() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("nope.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config_is_applied() {
        let (_dir, path) = write_config(
            r#"
[report]
format = "JSON"
level_column_width = 10

[logging]
level = "Debug"
"#,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.level_column_width, 10);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_fall_back_with_warnings() {
        let (_dir, path) = write_config(
            r#"
[report]
format = "xml"
level_column_width = 1000

[logging]
level = "loud"
"#,
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("xml"));
        assert!(warnings[1].contains("level_column_width"));
        assert!(warnings[2].contains("loud"));
    }

    #[test]
    fn test_unparseable_file_warns() {
        let (_dir, path) = write_config("[report\nformat = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Failed to parse"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (_dir, path) = write_config("[future]\nshiny = true\n");
        let (_, warnings) = load_config(&path);
        assert!(warnings.is_empty());
    }
}
