// logtally - util/logging.rs
//
// Structured diagnostic logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: always stderr, so stdout carries only the report.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = select_filter(std::env::var("RUST_LOG").ok().as_deref(), debug_flag, config_level);

    // A subscriber may already be installed (e.g. by a test harness).
    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init()
        .is_ok();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        installed,
        "Logging initialised"
    );
}

/// Resolve the filter directive from the available sources.
fn select_filter(env: Option<&str>, debug_flag: bool, config_level: Option<&str>) -> String {
    if let Some(directive) = env.filter(|d| !d.is_empty()) {
        directive.to_string()
    } else if debug_flag {
        "debug".to_string()
    } else if let Some(level) = config_level {
        level.to_string()
    } else {
        super::constants::DEFAULT_LOG_LEVEL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directive_wins() {
        assert_eq!(select_filter(Some("trace"), true, Some("info")), "trace");
    }

    #[test]
    fn test_debug_flag_beats_config() {
        assert_eq!(select_filter(None, true, Some("error")), "debug");
    }

    #[test]
    fn test_config_level_then_default() {
        assert_eq!(select_filter(None, false, Some("info")), "info");
        assert_eq!(select_filter(Some(""), false, None), "warn");
    }
}
