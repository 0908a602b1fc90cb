// logtally - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Running the analysis and mapping failures to the exit status

use clap::Parser;
use logtally::app::analysis::{self, RunOptions};
use logtally::platform::config::{self, AppConfig, OutputFormat};
use logtally::util::{self, error::AppError};
use std::path::PathBuf;

/// logtally - count log lines per level and list the lines of one level.
///
/// Each line of the log file is read as `DATE TIME LEVEL MESSAGE...`;
/// lines that do not fit are skipped.
#[derive(Parser, Debug)]
#[command(name = "logtally", version, about)]
struct Cli {
    /// Log file to analyse.
    log_file: Option<PathBuf>,

    /// Level whose entries are listed after the summary (case-insensitive).
    level: Option<String>,

    /// Output format (overrides `[report] format` in config.toml).
    #[arg(short = 'F', long = "format", value_enum)]
    format: Option<OutputFormat>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let Some(path) = cli.log_file else {
        println!("{}", AppError::Usage);
        std::process::exit(AppError::Usage.exit_code());
    };

    let (app_config, config_warnings) = match cli.config.or_else(config::default_config_path) {
        Some(config_path) => config::load_config(&config_path),
        None => (AppConfig::default(), Vec::new()),
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "logtally starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    let options = RunOptions {
        path,
        level: cli.level,
        format: cli.format.unwrap_or(app_config.format),
        level_column_width: app_config.level_column_width,
    };

    let stdout = std::io::stdout();
    if let Err(e) = analysis::run(&options, &mut stdout.lock()) {
        tracing::debug!(error = ?e, "Analysis failed");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
