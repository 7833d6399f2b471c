mod cli;
mod commands;
mod grid;
mod manifest;

use std::process::ExitCode;

use stagehand_common::ConfigError;
use stagehand_config::StageConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "stagehand=info";

/// `--log-level` wins, then `RUST_LOG`, then the config file.
fn init_logging(cli_level: Option<&str>, config_level: &str) {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level),
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(config_level)),
    };
    let filter = filter.unwrap_or_else(|e| {
        eprintln!("invalid log directive ({e}), falling back to {DEFAULT_LOG_DIRECTIVE}");
        EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// An explicit `--config` must load cleanly, since its workspace scopes
/// destructive commands. Only the implicit default path falls back.
fn settle_config(
    explicit: bool,
    loaded: Result<StageConfig, ConfigError>,
) -> Result<StageConfig, ConfigError> {
    match loaded {
        Ok(config) => Ok(config),
        Err(e) if explicit => Err(e),
        Err(e) => {
            tracing::warn!("config load failed, using defaults: {e}");
            Ok(StageConfig::default())
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    let loaded = match &args.config {
        Some(path) => stagehand_config::load_config_from(path),
        None => stagehand_config::load_config(),
    };
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level.as_str())
        .unwrap_or(DEFAULT_LOG_DIRECTIVE)
        .to_string();
    init_logging(args.log_level.as_deref(), &config_level);

    tracing::info!("stagehand v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!("using config override: {}", path.display());
    }
    let mut config = match settle_config(args.config.is_some(), loaded) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("stagehand: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(workspace) = args.workspace {
        config.stage.workspace = workspace;
    }
    tracing::info!("target workspace {}", config.stage.workspace);

    match commands::run(args.command, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("stagehand: {e}");
            ExitCode::FAILURE
        }
    }
}
