//! Stagehand configuration system.
//!
//! TOML-based configuration with full validation. All sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stagehand_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("target workspace: {}", config.stage.workspace);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    CanvasConfig, CompositorConfig, LaunchConfig, LaunchMode, LoggingConfig, PollingConfig,
    StageConfig, StageSection,
};

use stagehand_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it if absent,
/// and reject it if validation fails.
pub fn load_config() -> Result<StageConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<StageConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let err = load_config_from(Path::new("/tmp/definitely_missing_stagehand.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[polling]\nattempts = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
