//! Full configuration validation.
//!
//! Each check pushes a message; the orchestrator collects them into a
//! single `ConfigError`.

mod helpers;


use crate::schema::StageConfig;
use helpers::{validate_non_empty, validate_range, validate_range_u64};
use stagehand_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &StageConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.stage.workspace < 1 {
        errors.push(format!(
            "stage.workspace = {} must be a positive workspace id",
            config.stage.workspace
        ));
    }

    validate_range_u64(
        &mut errors,
        "compositor.timeout_ms",
        config.compositor.timeout_ms,
        100,
        60_000,
    );
    validate_range(&mut errors, "polling.attempts", config.polling.attempts, 1, 1000);
    validate_range_u64(
        &mut errors,
        "polling.interval_ms",
        config.polling.interval_ms,
        10,
        5000,
    );

    validate_non_empty(&mut errors, "canvas.viewer", &config.canvas.viewer);
    validate_non_empty(&mut errors, "canvas.viewer_class", &config.canvas.viewer_class);
    validate_range(
        &mut errors,
        "canvas.fallback_width",
        config.canvas.fallback_width,
        1,
        16384,
    );
    validate_range(
        &mut errors,
        "canvas.fallback_height",
        config.canvas.fallback_height,
        1,
        16384,
    );

    validate_non_empty(&mut errors, "logging.level", &config.logging.level);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
