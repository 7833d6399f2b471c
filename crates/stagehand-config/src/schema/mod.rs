//! Configuration schema types for Stagehand.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod canvas;
mod launch;
mod stage;

pub use canvas::*;
pub use launch::*;
pub use stage::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub stage: StageSection,
    pub compositor: CompositorConfig,
    pub polling: PollingConfig,
    pub launch: LaunchConfig,
    pub canvas: CanvasConfig,
    pub logging: LoggingConfig,
}
