//! Stage, compositor connection, polling and logging settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which workspace the engine owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StageSection {
    /// Workspace id every spawned window is confined to.
    pub workspace: i32,
}

impl Default for StageSection {
    fn default() -> Self {
        Self { workspace: 2 }
    }
}

/// Control socket settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositorConfig {
    /// Explicit socket path. When unset the path is derived from
    /// `HYPRLAND_INSTANCE_SIGNATURE`.
    pub socket_path: Option<String>,
    /// Read/write timeout per request.
    pub timeout_ms: u64,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            socket_path: None,
            timeout_ms: 2000,
        }
    }
}

impl CompositorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Correlation retry budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    pub attempts: u32,
    pub interval_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            attempts: 50,
            interval_ms: 100,
        }
    }
}

impl PollingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Upper bound on time spent sleeping inside one correlation.
    pub fn budget(&self) -> Duration {
        self.interval() * self.attempts
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber` filter directive.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "stagehand=info".into(),
        }
    }
}
