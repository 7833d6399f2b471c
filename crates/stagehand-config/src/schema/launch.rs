//! Process launch settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How spawn requests are turned into processes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LaunchMode {
    /// `dispatch exec [rules] cmd`: the compositor starts the process and
    /// applies placement rules before first paint.
    #[default]
    CompositorExec,
    /// Start the process from this one with `sh -c`.
    Direct,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub mode: LaunchMode,
    /// Open on the target workspace without switching to it.
    pub silent: bool,
    /// Suppress the entry animation.
    pub no_anim: bool,
    /// Strip border, rounding, shadow and blur at creation time.
    pub suppress_decorations: bool,
    /// Terminal binary whose invocations get a default config file.
    pub terminal: String,
    /// Config file injected into terminal commands that do not name one.
    /// Set to an empty string to disable.
    pub terminal_config: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            mode: LaunchMode::CompositorExec,
            silent: true,
            no_anim: true,
            suppress_decorations: true,
            terminal: "ghostty".into(),
            terminal_config: "~/.config/stagehand/ghostty.conf".into(),
        }
    }
}

impl LaunchConfig {
    /// Resolved terminal config path, `~` expanded. `None` when disabled.
    pub fn terminal_config_path(&self) -> Option<PathBuf> {
        if self.terminal_config.trim().is_empty() {
            return None;
        }
        Some(expand_home(&self.terminal_config))
    }
}

pub(crate) fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_mode_serialization() {
        let json = serde_json::to_string(&LaunchMode::CompositorExec).unwrap();
        assert_eq!(json, "\"compositor_exec\"");
        let mode: LaunchMode = serde_json::from_str("\"direct\"").unwrap();
        assert_eq!(mode, LaunchMode::Direct);
    }

    #[test]
    fn empty_terminal_config_disables_injection() {
        let config = LaunchConfig {
            terminal_config: "  ".into(),
            ..LaunchConfig::default()
        };
        assert!(config.terminal_config_path().is_none());
    }

    #[test]
    fn absolute_terminal_config_is_kept() {
        let config = LaunchConfig {
            terminal_config: "/etc/stagehand/ghostty.conf".into(),
            ..LaunchConfig::default()
        };
        assert_eq!(
            config.terminal_config_path(),
            Some(PathBuf::from("/etc/stagehand/ghostty.conf"))
        );
    }

    #[test]
    fn tilde_is_expanded() {
        let path = expand_home("~/games/ghostty.conf");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("games/ghostty.conf"));
        }
    }
}
