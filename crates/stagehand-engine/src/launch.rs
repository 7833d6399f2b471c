//! Turning a request into a running process.
//!
//! Launch success is never confirmed: the only evidence a launch worked is
//! a window showing up during correlation.

use std::process::{Child, Command, Stdio};

use stagehand_common::{Geometry, LaunchError};
use stagehand_config::{LaunchConfig, LaunchMode};
use stagehand_ipc::{wire, Dispatch, ExecRule, Hyprctl};
use tracing::{debug, warn};

use crate::request::SpawnRequest;

pub struct Launcher {
    config: LaunchConfig,
    children: Vec<Child>,
}

impl Launcher {
    pub fn new(config: LaunchConfig) -> Self {
        Self {
            config,
            children: Vec::new(),
        }
    }

    pub fn mode(&self) -> LaunchMode {
        self.config.mode
    }

    /// Inject the default terminal config file into terminal invocations
    /// that do not already name one.
    pub fn prepare_command(&self, command: &str) -> String {
        let terminal = self.config.terminal.as_str();
        if terminal.is_empty() || !command.contains(terminal) || command.contains("--config-file") {
            return command.to_string();
        }
        match self.config.terminal_config_path() {
            Some(path) => command.replacen(
                terminal,
                &format!("{terminal} --config-file={}", path.display()),
                1,
            ),
            None => command.to_string(),
        }
    }

    /// Placement rules applied by the compositor at creation time.
    pub fn exec_rules(&self, workspace: i32, geometry: Geometry) -> Vec<ExecRule> {
        let mut rules = vec![
            ExecRule::Workspace {
                id: workspace,
                silent: self.config.silent,
            },
            ExecRule::Float,
        ];
        if self.config.no_anim {
            rules.push(ExecRule::NoAnim);
        }
        rules.push(ExecRule::Size {
            width: geometry.width,
            height: geometry.height,
        });
        rules.push(ExecRule::Move {
            x: geometry.x,
            y: geometry.y,
        });
        if self.config.suppress_decorations {
            rules.extend([
                ExecRule::NoBorder,
                ExecRule::NoRounding,
                ExecRule::NoShadow,
                ExecRule::NoBlur,
            ]);
        }
        rules
    }

    /// Start the process behind `request`.
    ///
    /// Exec launches go out one by one: rule blocks are `;`-separated and
    /// would be split by batch framing.
    pub fn launch(
        &mut self,
        hypr: &Hyprctl,
        workspace: i32,
        request: &SpawnRequest,
    ) -> Result<(), LaunchError> {
        let command = self.prepare_command(&request.command);
        match self.config.mode {
            LaunchMode::CompositorExec => {
                let exec = Dispatch::Exec {
                    rules: self.exec_rules(workspace, request.geometry),
                    command,
                };
                debug!("launching: {exec}");
                let reply = hypr
                    .dispatch(&exec)
                    .map_err(|e| LaunchError::Rejected(e.to_string()))?;
                if !wire::is_ok_reply(&reply) {
                    return Err(LaunchError::Rejected(reply));
                }
                Ok(())
            }
            LaunchMode::Direct => {
                debug!("launching directly: {command}");
                let child = Command::new("sh")
                    .arg("-c")
                    .arg(&command)
                    .stdin(Stdio::null())
                    .spawn()
                    .map_err(|source| LaunchError::Spawn { command, source })?;
                self.children.push(child);
                Ok(())
            }
        }
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Kill and reap every directly launched process.
    pub fn terminate_all(&mut self) {
        for mut child in self.children.drain(..) {
            if let Err(e) = child.kill() {
                debug!("process {} already gone: {e}", child.id());
            }
            if let Err(e) = child.wait() {
                warn!("failed to reap process {}: {e}", child.id());
            }
        }
    }
}
