//! The `Stage` facade: everything a caller needs to put windows on a
//! workspace and take them down again.

use std::collections::HashSet;

use stagehand_common::{Geometry, TransportError};
use stagehand_config::StageConfig;
use stagehand_ipc::{
    resolve_socket_path, Dispatch, Hyprctl, Transport, UnixSocketTransport, WindowHandle,
};
use tracing::{error, info};

use crate::canvas::{BackgroundCanvas, CanvasSource, CanvasState};
use crate::coordinator::{SpawnCoordinator, SpawnReport};
use crate::launch::Launcher;
use crate::matcher::{AnyFieldContains, Matcher};
use crate::pacing::{Pacer, ThreadPacer};
use crate::registry::WindowRegistry;
use crate::request::SpawnRequest;

/// One orchestration session bound to a target workspace.
///
/// All state lives here; independent stages never interfere.
pub struct Stage {
    workspace: i32,
    hypr: Hyprctl,
    pacer: Box<dyn Pacer>,
    coordinator: SpawnCoordinator,
    canvas: BackgroundCanvas,
}

impl Stage {
    /// Connect to the running compositor's control socket.
    pub fn connect(config: StageConfig) -> Result<Self, TransportError> {
        let path = resolve_socket_path(config.compositor.socket_path.as_deref())?;
        info!("using control socket {}", path.display());
        let transport = UnixSocketTransport::new(path, config.compositor.timeout());
        Ok(Self::with_transport(
            config,
            Box::new(transport),
            Box::new(ThreadPacer),
        ))
    }

    pub fn with_transport(
        config: StageConfig,
        transport: Box<dyn Transport>,
        pacer: Box<dyn Pacer>,
    ) -> Self {
        let workspace = config.stage.workspace;
        Self {
            workspace,
            hypr: Hyprctl::new(transport),
            pacer,
            coordinator: SpawnCoordinator::new(
                workspace,
                config.polling,
                Launcher::new(config.launch.clone()),
            ),
            canvas: BackgroundCanvas::new(workspace, config.canvas, config.launch),
        }
    }

    pub fn workspace(&self) -> i32 {
        self.workspace
    }

    pub fn hyprctl(&self) -> &Hyprctl {
        &self.hypr
    }

    pub fn tracked(&self) -> &WindowRegistry {
        self.coordinator.registry()
    }

    pub fn canvas_state(&self) -> &CanvasState {
        self.canvas.state()
    }

    pub fn switch_to_workspace(&self) {
        info!("switching to workspace {}", self.workspace);
        if let Err(e) = self.hypr.dispatch(&Dispatch::Workspace(self.workspace)) {
            error!("workspace switch failed: {e}");
        }
    }

    /// Spawn and place `requests`; the background canvas is never claimed.
    pub fn spawn_batch(&mut self, requests: &[SpawnRequest]) -> SpawnReport {
        let reserved: HashSet<WindowHandle> = self.canvas.handle().cloned().into_iter().collect();
        self.coordinator
            .spawn_batch_excluding(&self.hypr, self.pacer.as_mut(), requests, &reserved)
    }

    /// Spawn one window; match by class if the command sets `--class`.
    pub fn spawn_window(
        &mut self,
        command: &str,
        pattern: &str,
        geometry: Geometry,
    ) -> Option<WindowHandle> {
        let request = SpawnRequest::inferred(command, pattern, geometry);
        self.spawn_batch(std::slice::from_ref(&request))
            .handles
            .remove(&0)
    }

    pub fn set_background(&mut self, source: &CanvasSource) -> Option<WindowHandle> {
        info!("spawning background canvas");
        match self
            .canvas
            .set(&self.hypr, self.pacer.as_mut(), &self.coordinator, source)
        {
            Ok(handle) => handle,
            Err(e) => {
                error!("background canvas failed: {e}");
                None
            }
        }
    }

    /// Close every foreground window in one batch, then the canvas.
    pub fn cleanup(&mut self) {
        info!("stage shutting down");
        self.coordinator.close_all(&self.hypr);
        self.canvas.cleanup(&self.hypr);
    }

    /// Close every window on the target workspace whose title, initial
    /// title or class contains any of `patterns`, whoever opened it, then
    /// tear down the canvas. Returns how many windows were closed.
    pub fn clean_slate<S: AsRef<str>>(&mut self, patterns: &[S]) -> usize {
        let matchers: Vec<AnyFieldContains> = patterns
            .iter()
            .map(|p| p.as_ref())
            .filter(|p| !p.is_empty())
            .map(|p| AnyFieldContains(p.to_string()))
            .collect();
        info!(
            "scanning workspace {} for leftovers matching {:?}",
            self.workspace,
            matchers.iter().map(|m| m.pattern()).collect::<Vec<_>>()
        );

        let doomed: Vec<WindowHandle> = self
            .hypr
            .clients()
            .into_iter()
            .filter(|c| c.on_workspace(self.workspace))
            .filter(|c| matchers.iter().any(|m| m.matches(c)))
            .map(|c| {
                info!("found leftover window {:?} ({})", c.title, c.address);
                c.address
            })
            .collect();

        if !doomed.is_empty() {
            info!("closing {} leftover windows", doomed.len());
            let closes: Vec<_> = doomed.iter().cloned().map(Dispatch::Close).collect();
            self.hypr.apply(&closes, "clean slate");
        }

        let closed: HashSet<WindowHandle> = doomed.into_iter().collect();
        self.coordinator.forget(&closed);
        self.canvas.forget_if_closed(&closed);
        self.canvas.cleanup(&self.hypr);
        closed.len()
    }
}
