//! The background canvas: one persistent full-screen window that always
//! renders beneath every other window on the stage.
//!
//! Lifecycle: `Unset -> Spawning -> Matched -> Configured -> Closed`. A
//! spawn that never correlates falls back to `Unset`. Each `set` replaces
//! the previous canvas wholesale.

mod image;

pub use image::write_solid_png;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use stagehand_common::{CanvasError, Color, Geometry, Size};
use stagehand_config::{CanvasConfig, LaunchConfig};
use stagehand_ipc::{Dispatch, Hyprctl, WindowHandle};
use tracing::{info, warn};

use crate::coordinator::SpawnCoordinator;
use crate::launch::Launcher;
use crate::matcher::ClassContains;
use crate::pacing::Pacer;
use crate::request::SpawnRequest;

/// What the canvas shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasSource {
    Image(PathBuf),
    Solid(Color),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CanvasState {
    #[default]
    Unset,
    Spawning,
    Matched(WindowHandle),
    Configured(WindowHandle),
    Closed,
}

impl CanvasState {
    pub fn handle(&self) -> Option<&WindowHandle> {
        match self {
            CanvasState::Matched(h) | CanvasState::Configured(h) => Some(h),
            _ => None,
        }
    }
}

/// Decoration stripping, full-screen placement and stacking for the canvas.
///
/// The window is focused so the fullscreen toggle applies to it, and it is
/// lowered again afterwards because the toggle can raise it.
pub fn canvas_plan(handle: &WindowHandle, size: Size) -> Vec<Dispatch> {
    let [resize, mv] = Dispatch::place(handle, Geometry::fullscreen(size));
    vec![
        Dispatch::NoBorder(handle.clone()),
        Dispatch::NoRounding(handle.clone()),
        resize,
        mv,
        Dispatch::Focus(handle.clone()),
        Dispatch::Lower(handle.clone()),
        Dispatch::MaximizeFocused,
        Dispatch::Lower(handle.clone()),
    ]
}

/// Owns the canvas window and, in direct launch mode, the viewer process.
pub struct BackgroundCanvas {
    config: CanvasConfig,
    workspace: i32,
    state: CanvasState,
    launcher: Launcher,
}

impl BackgroundCanvas {
    pub fn new(workspace: i32, config: CanvasConfig, launch: LaunchConfig) -> Self {
        Self {
            config,
            workspace,
            state: CanvasState::Unset,
            launcher: Launcher::new(launch),
        }
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn handle(&self) -> Option<&WindowHandle> {
        self.state.handle()
    }

    /// Focused monitor's logical size, or the configured fallback.
    pub fn resolve_size(&self, hypr: &Hyprctl) -> Size {
        match hypr.focused_monitor() {
            Ok(monitor) if monitor.width > 0 && monitor.height > 0 => monitor.logical_size(),
            Ok(_) => {
                warn!("focused monitor reports no size, using fallback canvas size");
                self.fallback_size()
            }
            Err(e) => {
                warn!("monitor query failed ({e}), using fallback canvas size");
                self.fallback_size()
            }
        }
    }

    fn fallback_size(&self) -> Size {
        Size::new(self.config.fallback_width, self.config.fallback_height)
    }

    /// Show `source` as the canvas, replacing any current one.
    ///
    /// `coordinator` only supplies the polling policy and the foreground
    /// handles the canvas must not claim. Returns the canvas handle, or
    /// `None` if the viewer window never appeared within the budget.
    pub fn set(
        &mut self,
        hypr: &Hyprctl,
        pacer: &mut dyn Pacer,
        coordinator: &SpawnCoordinator,
        source: &CanvasSource,
    ) -> Result<Option<WindowHandle>, CanvasError> {
        self.cleanup(hypr);

        let size = self.resolve_size(hypr);
        let image = match source {
            CanvasSource::Image(path) => path.clone(),
            CanvasSource::Solid(color) => {
                let path = self.config.generated_image_path();
                write_solid_png(&path, size, *color)?;
                info!("rendered {} canvas {size} to {}", color.to_hex(), path.display());
                path
            }
        };

        if self.config.zero_gaps {
            let gaps = format!("workspace {},gapsin:0,gapsout:0", self.workspace);
            if let Err(e) = hypr.keyword(&gaps) {
                warn!("failed to zero workspace gaps: {e}");
            }
        }

        let request = SpawnRequest::new(
            format!("{} {}", self.config.viewer, shell_quote(&image)),
            ClassContains(self.config.viewer_class.clone()),
            Geometry::fullscreen(size),
        );

        self.state = CanvasState::Spawning;
        if let Err(e) = self.launcher.launch(hypr, self.workspace, &request) {
            warn!("canvas viewer launch failed: {e}");
        }
        let correlation = coordinator.correlate(
            hypr,
            pacer,
            std::slice::from_ref(&request),
            &HashSet::new(),
        );
        let Some(handle) = correlation.handles.get(&0).cloned() else {
            warn!(
                "background canvas ({}) never appeared after {} polls",
                self.config.viewer_class, correlation.polls
            );
            self.state = CanvasState::Unset;
            self.launcher.terminate_all();
            return Ok(None);
        };

        self.state = CanvasState::Matched(handle.clone());
        info!("configuring background canvas {handle}");
        hypr.apply(&canvas_plan(&handle, size), "canvas configuration");
        self.state = CanvasState::Configured(handle.clone());
        Ok(Some(handle))
    }

    /// Close the canvas if one is tracked and reap its viewer. Idempotent.
    pub fn cleanup(&mut self, hypr: &Hyprctl) {
        if let Some(handle) = self.state.handle().cloned() {
            info!("closing background canvas {handle}");
            hypr.apply(&[Dispatch::Close(handle)], "canvas cleanup");
            self.state = CanvasState::Closed;
        }
        self.launcher.terminate_all();
    }

    /// Mark the canvas closed if an external sweep already closed it.
    pub fn forget_if_closed(&mut self, closed: &HashSet<WindowHandle>) {
        if self.state.handle().is_some_and(|h| closed.contains(h)) {
            self.state = CanvasState::Closed;
        }
    }
}

fn shell_quote(path: &Path) -> String {
    format!("'{}'", path.display().to_string().replace('\'', r"'\''"))
}
