//! Window orchestration: spawn external programs, correlate them with the
//! windows the compositor reports, and pin their geometry atomically.
//!
//! [`Stage`] is the entry point. It owns one transport, one registry of
//! foreground windows and one background canvas; independent stages do
//! not share state.

pub mod canvas;
pub mod controller;
pub mod coordinator;
pub mod enforcer;
pub mod launch;
pub mod matcher;
pub mod pacing;
pub mod registry;
pub mod request;

#[cfg(test)]
mod testing;

pub use canvas::{BackgroundCanvas, CanvasSource, CanvasState};
pub use controller::Stage;
pub use coordinator::{SpawnCoordinator, SpawnReport};
pub use matcher::{AnyFieldContains, ClassContains, Matcher, TitleContains, TitleExact, TitleRegex};
pub use pacing::{Pacer, ThreadPacer};
pub use registry::{TrackedWindow, WindowRegistry};
pub use request::SpawnRequest;
pub use stagehand_ipc::WindowHandle;
