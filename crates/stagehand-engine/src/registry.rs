//! Foreground windows this session has correlated.

use std::collections::HashSet;

use stagehand_common::Geometry;
use stagehand_ipc::WindowHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedWindow {
    pub handle: WindowHandle,
    /// Position of the originating request in its batch.
    pub request_index: usize,
    pub geometry: Geometry,
}

/// At most one entry per handle.
#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: Vec<TrackedWindow>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a window. Returns `false` if the handle is already tracked.
    pub fn insert(&mut self, window: TrackedWindow) -> bool {
        if self.contains(&window.handle) {
            return false;
        }
        self.windows.push(window);
        true
    }

    pub fn contains(&self, handle: &WindowHandle) -> bool {
        self.windows.iter().any(|w| &w.handle == handle)
    }

    pub fn get(&self, handle: &WindowHandle) -> Option<&TrackedWindow> {
        self.windows.iter().find(|w| &w.handle == handle)
    }

    pub fn remove(&mut self, handle: &WindowHandle) -> Option<TrackedWindow> {
        let pos = self.windows.iter().position(|w| &w.handle == handle)?;
        Some(self.windows.remove(pos))
    }

    pub fn handles(&self) -> HashSet<WindowHandle> {
        self.windows.iter().map(|w| w.handle.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedWindow> {
        self.windows.iter()
    }

    pub fn drain(&mut self) -> Vec<TrackedWindow> {
        std::mem::take(&mut self.windows)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
