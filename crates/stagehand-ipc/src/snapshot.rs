//! Read-only snapshots of compositor state, as returned by JSON queries.

use serde::{Deserialize, Serialize};
use std::fmt;

use stagehand_common::Size;

/// Opaque compositor-assigned window address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(String);

impl WindowHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowHandle {
    fn from(address: &str) -> Self {
        Self(address.to_string())
    }
}

impl From<String> for WindowHandle {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceRef {
    pub id: i32,
    pub name: String,
}

/// One open window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub address: WindowHandle,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub initial_title: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub initial_class: String,
    #[serde(default)]
    pub workspace: WorkspaceRef,
    #[serde(default)]
    pub at: [i32; 2],
    #[serde(default)]
    pub size: [i32; 2],
    #[serde(default)]
    pub floating: bool,
}

impl Client {
    pub fn on_workspace(&self, id: i32) -> bool {
        self.workspace.id == id
    }

    /// Title or initial title contains `pattern`.
    pub fn title_contains(&self, pattern: &str) -> bool {
        self.title.contains(pattern) || self.initial_title.contains(pattern)
    }

    /// Class or initial class contains `pattern`.
    pub fn class_contains(&self, pattern: &str) -> bool {
        self.class.contains(pattern) || self.initial_class.contains(pattern)
    }
}

/// One output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Monitor {
    pub id: i32,
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    pub focused: bool,
}

impl Default for Monitor {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            width: 0,
            height: 0,
            scale: 1.0,
            focused: false,
        }
    }
}

impl Monitor {
    /// Size in layout pixels: physical size floor-divided by the scale.
    pub fn logical_size(&self) -> Size {
        let scale = if self.scale.is_finite() && self.scale > 0.0 {
            self.scale
        } else {
            1.0
        };
        Size::new(
            (self.width as f64 / scale).floor() as u32,
            (self.height as f64 / scale).floor() as u32,
        )
    }
}
