//! Background canvas settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::launch::expand_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Image viewer used to display the canvas.
    pub viewer: String,
    /// Window class the viewer reports; used to find the canvas window.
    pub viewer_class: String,
    /// Where solid-color canvases are rendered to. Empty means the temp dir.
    pub generated_image: String,
    /// Resolution used when no focused monitor can be queried.
    pub fallback_width: u32,
    pub fallback_height: u32,
    /// Zero the workspace gaps before the canvas is launched.
    pub zero_gaps: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            viewer: "imv".into(),
            viewer_class: "imv".into(),
            generated_image: String::new(),
            fallback_width: 1920,
            fallback_height: 1080,
            zero_gaps: true,
        }
    }
}

impl CanvasConfig {
    pub fn generated_image_path(&self) -> PathBuf {
        if self.generated_image.trim().is_empty() {
            std::env::temp_dir().join("stagehand_canvas.png")
        } else {
            expand_home(&self.generated_image)
        }
    }
}
