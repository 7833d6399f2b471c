//! The dispatcher vocabulary the engine speaks.
//!
//! Per-window commands address their target as `address:<handle>`; the
//! text produced by `Display` is exactly what goes after `dispatch `.

use std::fmt;

use stagehand_common::Geometry;

use crate::snapshot::WindowHandle;

/// A placement rule applied by `exec` before the window's first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecRule {
    Workspace { id: i32, silent: bool },
    Float,
    NoAnim,
    Size { width: u32, height: u32 },
    Move { x: i32, y: i32 },
    NoBorder,
    NoRounding,
    NoShadow,
    NoBlur,
}

impl fmt::Display for ExecRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecRule::Workspace { id, silent: true } => write!(f, "workspace {id} silent"),
            ExecRule::Workspace { id, silent: false } => write!(f, "workspace {id}"),
            ExecRule::Float => f.write_str("float"),
            ExecRule::NoAnim => f.write_str("noanim"),
            ExecRule::Size { width, height } => write!(f, "size {width} {height}"),
            ExecRule::Move { x, y } => write!(f, "move {x} {y}"),
            ExecRule::NoBorder => f.write_str("noborder"),
            ExecRule::NoRounding => f.write_str("rounding 0"),
            ExecRule::NoShadow => f.write_str("noshadow"),
            ExecRule::NoBlur => f.write_str("noblur"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Workspace(i32),
    Exec {
        rules: Vec<ExecRule>,
        command: String,
    },
    SetFloating(WindowHandle),
    /// Drop the focused window out of fullscreen. The dispatcher takes no
    /// target, so callers focus the window first.
    ExitFullscreenFocused,
    ResizeExact {
        handle: WindowHandle,
        width: u32,
        height: u32,
    },
    MoveExact {
        handle: WindowHandle,
        x: i32,
        y: i32,
    },
    NoBorder(WindowHandle),
    NoRounding(WindowHandle),
    Focus(WindowHandle),
    /// Push to the bottom of the stacking order.
    Lower(WindowHandle),
    /// Maximize the focused window (fullscreen mode 1).
    MaximizeFocused,
    Close(WindowHandle),
}

impl Dispatch {
    /// Resize then move, both exact pixels.
    pub fn place(handle: &WindowHandle, geometry: Geometry) -> [Dispatch; 2] {
        [
            Dispatch::ResizeExact {
                handle: handle.clone(),
                width: geometry.width,
                height: geometry.height,
            },
            Dispatch::MoveExact {
                handle: handle.clone(),
                x: geometry.x,
                y: geometry.y,
            },
        ]
    }

    /// Full `dispatch ...` line, as used inside batches.
    pub fn to_line(&self) -> String {
        crate::wire::dispatch_line(&self.to_string())
    }
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatch::Workspace(id) => write!(f, "workspace {id}"),
            Dispatch::Exec { rules, command } => {
                if rules.is_empty() {
                    return write!(f, "exec {command}");
                }
                let rules = rules
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(";");
                write!(f, "exec [{rules}] {command}")
            }
            Dispatch::SetFloating(h) => write!(f, "setfloating address:{h}"),
            Dispatch::ExitFullscreenFocused => f.write_str("fullscreenstate 0 0"),
            Dispatch::ResizeExact {
                handle,
                width,
                height,
            } => write!(f, "resizewindowpixel exact {width} {height},address:{handle}"),
            Dispatch::MoveExact { handle, x, y } => {
                write!(f, "movewindowpixel exact {x} {y},address:{handle}")
            }
            Dispatch::NoBorder(h) => write!(f, "setprop address:{h} noborder 1"),
            Dispatch::NoRounding(h) => write!(f, "setprop address:{h} rounding 0"),
            Dispatch::Focus(h) => write!(f, "focuswindow address:{h}"),
            Dispatch::Lower(h) => write!(f, "alterzorder bottom,address:{h}"),
            Dispatch::MaximizeFocused => f.write_str("fullscreen 1"),
            Dispatch::Close(h) => write!(f, "closewindow address:{h}"),
        }
    }
}
