//! Client for the compositor control socket.
//!
//! One connection per request: a command string goes out, the raw reply
//! comes back. [`Hyprctl`] layers typed queries, single dispatches and
//! atomic batches on top of any [`Transport`].

pub mod dispatch;
pub mod hyprctl;
pub mod snapshot;
pub mod socket;
pub mod transport;
pub mod wire;

pub use dispatch::{Dispatch, ExecRule};
pub use hyprctl::Hyprctl;
pub use snapshot::{Client, Monitor, WindowHandle, WorkspaceRef};
pub use socket::{resolve_socket_path, UnixSocketTransport};
pub use transport::Transport;

pub type Result<T> = std::result::Result<T, stagehand_common::TransportError>;
