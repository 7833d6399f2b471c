//! Unix domain socket transport: one stream connection per request.

use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::time::Duration;

use stagehand_common::TransportError;
use tracing::trace;

use crate::transport::Transport;
use crate::Result;

pub const SIGNATURE_ENV: &str = "HYPRLAND_INSTANCE_SIGNATURE";
const SOCKET_NAME: &str = ".socket.sock";
const LEGACY_RUNTIME_DIR: &str = "/tmp";

/// Locate the control socket.
///
/// An explicit override wins. Otherwise the instance signature selects
/// `$XDG_RUNTIME_DIR/hypr/<sig>/.socket.sock` when it exists, falling back
/// to the legacy `/tmp/hypr/<sig>/.socket.sock`.
pub fn resolve_socket_path(override_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = override_path.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let signature = std::env::var(SIGNATURE_ENV)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or(TransportError::MissingSignature)?;
    let runtime_dir = std::env::var_os("XDG_RUNTIME_DIR").map(PathBuf::from);

    Ok(socket_path_for(&signature, runtime_dir.as_deref()))
}

fn socket_path_for(signature: &str, runtime_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = runtime_dir {
        let candidate = dir.join("hypr").join(signature).join(SOCKET_NAME);
        if candidate.exists() {
            return candidate;
        }
    }
    Path::new(LEGACY_RUNTIME_DIR)
        .join("hypr")
        .join(signature)
        .join(SOCKET_NAME)
}

/// Control socket transport.
pub struct UnixSocketTransport {
    path: PathBuf,
    timeout: Duration,
}

impl UnixSocketTransport {
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            timeout,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for UnixSocketTransport {
    fn request(&self, payload: &str) -> Result<String> {
        let mut stream =
            UnixStream::connect(&self.path).map_err(|source| TransportError::Connect {
                path: self.path.clone(),
                source,
            })?;
        stream.set_read_timeout(Some(self.timeout))?;
        stream.set_write_timeout(Some(self.timeout))?;

        trace!(payload, "control socket request");
        stream.write_all(payload.as_bytes())?;

        let mut reply = Vec::new();
        stream.read_to_end(&mut reply)?;
        let reply = String::from_utf8(reply)
            .map_err(|e| TransportError::Malformed(format!("reply is not utf-8: {e}")))?;
        Ok(reply.trim().to_string())
    }
}
