//! Typed compositor client over a [`Transport`].

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use stagehand_common::TransportError;

use crate::dispatch::Dispatch;
use crate::snapshot::{Client, Monitor};
use crate::transport::Transport;
use crate::wire;
use crate::Result;

/// Compositor control client.
///
/// Reads come in two flavours: `try_*` surfaces every transport or parse
/// failure, while the plain variants degrade to an empty snapshot because
/// they run inside polling loops. Writes return the raw reply; most replies
/// are a bare acknowledgement and callers treat them as fire-and-forget.
pub struct Hyprctl {
    transport: Box<dyn Transport>,
}

impl Hyprctl {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn try_clients(&self) -> Result<Vec<Client>> {
        self.query_json(wire::QUERY_CLIENTS)
    }

    /// Best-effort window snapshot; empty on any failure.
    pub fn clients(&self) -> Vec<Client> {
        self.try_clients().unwrap_or_else(|e| {
            debug!("clients query failed: {e}");
            Vec::new()
        })
    }

    pub fn try_monitors(&self) -> Result<Vec<Monitor>> {
        self.query_json(wire::QUERY_MONITORS)
    }

    /// Best-effort monitor snapshot; empty on any failure.
    pub fn monitors(&self) -> Vec<Monitor> {
        self.try_monitors().unwrap_or_else(|e| {
            debug!("monitors query failed: {e}");
            Vec::new()
        })
    }

    /// The focused monitor, or the first one if none reports focus.
    pub fn focused_monitor(&self) -> Result<Monitor> {
        let monitors = self.try_monitors()?;
        let index = monitors.iter().position(|m| m.focused).unwrap_or(0);
        monitors
            .into_iter()
            .nth(index)
            .ok_or_else(|| TransportError::Malformed("no monitors reported".into()))
    }

    /// Send one raw command line.
    pub fn command(&self, text: &str) -> Result<String> {
        self.transport.request(text)
    }

    pub fn dispatch(&self, dispatch: &Dispatch) -> Result<String> {
        self.command(&dispatch.to_line())
    }

    pub fn keyword(&self, args: &str) -> Result<String> {
        self.command(&wire::keyword_line(args))
    }

    /// Apply `commands` as one atomic unit. An empty batch sends nothing.
    pub fn batch<S: AsRef<str>>(&self, commands: &[S]) -> Result<String> {
        match wire::encode_batch(commands) {
            Some(payload) => self.transport.request(&payload),
            None => Ok(String::new()),
        }
    }

    /// Batch of dispatches; failures are logged and swallowed.
    pub fn apply(&self, dispatches: &[Dispatch], what: &str) {
        let lines: Vec<String> = dispatches.iter().map(Dispatch::to_line).collect();
        match self.batch(&lines) {
            Ok(reply) if !lines.is_empty() && !wire::is_ok_reply(&reply) => {
                warn!("{what}: compositor replied {reply:?}");
            }
            Ok(_) => {}
            Err(e) => warn!("{what}: batch failed: {e}"),
        }
    }

    fn query_json<T: DeserializeOwned>(&self, query: &str) -> Result<T> {
        let reply = self.transport.request(&wire::json_query(query))?;
        serde_json::from_str(&reply)
            .map_err(|e| TransportError::Malformed(format!("{query}: {e}")))
    }
}
