//! Launch a batch of programs and correlate each with the window it opens.
//!
//! The compositor never tells us which window a launch produced, so the
//! coordinator polls the window list and pattern-matches until every
//! request is claimed or the retry budget runs out. Partial success is
//! normal and reported, never raised.

use std::collections::{BTreeMap, HashSet};

use stagehand_config::PollingConfig;
use stagehand_ipc::{Hyprctl, WindowHandle};
use tracing::{debug, info, warn};

use crate::enforcer;
use crate::launch::Launcher;
use crate::matcher::overlapping;
use crate::pacing::Pacer;
use crate::registry::{TrackedWindow, WindowRegistry};
use crate::request::SpawnRequest;

/// Outcome of one `spawn_batch` call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpawnReport {
    pub requested: usize,
    /// Request index to the handle now tracked for it.
    pub handles: BTreeMap<usize, WindowHandle>,
    /// Requests whose window never appeared (or whose launch failed).
    pub unmatched: Vec<usize>,
    /// Requests whose window closed between correlation and placement.
    pub vanished: Vec<usize>,
}

impl SpawnReport {
    pub fn matched_count(&self) -> usize {
        self.handles.len()
    }

    /// Requests without a live tracked window, vanished ones included.
    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len() + self.vanished.len()
    }

    pub fn is_complete(&self) -> bool {
        self.matched_count() == self.requested
    }
}

/// Handles found by one polling run, keyed by request index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Correlation {
    pub handles: BTreeMap<usize, WindowHandle>,
    pub polls: u32,
}

pub struct SpawnCoordinator {
    workspace: i32,
    polling: PollingConfig,
    launcher: Launcher,
    registry: WindowRegistry,
}

impl SpawnCoordinator {
    pub fn new(workspace: i32, polling: PollingConfig, launcher: Launcher) -> Self {
        Self {
            workspace,
            polling,
            launcher,
            registry: WindowRegistry::new(),
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    /// Launch, correlate, drop windows that already closed, track and
    /// place the rest.
    pub fn spawn_batch(
        &mut self,
        hypr: &Hyprctl,
        pacer: &mut dyn Pacer,
        requests: &[SpawnRequest],
    ) -> SpawnReport {
        self.spawn_batch_excluding(hypr, pacer, requests, &HashSet::new())
    }

    /// [`spawn_batch`](Self::spawn_batch), never claiming any of `reserved`
    /// (windows owned elsewhere, such as the background canvas).
    pub fn spawn_batch_excluding(
        &mut self,
        hypr: &Hyprctl,
        pacer: &mut dyn Pacer,
        requests: &[SpawnRequest],
        reserved: &HashSet<WindowHandle>,
    ) -> SpawnReport {
        let mut report = SpawnReport {
            requested: requests.len(),
            ..SpawnReport::default()
        };
        if requests.is_empty() {
            return report;
        }

        info!("batch spawning {} windows", requests.len());
        warn_on_overlap(requests);

        for (index, request) in requests.iter().enumerate() {
            if let Err(e) = self.launcher.launch(hypr, self.workspace, request) {
                // Indistinguishable from a window that never shows up.
                warn!("launch of request {index} failed: {e}");
            }
        }
        let correlation = self.correlate(hypr, pacer, requests, reserved);
        report.unmatched = (0..requests.len())
            .filter(|i| !correlation.handles.contains_key(i))
            .collect();

        // A failed re-check must not discard windows that are probably fine.
        let live: Option<HashSet<WindowHandle>> = match hypr.try_clients() {
            Ok(clients) => Some(clients.into_iter().map(|c| c.address).collect()),
            Err(e) => {
                debug!("skipping liveness re-check: {e}");
                None
            }
        };

        for (index, handle) in correlation.handles {
            if live.as_ref().is_some_and(|l| !l.contains(&handle)) {
                warn!("window {handle} for request {index} closed before placement");
                report.vanished.push(index);
                continue;
            }
            self.registry.insert(TrackedWindow {
                handle: handle.clone(),
                request_index: index,
                geometry: requests[index].geometry,
            });
            report.handles.insert(index, handle);
        }

        enforcer::enforce(
            hypr,
            report
                .handles
                .iter()
                .map(|(index, handle)| (handle, requests[*index].geometry)),
        );

        if report.is_complete() {
            info!(
                "all {} windows placed after {} polls",
                report.requested, correlation.polls
            );
        } else {
            warn!(
                "only found {}/{} windows ({} unmatched, {} vanished)",
                report.matched_count(),
                report.requested,
                report.unmatched.len(),
                report.vanished.len()
            );
        }
        report
    }

    /// Poll until every request is matched or the budget is spent.
    ///
    /// A window is eligible only if it sits on the target workspace, its
    /// handle is neither tracked nor in `reserved`, and no earlier request
    /// in this run claimed it. Nothing is registered. Requests are scanned in index order, so with
    /// overlapping patterns the lower index wins.
    pub fn correlate(
        &self,
        hypr: &Hyprctl,
        pacer: &mut dyn Pacer,
        requests: &[SpawnRequest],
        reserved: &HashSet<WindowHandle>,
    ) -> Correlation {
        let mut correlation = Correlation::default();
        if requests.is_empty() {
            return correlation;
        }

        let mut claimed = self.registry.handles();
        claimed.extend(reserved.iter().cloned());
        for attempt in 1..=self.polling.attempts {
            correlation.polls = attempt;
            let clients = hypr.clients();

            for (index, request) in requests.iter().enumerate() {
                if correlation.handles.contains_key(&index) {
                    continue;
                }
                let hit = clients.iter().find(|c| {
                    c.on_workspace(self.workspace)
                        && !claimed.contains(&c.address)
                        && request.matcher.matches(c)
                });
                if let Some(client) = hit {
                    debug!(
                        "request {index} ({:?}) matched {}",
                        request.matcher.pattern(),
                        client.address
                    );
                    claimed.insert(client.address.clone());
                    correlation.handles.insert(index, client.address.clone());
                }
            }

            if correlation.handles.len() == requests.len() {
                break;
            }
            if attempt < self.polling.attempts {
                pacer.sleep(self.polling.interval());
            }
        }
        correlation
    }

    /// Stop tracking `handles` without closing them.
    pub fn forget(&mut self, handles: &HashSet<WindowHandle>) -> usize {
        handles
            .iter()
            .filter_map(|h| self.registry.remove(h))
            .count()
    }

    /// Close every tracked window in one batch and reap direct launches.
    /// The background canvas has its own launcher and is left alone.
    pub fn close_all(&mut self, hypr: &Hyprctl) -> usize {
        let windows = self.registry.drain();
        if !windows.is_empty() {
            info!("closing {} tracked windows", windows.len());
            let closes: Vec<_> = windows
                .iter()
                .map(|w| stagehand_ipc::Dispatch::Close(w.handle.clone()))
                .collect();
            hypr.apply(&closes, "cleanup");
        }
        self.launcher.terminate_all();
        windows.len()
    }
}

fn warn_on_overlap(requests: &[SpawnRequest]) {
    for (i, a) in requests.iter().enumerate() {
        for (j, b) in requests.iter().enumerate().skip(i + 1) {
            if overlapping(a.matcher.as_ref(), b.matcher.as_ref()) {
                warn!(
                    "requests {i} ({:?}) and {j} ({:?}) overlap; first match wins",
                    a.matcher.pattern(),
                    b.matcher.pattern()
                );
            }
        }
    }
}
