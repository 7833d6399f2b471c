//! In-memory compositor and virtual clock for engine tests.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

use stagehand_common::TransportError;
use stagehand_ipc::{wire, Client, Monitor, Transport, WindowHandle, WorkspaceRef};

use crate::pacing::Pacer;

/// A program the fake knows how to "run": an exec whose command contains
/// `needle` opens a window after `delay` further client queries.
#[derive(Debug, Clone)]
pub struct Program {
    pub needle: String,
    pub title: String,
    pub class: String,
    pub delay: u32,
    /// Overrides the workspace named in the exec rules.
    pub workspace: Option<i32>,
    /// Number of client queries the window stays visible for.
    pub lifetime: Option<u32>,
}

impl Program {
    pub fn titled(needle: &str, title: &str) -> Self {
        Self {
            needle: needle.into(),
            title: title.into(),
            class: "com.mitchellh.ghostty".into(),
            delay: 0,
            workspace: None,
            lifetime: None,
        }
    }

    pub fn classed(needle: &str, class: &str) -> Self {
        Self {
            class: class.into(),
            ..Self::titled(needle, "")
        }
    }

    pub fn after(mut self, queries: u32) -> Self {
        self.delay = queries;
        self
    }

    pub fn on_workspace(mut self, id: i32) -> Self {
        self.workspace = Some(id);
        self
    }

    pub fn living_for(mut self, queries: u32) -> Self {
        self.lifetime = Some(queries);
        self
    }
}

struct Pending {
    visible_at: u32,
    lifetime: Option<u32>,
    client: Client,
}

struct Expiry {
    gone_at: u32,
    handle: WindowHandle,
}

#[derive(Default)]
struct State {
    clients: Vec<Client>,
    programs: Vec<Program>,
    pending: Vec<Pending>,
    expiries: Vec<Expiry>,
    monitors_reply: Option<String>,
    log: Vec<String>,
    client_queries: u32,
    next_address: u64,
    offline: bool,
    focused: Option<WindowHandle>,
    fullscreen: HashSet<WindowHandle>,
}

/// Shared-state fake; clones observe the same compositor.
#[derive(Clone, Default)]
pub struct FakeCompositor {
    state: Rc<RefCell<State>>,
}

impl FakeCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, program: Program) {
        self.state.borrow_mut().programs.push(program);
    }

    /// Add a window that already exists.
    pub fn add_window(&self, title: &str, class: &str, workspace: i32) -> WindowHandle {
        let mut state = self.state.borrow_mut();
        let client = state.new_client(title, class, workspace);
        let handle = client.address.clone();
        state.clients.push(client);
        handle
    }

    pub fn set_monitors(&self, monitors: &[Monitor]) {
        let json = serde_json::to_string(monitors).unwrap();
        self.state.borrow_mut().monitors_reply = Some(json);
    }

    pub fn set_monitors_reply(&self, raw: &str) {
        self.state.borrow_mut().monitors_reply = Some(raw.into());
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.borrow_mut().offline = offline;
    }

    pub fn windows(&self) -> Vec<Client> {
        self.state.borrow().clients.clone()
    }

    pub fn window(&self, handle: &WindowHandle) -> Option<Client> {
        self.windows().into_iter().find(|c| &c.address == handle)
    }

    /// Every payload received, in order.
    pub fn log(&self) -> Vec<String> {
        self.state.borrow().log.clone()
    }

    pub fn batches(&self) -> Vec<Vec<String>> {
        self.log()
            .iter()
            .filter_map(|p| wire::decode_batch(p))
            .map(|cmds| cmds.into_iter().map(String::from).collect())
            .collect()
    }

    pub fn client_queries(&self) -> u32 {
        self.state.borrow().client_queries
    }

    pub fn focused(&self) -> Option<WindowHandle> {
        self.state.borrow().focused.clone()
    }

    pub fn is_fullscreen(&self, handle: &WindowHandle) -> bool {
        self.state.borrow().fullscreen.contains(handle)
    }
}

impl State {
    fn new_client(&mut self, title: &str, class: &str, workspace: i32) -> Client {
        self.next_address += 1;
        Client {
            address: WindowHandle::from(format!("0x{:x}", 0x5500 + self.next_address)),
            title: title.into(),
            initial_title: title.into(),
            class: class.into(),
            initial_class: class.into(),
            workspace: WorkspaceRef {
                id: workspace,
                name: workspace.to_string(),
            },
            at: [0, 0],
            size: [800, 600],
            floating: false,
        }
    }

    fn handle_dispatch(&mut self, args: &str) {
        if let Some(rest) = args.strip_prefix("exec ") {
            self.exec(rest);
        } else if let Some(addr) = args.strip_prefix("closewindow address:") {
            self.clients.retain(|c| c.address.as_str() != addr);
            self.fullscreen.retain(|h| h.as_str() != addr);
            if self.focused.as_ref().is_some_and(|h| h.as_str() == addr) {
                self.focused = None;
            }
        } else if let Some(addr) = args.strip_prefix("focuswindow address:") {
            if self.client_mut(addr).is_some() {
                self.focused = Some(WindowHandle::from(addr));
            }
        } else if args == "fullscreen 1" {
            if let Some(h) = self.focused.clone() {
                self.fullscreen.insert(h);
            }
        } else if args == "fullscreenstate 0 0" {
            if let Some(h) = &self.focused {
                self.fullscreen.remove(h);
            }
        } else if let Some(addr) = args.strip_prefix("setfloating address:") {
            if let Some(c) = self.client_mut(addr) {
                c.floating = true;
            }
        } else if let Some(rest) = args.strip_prefix("resizewindowpixel exact ") {
            if let Some((w, h, addr)) = parse_pair_at(rest) {
                if let Some(c) = self.client_mut(addr) {
                    c.size = [w, h];
                }
            }
        } else if let Some(rest) = args.strip_prefix("movewindowpixel exact ") {
            if let Some((x, y, addr)) = parse_pair_at(rest) {
                if let Some(c) = self.client_mut(addr) {
                    c.at = [x, y];
                }
            }
        }
    }

    fn exec(&mut self, rest: &str) {
        let (rules, command) = match rest.strip_prefix('[').and_then(|r| r.split_once("] ")) {
            Some((rules, command)) => (rules, command),
            None => ("", rest),
        };
        let rule_workspace = rules
            .split(';')
            .find_map(|r| r.strip_prefix("workspace "))
            .and_then(|r| r.split_whitespace().next())
            .and_then(|id| id.parse().ok())
            .unwrap_or(1);

        let Some(program) = self
            .programs
            .iter()
            .find(|p| command.contains(&p.needle))
            .cloned()
        else {
            return;
        };
        let workspace = program.workspace.unwrap_or(rule_workspace);
        let client = self.new_client(&program.title, &program.class, workspace);
        self.pending.push(Pending {
            visible_at: self.client_queries + program.delay,
            lifetime: program.lifetime,
            client,
        });
    }

    fn client_mut(&mut self, addr: &str) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.address.as_str() == addr)
    }

    fn clients_reply(&mut self) -> String {
        self.client_queries += 1;
        let now = self.client_queries;

        let expired: Vec<WindowHandle> = self
            .expiries
            .iter()
            .filter(|e| e.gone_at <= now)
            .map(|e| e.handle.clone())
            .collect();
        self.clients.retain(|c| !expired.contains(&c.address));
        self.expiries.retain(|e| e.gone_at > now);

        let (ready, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.visible_at < now);
        self.pending = waiting;
        for p in ready {
            if let Some(life) = p.lifetime {
                self.expiries.push(Expiry {
                    gone_at: now + life,
                    handle: p.client.address.clone(),
                });
            }
            self.clients.push(p.client);
        }

        serde_json::to_string(&self.clients).unwrap()
    }
}

fn parse_pair_at(rest: &str) -> Option<(i32, i32, &str)> {
    let (nums, addr) = rest.split_once(",address:")?;
    let mut parts = nums.split_whitespace();
    let a = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    Some((a, b, addr))
}

impl Transport for FakeCompositor {
    fn request(&self, payload: &str) -> Result<String, TransportError> {
        let mut state = self.state.borrow_mut();
        state.log.push(payload.to_string());
        if state.offline {
            return Err(TransportError::Connect {
                path: "/nonexistent/.socket.sock".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "offline"),
            });
        }

        if payload == wire::json_query(wire::QUERY_CLIENTS) {
            return Ok(state.clients_reply());
        }
        if payload == wire::json_query(wire::QUERY_MONITORS) {
            return Ok(state.monitors_reply.clone().unwrap_or_else(|| "[]".into()));
        }
        if let Some(commands) = wire::decode_batch(payload) {
            for cmd in &commands {
                if let Some(args) = cmd.strip_prefix("dispatch ") {
                    state.handle_dispatch(args);
                }
            }
            return Ok(vec!["ok"; commands.len()].join("\n\n"));
        }
        if let Some(args) = payload.strip_prefix("dispatch ") {
            state.handle_dispatch(args);
        }
        Ok("ok".into())
    }
}

/// Records sleeps instead of blocking.
#[derive(Clone, Default)]
pub struct VirtualPacer {
    elapsed: Rc<Cell<Duration>>,
    sleeps: Rc<Cell<u32>>,
}

impl VirtualPacer {
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }

    pub fn sleeps(&self) -> u32 {
        self.sleeps.get()
    }
}

impl Pacer for VirtualPacer {
    fn sleep(&mut self, duration: Duration) {
        self.elapsed.set(self.elapsed.get() + duration);
        self.sleeps.set(self.sleeps.get() + 1);
    }
}
