//! Request framing for the control socket.
//!
//! - `j/<query>` asks for a JSON reply.
//! - `dispatch <args>` / `keyword <args>` are single commands.
//! - `[[BATCH]]cmd1;cmd2;...` applies every command as one unit.

pub const JSON_PREFIX: &str = "j/";
pub const BATCH_PREFIX: &str = "[[BATCH]]";
pub const BATCH_SEPARATOR: char = ';';
pub const OK_REPLY: &str = "ok";

pub const QUERY_CLIENTS: &str = "clients";
pub const QUERY_MONITORS: &str = "monitors";

pub fn json_query(query: &str) -> String {
    format!("{JSON_PREFIX}{query}")
}

pub fn dispatch_line(args: &str) -> String {
    format!("dispatch {args}")
}

pub fn keyword_line(args: &str) -> String {
    format!("keyword {args}")
}

/// Join commands into a single batch payload. `None` for an empty batch.
pub fn encode_batch<S: AsRef<str>>(commands: &[S]) -> Option<String> {
    if commands.is_empty() {
        return None;
    }
    let joined = commands
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(&BATCH_SEPARATOR.to_string());
    Some(format!("{BATCH_PREFIX}{joined}"))
}

/// Split a batch payload back into its commands.
pub fn decode_batch(payload: &str) -> Option<Vec<&str>> {
    payload
        .strip_prefix(BATCH_PREFIX)
        .map(|body| body.split(BATCH_SEPARATOR).filter(|c| !c.is_empty()).collect())
}

/// True if every reply line of a command (or batch) acknowledged success.
pub fn is_ok_reply(reply: &str) -> bool {
    let mut lines = reply.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();
    lines.peek().is_some() && lines.all(|l| l == OK_REPLY)
}
