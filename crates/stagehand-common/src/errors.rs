use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures talking to the compositor control socket.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HYPRLAND_INSTANCE_SIGNATURE is not set; is the compositor running?")]
    MissingSignature,

    #[error("cannot connect to control socket {path}: {source}")]
    Connect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("control socket io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed reply: {0}")]
    Malformed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("compositor rejected exec: {0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("invalid canvas color: {0}")]
    InvalidColor(String),

    #[error("failed to write canvas image {path}: {reason}")]
    ImageWrite { path: PathBuf, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
