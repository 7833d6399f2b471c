pub mod errors;
pub mod types;

pub use errors::{CanvasError, ConfigError, LaunchError, StageError, TransportError};
pub use types::{Color, Geometry, Size};
