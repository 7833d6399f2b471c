use stagehand_common::Geometry;

use crate::matcher::{ClassContains, Matcher, TitleContains};

/// One window to launch and place.
///
/// Requests are identified by their position in the submitted batch.
#[derive(Debug)]
pub struct SpawnRequest {
    pub command: String,
    pub matcher: Box<dyn Matcher>,
    pub geometry: Geometry,
}

impl SpawnRequest {
    pub fn new(
        command: impl Into<String>,
        matcher: impl Matcher + 'static,
        geometry: Geometry,
    ) -> Self {
        Self {
            command: command.into(),
            matcher: Box::new(matcher),
            geometry,
        }
    }

    /// Match by title substring.
    pub fn titled(
        command: impl Into<String>,
        pattern: impl Into<String>,
        geometry: Geometry,
    ) -> Self {
        Self::new(command, TitleContains(pattern.into()), geometry)
    }

    /// Match by class substring.
    pub fn classed(
        command: impl Into<String>,
        pattern: impl Into<String>,
        geometry: Geometry,
    ) -> Self {
        Self::new(command, ClassContains(pattern.into()), geometry)
    }

    /// Match by class when the command sets one explicitly (`--class`),
    /// by title otherwise.
    pub fn inferred(
        command: impl Into<String>,
        pattern: impl Into<String>,
        geometry: Geometry,
    ) -> Self {
        let command = command.into();
        if command.contains("--class") {
            Self::classed(command, pattern, geometry)
        } else {
            Self::titled(command, pattern, geometry)
        }
    }
}
