//! TOML manifests for `stagehand run`.
//!
//! ```toml
//! clean_slate = ["Scoreboard"]
//!
//! [background]
//! color = "#101018"
//!
//! [[window]]
//! command = "ghostty --title=Scoreboard -e htop"
//! pattern = "Scoreboard"
//! x = 40
//! y = 40
//! width = 800
//! height = 600
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use stagehand_common::{CanvasError, Color, ConfigError, Geometry, StageError};
use stagehand_engine::{CanvasSource, SpawnRequest};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Patterns swept from the workspace before anything is spawned.
    pub clean_slate: Vec<String>,
    pub background: Option<Background>,
    #[serde(rename = "window")]
    pub windows: Vec<WindowSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Background {
    pub color: Option<String>,
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSpec {
    pub command: String,
    pub pattern: String,
    /// Match on window class instead of title. Inferred from `--class`
    /// in the command when omitted.
    pub match_by_class: Option<bool>,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl WindowSpec {
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.x, self.y, self.width, self.height)
    }

    pub fn request(&self) -> SpawnRequest {
        let command = self.command.clone();
        let pattern = self.pattern.clone();
        match self.match_by_class {
            Some(true) => SpawnRequest::classed(command, pattern, self.geometry()),
            Some(false) => SpawnRequest::titled(command, pattern, self.geometry()),
            None => SpawnRequest::inferred(command, pattern, self.geometry()),
        }
    }
}

impl Background {
    pub fn source(&self, base: &Path) -> Result<CanvasSource, StageError> {
        match (&self.color, &self.image) {
            (Some(color), None) => Color::from_hex(color)
                .map(CanvasSource::Solid)
                .ok_or_else(|| CanvasError::InvalidColor(color.clone()).into()),
            (None, Some(image)) => Ok(CanvasSource::Image(base.join(image))),
            _ => Err(ConfigError::ValidationError(
                "background needs exactly one of `color` or `image`".into(),
            )
            .into()),
        }
    }
}

impl Manifest {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let manifest: Manifest =
            toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.to_path_buf()))?;
        Self::parse(&text)
    }

    pub fn requests(&self) -> Vec<SpawnRequest> {
        self.windows.iter().map(WindowSpec::request).collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        for (i, w) in self.windows.iter().enumerate() {
            if w.command.trim().is_empty() {
                errors.push(format!("window {i}: empty command"));
            }
            if w.pattern.is_empty() {
                errors.push(format!("window {i}: empty pattern"));
            }
            if w.width == 0 || w.height == 0 {
                errors.push(format!("window {i}: zero size"));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(errors.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_engine::matcher::MatchField;

    const SAMPLE: &str = r##"
clean_slate = ["Scoreboard", "Timer"]

[background]
color = "#101018"

[[window]]
command = "ghostty --title=Scoreboard -e htop"
pattern = "Scoreboard"
x = 40
y = 40
width = 800
height = 600

[[window]]
command = "ghostty --class=stage.timer -e sh -c 'sleep infinity'"
pattern = "stage.timer"
x = 860
y = 40
width = 300
height = 200

[[window]]
command = "foot --app-id=notes"
pattern = "notes"
match_by_class = true
x = 0
y = 0
width = 10
height = 10
"##;

    #[test]
    fn parses_full_manifest() {
        let m = Manifest::parse(SAMPLE).unwrap();
        assert_eq!(m.clean_slate, ["Scoreboard", "Timer"]);
        assert_eq!(m.windows.len(), 3);
        assert_eq!(m.windows[1].geometry(), Geometry::new(860, 40, 300, 200));

        let fields: Vec<MatchField> = m.requests().iter().map(|r| r.matcher.field()).collect();
        assert_eq!(fields, [MatchField::Title, MatchField::Class, MatchField::Class]);
    }

    #[test]
    fn background_color_and_image() {
        let m = Manifest::parse(SAMPLE).unwrap();
        let source = m.background.unwrap().source(Path::new("/srv")).unwrap();
        assert_eq!(
            source,
            CanvasSource::Solid(Color::from_hex("#101018").unwrap())
        );

        let bg = Background {
            color: None,
            image: Some("bg/table.png".into()),
        };
        assert_eq!(
            bg.source(Path::new("/srv/show")).unwrap(),
            CanvasSource::Image("/srv/show/bg/table.png".into())
        );
    }

    #[test]
    fn background_rejects_ambiguous_or_bad_color() {
        let both = Background {
            color: Some("#000000".into()),
            image: Some("a.png".into()),
        };
        assert!(both.source(Path::new("/")).is_err());

        let bad = Background {
            color: Some("teal".into()),
            image: None,
        };
        assert!(matches!(
            bad.source(Path::new("/")),
            Err(StageError::Canvas(CanvasError::InvalidColor(_)))
        ));
    }

    #[test]
    fn empty_manifest_is_valid() {
        let m = Manifest::parse("").unwrap();
        assert!(m.windows.is_empty());
        assert!(m.background.is_none());
    }

    #[test]
    fn unknown_keys_rejected() {
        let text = r#"
[[window]]
command = "a"
pattern = "a"
x = 0
y = 0
width = 1
height = 1
colour = 3
"#;
        let err = Manifest::parse(text).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn validation_collects_all_problems() {
        let err = Manifest::parse(
            "[[window]]\ncommand = \" \"\npattern = \"\"\nx = 0\ny = 0\nwidth = 0\nheight = 1\n",
        )
        .unwrap_err();
        let ConfigError::ValidationError(msg) = err else {
            panic!("expected validation error");
        };
        assert_eq!(msg, "window 0: empty command; window 0: empty pattern; window 0: zero size");
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("show.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(Manifest::load(&path).unwrap().windows.len(), 3);
        assert!(matches!(
            Manifest::load(&dir.path().join("missing.toml")),
            Err(ConfigError::FileNotFound(_))
        ));
    }
}
