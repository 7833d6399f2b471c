use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use stagehand_common::{Color, Size};

/// Stagehand: spawn, place and tear down windows on a compositor workspace.
#[derive(Parser, Debug)]
#[command(name = "stagehand", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. `stagehand=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Target workspace override.
    #[arg(long, global = true)]
    pub workspace: Option<i32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill the screen with a grid of labelled terminal windows.
    Grid(GridArgs),
    /// Spawn the windows described in a TOML manifest.
    Run {
        manifest: PathBuf,
    },
    /// Close every window on the workspace matching any pattern.
    Clean {
        #[arg(required = true)]
        patterns: Vec<String>,
    },
    /// Show a background canvas until Enter is pressed.
    Background(BackgroundArgs),
}

#[derive(ClapArgs, Debug)]
pub struct GridArgs {
    #[arg(long, default_value_t = 5)]
    pub rows: u32,

    #[arg(long, default_value_t = 5)]
    pub cols: u32,

    /// Screen size as `WIDTHxHEIGHT`.
    #[arg(long, default_value = "1920x1080", value_parser = parse_size)]
    pub screen: Size,

    #[arg(long, default_value_t = 100)]
    pub margin: u32,

    #[arg(long, default_value_t = 10)]
    pub gap: u32,

    /// Background color.
    #[arg(long, default_value = "#222222", value_parser = parse_color)]
    pub color: Color,
}

#[derive(ClapArgs, Debug)]
#[group(required = true, multiple = false)]
pub struct BackgroundArgs {
    #[arg(long, value_parser = parse_color)]
    pub color: Option<Color>,

    #[arg(long)]
    pub image: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

pub fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let width = w.trim().parse().map_err(|e| format!("bad width {w:?}: {e}"))?;
    let height = h.trim().parse().map_err(|e| format!("bad height {h:?}: {e}"))?;
    Ok(Size::new(width, height))
}

pub fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex(s).ok_or_else(|| format!("expected #rrggbb or #rrggbbaa, got {s:?}"))
}
