//! Subcommand bodies. Each one owns a [`Stage`] for its whole run.

use std::io::BufRead;
use std::path::Path;

use stagehand_common::StageError;
use stagehand_config::StageConfig;
use stagehand_engine::{CanvasSource, SpawnReport, Stage};
use tracing::{info, warn};

use crate::cli::{BackgroundArgs, Command, GridArgs};
use crate::grid::{GridLayout, TITLE_PREFIX};
use crate::manifest::Manifest;

pub fn run(command: Command, config: StageConfig) -> Result<(), StageError> {
    match command {
        Command::Grid(args) => grid(args, config),
        Command::Run { manifest } => run_manifest(&manifest, config),
        Command::Clean { patterns } => clean(&patterns, config),
        Command::Background(args) => background(args, config),
    }
}

fn grid(args: GridArgs, config: StageConfig) -> Result<(), StageError> {
    let layout = GridLayout {
        rows: args.rows,
        cols: args.cols,
        screen: args.screen,
        margin: args.margin,
        gap: args.gap,
    };
    let requests = layout.requests(&config.launch.terminal);
    info!(
        "grid {}x{} with {} cells on a {} screen",
        layout.rows,
        layout.cols,
        layout.cell_size(),
        layout.screen
    );

    let mut stage = Stage::connect(config)?;
    stage.clean_slate(&[TITLE_PREFIX]);
    stage.switch_to_workspace();
    stage.set_background(&CanvasSource::Solid(args.color));

    let report = stage.spawn_batch(&requests);
    summarize(&report);
    hold(&mut stage, "Grid initialized. Press Enter to stop.")
}

fn run_manifest(path: &Path, config: StageConfig) -> Result<(), StageError> {
    let manifest = Manifest::load(path)?;
    let base = path.parent().unwrap_or(Path::new("."));
    let background = manifest
        .background
        .as_ref()
        .map(|b| b.source(base))
        .transpose()?;
    info!(
        "manifest {} describes {} windows",
        path.display(),
        manifest.windows.len()
    );

    let mut stage = Stage::connect(config)?;
    if !manifest.clean_slate.is_empty() {
        stage.clean_slate(&manifest.clean_slate);
    }
    stage.switch_to_workspace();
    if let Some(source) = &background {
        stage.set_background(source);
    }

    let report = stage.spawn_batch(&manifest.requests());
    summarize(&report);
    hold(&mut stage, "Stage is set. Press Enter to tear down.")
}

fn clean(patterns: &[String], config: StageConfig) -> Result<(), StageError> {
    let mut stage = Stage::connect(config)?;
    let closed = stage.clean_slate(patterns);
    println!(
        "closed {closed} windows on workspace {}",
        stage.workspace()
    );
    Ok(())
}

fn background(args: BackgroundArgs, config: StageConfig) -> Result<(), StageError> {
    let source = match (args.color, args.image) {
        (Some(color), _) => CanvasSource::Solid(color),
        (None, Some(image)) => CanvasSource::Image(image),
        (None, None) => return Err(StageError::Other("no background source given".into())),
    };

    let mut stage = Stage::connect(config)?;
    stage.switch_to_workspace();
    if stage.set_background(&source).is_none() {
        warn!("background canvas did not come up");
    }
    hold(&mut stage, "Background set. Press Enter to remove it.")
}

fn summarize(report: &SpawnReport) {
    println!(
        "placed {}/{} windows",
        report.matched_count(),
        report.requested
    );
    if !report.is_complete() {
        println!(
            "missing requests: {:?}",
            report
                .unmatched
                .iter()
                .chain(&report.vanished)
                .collect::<Vec<_>>()
        );
    }
}

/// Block until Enter (or EOF), then tear the stage down either way.
fn hold(stage: &mut Stage, prompt: &str) -> Result<(), StageError> {
    println!("{prompt}");
    let mut line = String::new();
    let waited = std::io::stdin().lock().read_line(&mut line);
    stage.cleanup();
    waited?;
    Ok(())
}
