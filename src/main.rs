//! Terminal raycaster (default binary).
//!
//! Walk a tile world rendered as a first-person ray-cast view made of shaded
//! glyphs. `w`/`s` (or Up/Down) walk, `a`/`d` (or Left/Right) turn, `q`/Esc
//! quits.

use std::fs::File;

use anyhow::{Context, Result};

use tui_raycast::core::World;
use tui_raycast::engine::{CancelToken, Game};
use tui_raycast::input::TerminalInput;
use tui_raycast::term::TerminalRenderer;
use tui_raycast::types::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    log::info!("starting with {config:?}");

    let mut term = TerminalRenderer::new();
    let result = term
        .enter(config.width, config.height)
        .and_then(|release_events| run(&mut term, config, release_events));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("game loop failed: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig, release_events: bool) -> Result<()> {
    let cancel = CancelToken::new();
    let mut input = TerminalInput::new(cancel.clone(), release_events);
    let mut game = Game::new(World::default_level(), config);

    game.run(&mut input, term, &cancel)?;
    Ok(())
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    builder.format_timestamp_micros();

    if let Some(path) = &config.log_path {
        let file = File::create(path).with_context(|| format!("failed to create log file {path}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
