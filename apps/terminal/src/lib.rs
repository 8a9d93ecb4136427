//! Terminal host for the phrase game.

pub mod config;
pub mod terminal;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Context;
use phrase_game_core::{Dataset, Game, GameError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::terminal::{TerminalError, TerminalRenderer};

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env(std::env::args().nth(1))?;

    tracing::info!("Loading dataset from {}", config.dataset_path.display());
    let file = File::open(&config.dataset_path)
        .with_context(|| format!("cannot open {}", config.dataset_path.display()))?;
    let dataset = Dataset::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot load {}", config.dataset_path.display()))?;

    if !dataset.warnings().is_empty() {
        tracing::warn!(
            "{} card(s) can never be answered; some levels are unwinnable",
            dataset.warnings().len()
        );
    }

    tracing::info!("Starting game with {} level(s)", dataset.level_count());
    let renderer = TerminalRenderer::new(io::stdin().lock(), io::stdout());
    play(dataset, renderer)?;

    Ok(())
}

/// Play until every level is finished, then hand back the renderer.
pub fn play<I: BufRead, O: Write>(
    dataset: Dataset,
    renderer: TerminalRenderer<I, O>,
) -> Result<TerminalRenderer<I, O>, GameError<TerminalError>> {
    let mut game = Game::new(dataset, renderer);
    game.start()?;
    while !game.session().is_completed() {
        game.on_submit()?;
    }
    Ok(game.into_adapter())
}
