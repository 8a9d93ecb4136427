//! Shared helpers for terminal host integration tests.

pub mod fixtures;

use phrase_game_core::Dataset;
use phrase_game_terminal::terminal::TerminalRenderer;

/// Renderer reading from a fixed script and writing to a buffer.
pub fn scripted(script: &str) -> TerminalRenderer<&[u8], Vec<u8>> {
    TerminalRenderer::new(script.as_bytes(), Vec::new())
}

pub fn dataset(json: &str) -> Dataset {
    Dataset::from_json(json).expect("fixture dataset should load")
}
