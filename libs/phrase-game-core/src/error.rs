//! Error types for phrase-game-core.

use thiserror::Error;

/// Result type alias using DatasetError.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Fatal configuration errors raised while loading a level dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset contains no levels")]
    NoLevels,

    #[error("invalid level key {key:?}: expected a non-negative integer")]
    InvalidLevelKey { key: String },

    #[error("duplicate level {level}")]
    DuplicateLevel { level: usize },

    #[error("level keys are not contiguous: missing level {missing}")]
    MissingLevel { missing: usize },

    #[error("level {level} has no cards")]
    EmptyLevel { level: usize },

    #[error("level {level}, card {card}: select card has no options")]
    MissingOptions { level: usize, card: usize },

    #[error("level {level}, card {card}: expected exactly one blank, found {found}")]
    BlankCount {
        level: usize,
        card: usize,
        found: usize,
    },
}

/// Contract violations by the caller of `GameSession::submit`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("expected {expected} answers for the current level, got {actual}")]
    AnswerCount { expected: usize, actual: usize },
}

/// Errors surfaced by the `Game` driver.
#[derive(Debug, Error)]
pub enum GameError<E>
where
    E: std::error::Error + 'static,
{
    #[error("render adapter failed: {0}")]
    Render(#[source] E),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}
