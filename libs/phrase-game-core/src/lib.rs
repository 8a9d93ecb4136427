//! Core of the fill-in-the-blank phrase game.
//!
//! Provides:
//! - Phrase template parser (locates the `|` blank in a phrase)
//! - Answer validation for free-text and choice blanks
//! - Level dataset loading with configuration checks
//! - Game session state machine (level progression)
//! - Render adapter seam and the `Game` driver that feeds it

pub mod dataset;
pub mod error;
pub mod matching;
pub mod parser;
pub mod render;
pub mod session;
pub mod types;

pub use dataset::{Dataset, DatasetWarning, RawCard};
pub use error::{DatasetError, GameError, Result, SubmitError};
pub use matching::{evaluate, is_correct};
pub use parser::{parse, ParsedPhrase, Segment, BLANK_MARKER};
pub use render::{Game, RenderAdapter};
pub use session::{GameSession, SubmissionOutcome, SubmissionResult};
pub use types::{Answer, AnswerKind, Card, CardResult, CardView, Level, SessionStatus};
