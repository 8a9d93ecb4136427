//! Core types for the phrase game.

use serde::{Deserialize, Serialize};

use crate::parser::{self, ParsedPhrase};

/// How a card's blank is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerKind {
    /// Typed answer.
    FreeText,
    /// Pick one of a fixed, ordered set of options.
    Choice { options: Vec<String> },
    /// Dataset tag the core does not understand. Such a card can never be satisfied.
    Unsupported { tag: String },
}

impl AnswerKind {
    /// Options of a choice blank, empty for every other kind.
    pub fn options(&self) -> &[String] {
        match self {
            Self::Choice { options } => options,
            _ => &[],
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}

/// Value read back from a blank's widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Visible text of a free-text blank.
    Text(String),
    /// Value of the selected choice.
    Selected(String),
    /// No choice made yet. Never equal to any answer.
    Unselected,
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn selected(value: impl Into<String>) -> Self {
        Self::Selected(value.into())
    }

    /// The submitted string, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Text(value) | Self::Selected(value) => Some(value),
            Self::Unselected => None,
        }
    }
}

/// Pass/fail for one card in one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardResult {
    Correct,
    Wrong,
}

impl CardResult {
    pub fn from_bool(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Wrong }
    }

    pub fn is_correct(self) -> bool {
        self == Self::Correct
    }
}

/// Session progression status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// One image + phrase-with-blank + expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub image_ref: String,
    pub phrase_template: String,
    pub answer_kind: AnswerKind,
    pub correct_answer: String,
}

impl Card {
    /// Phrase template split into literals and the blank.
    pub fn parsed(&self) -> ParsedPhrase {
        parser::parse(&self.phrase_template)
    }
}

/// Ordered group of cards solved together.
pub type Level = Vec<Card>;

/// Card data handed to the render collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub index: usize,
    pub image_ref: String,
    pub phrase: ParsedPhrase,
    pub answer_kind: AnswerKind,
}

impl CardView {
    pub fn from_card(index: usize, card: &Card) -> Self {
        Self {
            index,
            image_ref: card.image_ref.clone(),
            phrase: card.parsed(),
            answer_kind: card.answer_kind.clone(),
        }
    }
}
