//! Game session state machine.
//!
//! States are `InProgress(level)` and `Completed`. A submission that answers
//! every card of the current level correctly moves to the next level, or to
//! `Completed` from the last one. `Completed` is terminal.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::SubmitError;
use crate::matching;
use crate::types::{Answer, Card, CardResult, CardView, Level, SessionStatus};

/// What a submission did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Level not finished; the player may resubmit.
    Retry { correct: usize, total: usize },
    /// Level finished; `level_index` is the new current level.
    Advanced { level_index: usize },
    /// Last level finished.
    Completed,
    /// Session was already completed; nothing was evaluated.
    Ignored,
}

/// Result of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Per-card results in card order. Empty when the submission was ignored.
    pub results: Vec<CardResult>,
    pub outcome: SubmissionOutcome,
    pub status: SessionStatus,
    /// Current level after the submission.
    pub level_index: usize,
}

/// Progression state for one play-through.
#[derive(Debug, Clone)]
pub struct GameSession {
    levels: Vec<Level>,
    current_level: usize,
    correct_count: usize,
    status: SessionStatus,
}

impl GameSession {
    /// Start at level 0.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            levels: dataset.into_levels(),
            current_level: 0,
            correct_count: 0,
            status: SessionStatus::InProgress,
        }
    }

    /// Zero-based index of the current level.
    pub fn level_index(&self) -> usize {
        self.current_level
    }

    /// One-based level number for display.
    pub fn level_number(&self) -> usize {
        self.current_level + 1
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Cards answered correctly by the latest submission on this level.
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    fn current_level(&self) -> &[Card] {
        &self.levels[self.current_level]
    }

    /// Current level's cards, with phrases parsed, for rendering.
    pub fn current_cards(&self) -> Vec<CardView> {
        self.current_level()
            .iter()
            .enumerate()
            .map(|(idx, card)| CardView::from_card(idx, card))
            .collect()
    }

    /// Score `answers` against the current level, one per card in card order.
    ///
    /// Correctness is recomputed from scratch on every call. Nothing is
    /// carried over from earlier submissions.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::AnswerCount` if `answers` does not have exactly
    /// one entry per card. The session is left untouched.
    pub fn submit(&mut self, answers: &[Answer]) -> Result<SubmissionResult, SubmitError> {
        if self.is_completed() {
            tracing::debug!("submission ignored, session already completed");
            return Ok(self.result(Vec::new(), SubmissionOutcome::Ignored));
        }

        let level = self.current_level();
        if answers.len() != level.len() {
            return Err(SubmitError::AnswerCount {
                expected: level.len(),
                actual: answers.len(),
            });
        }

        let results: Vec<CardResult> = level
            .iter()
            .zip(answers)
            .map(|(card, answer)| {
                matching::evaluate(&card.answer_kind, answer, &card.correct_answer)
            })
            .collect();

        let total = results.len();
        let fresh_correct = results.iter().filter(|r| r.is_correct()).count();

        let outcome = if fresh_correct < total {
            self.correct_count = fresh_correct;
            tracing::debug!(
                level = self.current_level,
                correct = fresh_correct,
                total,
                "level not complete"
            );
            SubmissionOutcome::Retry {
                correct: fresh_correct,
                total,
            }
        } else if self.current_level + 1 == self.levels.len() {
            self.correct_count = fresh_correct;
            self.status = SessionStatus::Completed;
            tracing::info!(levels = self.levels.len(), "game completed");
            SubmissionOutcome::Completed
        } else {
            self.current_level += 1;
            self.correct_count = 0;
            tracing::info!(level = self.current_level, "advanced to next level");
            SubmissionOutcome::Advanced {
                level_index: self.current_level,
            }
        };

        Ok(self.result(results, outcome))
    }

    fn result(&self, results: Vec<CardResult>, outcome: SubmissionOutcome) -> SubmissionResult {
        SubmissionResult {
            results,
            outcome,
            status: self.status,
            level_index: self.current_level,
        }
    }
}
