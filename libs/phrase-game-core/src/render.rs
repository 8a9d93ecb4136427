//! Render collaborator seam and the game driver.

use crate::dataset::Dataset;
use crate::error::GameError;
use crate::session::{GameSession, SubmissionOutcome, SubmissionResult};
use crate::types::{Answer, CardResult, CardView};

/// View layer a `Game` draws through.
///
/// Implementations own widget construction and value extraction; the core
/// only sees parsed cards and submitted answers.
pub trait RenderAdapter {
    type Error: std::error::Error + 'static;

    /// (Re)draw the widgets of the given level.
    fn render_level(&mut self, level_index: usize, cards: &[CardView])
        -> Result<(), Self::Error>;

    /// Read the current answer of every card, in card order.
    fn collect_answers(&mut self) -> Result<Vec<Answer>, Self::Error>;

    /// Apply pass/fail state to one card.
    fn mark_card_result(&mut self, card_index: usize, result: CardResult)
        -> Result<(), Self::Error>;

    /// Show the one-based level number.
    fn display_level_label(&mut self, level_number: usize) -> Result<(), Self::Error>;

    /// Called once when the last level is finished.
    fn show_completion(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// One game instance: a session plus the adapter that displays it.
pub struct Game<R: RenderAdapter> {
    session: GameSession,
    adapter: R,
}

impl<R: RenderAdapter> Game<R> {
    pub fn new(dataset: Dataset, adapter: R) -> Self {
        Self {
            session: GameSession::new(dataset),
            adapter,
        }
    }

    /// Draw the first level.
    pub fn start(&mut self) -> Result<(), GameError<R::Error>> {
        self.redraw()
    }

    /// Handle the submit trigger.
    ///
    /// Answers are read from the adapter, scored, and every card is marked.
    /// A finished level is replaced with the next one.
    pub fn on_submit(&mut self) -> Result<SubmissionResult, GameError<R::Error>> {
        if self.session.is_completed() {
            return Ok(self.session.submit(&[])?);
        }

        let answers = self.adapter.collect_answers().map_err(GameError::Render)?;
        let result = self.session.submit(&answers)?;

        for (idx, card_result) in result.results.iter().enumerate() {
            self.adapter
                .mark_card_result(idx, *card_result)
                .map_err(GameError::Render)?;
        }

        match result.outcome {
            SubmissionOutcome::Advanced { .. } => self.redraw()?,
            SubmissionOutcome::Completed => {
                self.adapter.show_completion().map_err(GameError::Render)?
            }
            SubmissionOutcome::Retry { .. } | SubmissionOutcome::Ignored => {}
        }

        Ok(result)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn adapter(&self) -> &R {
        &self.adapter
    }

    pub fn into_adapter(self) -> R {
        self.adapter
    }

    fn redraw(&mut self) -> Result<(), GameError<R::Error>> {
        let cards = self.session.current_cards();
        self.adapter
            .display_level_label(self.session.level_number())
            .map_err(GameError::Render)?;
        self.adapter
            .render_level(self.session.level_index(), &cards)
            .map_err(GameError::Render)
    }
}
