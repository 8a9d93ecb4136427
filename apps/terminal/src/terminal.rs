//! Line-oriented render adapter for stdin/stdout.

use std::io::{self, BufRead, Write};

use phrase_game_core::{Answer, AnswerKind, CardResult, CardView, RenderAdapter};
use thiserror::Error;

/// How the blank is drawn in a phrase.
const BLANK: &str = "____";

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before the game finished")]
    InputClosed,
}

/// Draws cards as text and reads one answer line per card.
pub struct TerminalRenderer<I, O> {
    input: I,
    output: O,
    cards: Vec<CardView>,
}

impl<I: BufRead, O: Write> TerminalRenderer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            cards: Vec::new(),
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    fn read_line(&mut self) -> Result<String, TerminalError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TerminalError::InputClosed);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(line)
    }
}

/// Map a typed line onto a choice widget value.
///
/// Accepts the option text or its one-based number. Anything else leaves
/// the widget unselected.
fn pick_option(options: &[String], line: &str) -> Answer {
    let line = line.trim();
    if let Some(option) = options.iter().find(|o| o.as_str() == line) {
        return Answer::selected(option.as_str());
    }
    line.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| options.get(idx))
        .map(|option| Answer::selected(option.as_str()))
        .unwrap_or(Answer::Unselected)
}

impl<I: BufRead, O: Write> RenderAdapter for TerminalRenderer<I, O> {
    type Error = TerminalError;

    fn render_level(
        &mut self,
        _level_index: usize,
        cards: &[CardView],
    ) -> Result<(), TerminalError> {
        self.cards = cards.to_vec();
        for card in cards {
            writeln!(self.output, "[{}] {}", card.index + 1, card.image_ref)?;
            writeln!(self.output, "    {}", card.phrase.render(BLANK).trim_end())?;
            if let AnswerKind::Choice { options } = &card.answer_kind {
                let listed = options
                    .iter()
                    .enumerate()
                    .map(|(i, o)| format!("{}) {}", i + 1, o))
                    .collect::<Vec<_>>()
                    .join("  ");
                writeln!(self.output, "    options: {}", listed)?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn collect_answers(&mut self) -> Result<Vec<Answer>, TerminalError> {
        let cards = self.cards.clone();
        let mut answers = Vec::with_capacity(cards.len());

        for card in &cards {
            // Unsupported cards have no input; their line only confirms the submit.
            let prompt = if card.answer_kind.is_supported() { ">" } else { "(no input) >" };
            write!(self.output, "[{}] {} ", card.index + 1, prompt)?;
            self.output.flush()?;
            let line = self.read_line()?;

            let answer = match &card.answer_kind {
                AnswerKind::FreeText => Answer::Text(line),
                AnswerKind::Choice { options } => pick_option(options, &line),
                AnswerKind::Unsupported { .. } => Answer::Unselected,
            };
            answers.push(answer);
        }

        Ok(answers)
    }

    fn mark_card_result(
        &mut self,
        card_index: usize,
        result: CardResult,
    ) -> Result<(), TerminalError> {
        let mark = match result {
            CardResult::Correct => "correct",
            CardResult::Wrong => "wrong",
        };
        writeln!(self.output, "[{}] {}", card_index + 1, mark)?;
        Ok(())
    }

    fn display_level_label(&mut self, level_number: usize) -> Result<(), TerminalError> {
        writeln!(self.output, "Level: {}", level_number)?;
        Ok(())
    }

    fn show_completion(&mut self) -> Result<(), TerminalError> {
        writeln!(self.output, "All levels complete!")?;
        self.output.flush()?;
        Ok(())
    }
}
