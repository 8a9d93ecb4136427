//! Answer validation for submitted blanks.

use crate::types::{Answer, AnswerKind, CardResult};

/// Decide whether `submitted` answers a blank of `kind` whose answer is `correct`.
///
/// Comparison is exact and case-sensitive. Free-text submissions lose only
/// their surrounding whitespace; the expected answer is never normalized.
pub fn is_correct(kind: &AnswerKind, submitted: &Answer, correct: &str) -> bool {
    let Some(value) = submitted.value() else {
        return false;
    };

    match kind {
        AnswerKind::FreeText => value.trim() == correct,
        AnswerKind::Choice { .. } => value == correct,
        AnswerKind::Unsupported { .. } => false,
    }
}

/// Same as [`is_correct`], as a `CardResult`.
pub fn evaluate(kind: &AnswerKind, submitted: &Answer, correct: &str) -> CardResult {
    CardResult::from_bool(is_correct(kind, submitted, correct))
}
