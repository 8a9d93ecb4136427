//! Level dataset loading.
//!
//! # Format
//! ```json
//! {
//!   "0": [
//!     { "url": "cat.png", "phrase": "The | sleeps", "type": "input", "answer": "cat" },
//!     { "url": "sky.png", "phrase": "The sky is |", "type": "select",
//!       "options": ["red", "blue"], "answer": "blue" }
//!   ],
//!   "1": [ ... ]
//! }
//! ```
//! Level keys are `0..N` without gaps or repeats. Every phrase holds exactly
//! one `|` blank.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DatasetError, Result};
use crate::parser;
use crate::types::{AnswerKind, Card, Level};

/// Card descriptor as it appears in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCard {
    pub url: String,
    pub phrase: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: String,
}

/// Non-fatal dataset problems. Each one makes its level unwinnable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum DatasetWarning {
    UnsupportedKind {
        level: usize,
        card: usize,
        tag: String,
    },
    AnswerNotInOptions {
        level: usize,
        card: usize,
        answer: String,
    },
}

impl fmt::Display for DatasetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedKind { level, card, tag } => write!(
                f,
                "level {level}, card {card}: unsupported type {tag:?}, card can never be answered"
            ),
            Self::AnswerNotInOptions {
                level,
                card,
                answer,
            } => write!(
                f,
                "level {level}, card {card}: answer {answer:?} is not one of the options"
            ),
        }
    }
}

/// Validated, immutable level set for one game.
#[derive(Debug, Clone)]
pub struct Dataset {
    levels: Vec<Level>,
    warnings: Vec<DatasetWarning>,
}

impl Dataset {
    /// Parse and validate a JSON dataset.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: LevelEntries = serde_json::from_str(json)?;
        Self::from_keyed(raw)
    }

    /// Parse and validate a JSON dataset from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let raw: LevelEntries = serde_json::from_reader(reader)?;
        Self::from_keyed(raw)
    }

    /// Validate levels given in order.
    pub fn from_levels(raw_levels: Vec<Vec<RawCard>>) -> Result<Self> {
        if raw_levels.is_empty() {
            return Err(DatasetError::NoLevels);
        }

        let mut warnings = Vec::new();
        let mut levels = Vec::with_capacity(raw_levels.len());

        for (level_idx, raw_cards) in raw_levels.into_iter().enumerate() {
            if raw_cards.is_empty() {
                return Err(DatasetError::EmptyLevel { level: level_idx });
            }

            let cards = raw_cards
                .into_iter()
                .enumerate()
                .map(|(card_idx, raw)| build_card(level_idx, card_idx, raw, &mut warnings))
                .collect::<Result<Vec<_>>>()?;
            levels.push(cards);
        }

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        tracing::debug!(levels = levels.len(), "dataset loaded");

        Ok(Self { levels, warnings })
    }

    fn from_keyed(raw: LevelEntries) -> Result<Self> {
        let mut by_index = BTreeMap::new();
        for (key, cards) in raw.0 {
            let index = parse_level_key(&key)?;
            if by_index.insert(index, cards).is_some() {
                return Err(DatasetError::DuplicateLevel { level: index });
            }
        }

        let mut ordered = Vec::with_capacity(by_index.len());
        for (expected, (index, cards)) in by_index.into_iter().enumerate() {
            if index != expected {
                return Err(DatasetError::MissingLevel { missing: expected });
            }
            ordered.push(cards);
        }

        Self::from_levels(ordered)
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Problems that did not stop loading but leave some level unwinnable.
    pub fn warnings(&self) -> &[DatasetWarning] {
        &self.warnings
    }

    pub(crate) fn into_levels(self) -> Vec<Level> {
        self.levels
    }
}

/// Top-level object entries in document order, repeated keys included.
struct LevelEntries(Vec<(String, Vec<RawCard>)>);

impl<'de> Deserialize<'de> for LevelEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = LevelEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of level index to card list")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<LevelEntries, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Vec<RawCard>>()? {
                    entries.push(entry);
                }
                Ok(LevelEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

fn parse_level_key(key: &str) -> Result<usize> {
    key.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == key)
        .ok_or_else(|| DatasetError::InvalidLevelKey {
            key: key.to_string(),
        })
}

fn build_card(
    level: usize,
    card: usize,
    raw: RawCard,
    warnings: &mut Vec<DatasetWarning>,
) -> Result<Card> {
    let found = parser::parse(&raw.phrase).blank_count();
    if found != 1 {
        return Err(DatasetError::BlankCount { level, card, found });
    }

    let answer_kind = match raw.kind.as_str() {
        "input" => AnswerKind::FreeText,
        "select" => {
            let options = raw.options.unwrap_or_default();
            if options.is_empty() {
                return Err(DatasetError::MissingOptions { level, card });
            }
            if !options.contains(&raw.answer) {
                warnings.push(DatasetWarning::AnswerNotInOptions {
                    level,
                    card,
                    answer: raw.answer.clone(),
                });
            }
            AnswerKind::Choice { options }
        }
        other => {
            warnings.push(DatasetWarning::UnsupportedKind {
                level,
                card,
                tag: other.to_string(),
            });
            AnswerKind::Unsupported {
                tag: other.to_string(),
            }
        }
    };

    Ok(Card {
        image_ref: raw.url,
        phrase_template: raw.phrase,
        answer_kind,
        correct_answer: raw.answer,
    })
}
