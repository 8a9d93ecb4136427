//! Phrase template parser.
//!
//! # Format
//! Words are separated by single spaces. A token that is exactly `|` marks
//! the blank:
//! ```text
//! The | is blue
//! ```
//! A `|` inside a word (`a|b`) is plain text. There is no escape for a
//! standalone `|` literal.

use serde::{Deserialize, Serialize};

/// Token that marks the blank in a phrase template.
pub const BLANK_MARKER: &str = "|";

/// One piece of a parsed phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Literal(String),
    Blank,
}

impl Segment {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Ordered literal and blank segments of a phrase template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedPhrase {
    segments: Vec<Segment>,
}

impl ParsedPhrase {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn blank_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_blank()).count()
    }

    /// Rebuild display text, drawing the blank as `blank`.
    ///
    /// Every segment is followed by one space, the last one included.
    pub fn render(&self, blank: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Blank => out.push_str(blank),
            }
            out.push(' ');
        }
        out
    }
}

/// Parse a phrase template into segments.
pub fn parse(template: &str) -> ParsedPhrase {
    let segments = template
        .split(' ')
        .map(|token| {
            if token == BLANK_MARKER {
                Segment::Blank
            } else {
                Segment::Literal(token.to_string())
            }
        })
        .collect();

    ParsedPhrase { segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lit(text: &str) -> Segment {
        Segment::Literal(text.to_string())
    }

    #[test]
    fn parse_blank_in_middle() {
        let parsed = parse("The | is blue");
        assert_eq!(
            parsed.segments(),
            &[lit("The"), Segment::Blank, lit("is"), lit("blue")]
        );
        assert_eq!(parsed.blank_count(), 1);
    }

    #[test]
    fn parse_blank_at_edges() {
        assert_eq!(parse("| runs").segments(), &[Segment::Blank, lit("runs")]);
        assert_eq!(parse("I see |").segments(), &[lit("I"), lit("see"), Segment::Blank]);
    }

    #[test]
    fn embedded_marker_is_literal() {
        let parsed = parse("a|b is |x");
        assert_eq!(parsed.segments(), &[lit("a|b"), lit("is"), lit("|x")]);
        assert_eq!(parsed.blank_count(), 0);
    }

    #[test]
    fn multiple_blanks_are_kept() {
        assert_eq!(parse("| and |").blank_count(), 2);
    }

    #[test]
    fn double_space_yields_empty_literal() {
        assert_eq!(parse("a  |").segments(), &[lit("a"), lit(""), Segment::Blank]);
    }

    #[test]
    fn render_appends_space_after_every_segment() {
        assert_eq!(parse("The | is blue").render("____"), "The ____ is blue ");
    }

    #[test]
    fn parse_is_deterministic() {
        let template = "My | has four legs";
        assert_eq!(parse(template), parse(template));
    }

    #[test]
    fn serializes_as_segment_list() {
        let json = serde_json::to_string(&parse("a |")).unwrap();
        assert_eq!(json, r#"[{"type":"literal","text":"a"},{"type":"blank"}]"#);
    }
}
