//! Shareable result summary.
//!
//! ```text
//! LoLdle Daily solved in 3/8
//! 🟥🟩🟥🟨🟩🟩⬇️
//! 🟩🟩🟨🟥🟩🟥⬆️
//! 🟩🟩🟩🟩🟩🟩🟩
//! ```
//!
//! The text is an opaque payload for whatever transport delivers it.

use crate::catalog::Schema;
use crate::rules::{Round, RoundState};

use super::glyphs::GlyphTable;

/// Header line for a round.
#[must_use]
pub fn header(round: &Round, title: &str) -> String {
    let status = match round.state() {
        RoundState::Won => format!("solved in {}/{}", round.guess_count(), round.max_guesses()),
        RoundState::Lost | RoundState::InProgress => {
            format!("unsolved {}/{}", round.guess_count(), round.max_guesses())
        }
    };

    let title = title.trim();
    if title.is_empty() {
        status
    } else {
        format!("{} {}", title, status)
    }
}

/// Header followed by one glyph line per accepted guess.
#[must_use]
pub fn format_summary(round: &Round, schema: &Schema, glyphs: &GlyphTable, title: &str) -> String {
    let mut lines = vec![header(round, title)];
    lines.extend(
        round
            .results(schema)
            .iter()
            .map(|result| glyphs.line(&result.verdicts)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AttributeKind, AttributeSpec, Catalog, Entity, EntityId};
    use crate::rules::Verdict;

    fn setup() -> (Catalog, Round) {
        let schema = Schema::new()
            .with(AttributeSpec::new("genre", "Genre", AttributeKind::List))
            .with(AttributeSpec::new("releaseDate", "Year", AttributeKind::Year));
        let catalog = Catalog::new(
            schema,
            vec![
                Entity::new(EntityId::new(1), "Lux")
                    .with_attr("genre", "Mage, Support")
                    .with_attr("releaseDate", 2010),
                Entity::new(EntityId::new(2), "Zed")
                    .with_attr("genre", "Assassin")
                    .with_attr("releaseDate", 2012),
                Entity::new(EntityId::new(3), "Ahri")
                    .with_attr("genre", "Mage, Assassin")
                    .with_attr("releaseDate", 2011),
            ],
        )
        .unwrap();
        let answer = catalog.get(EntityId::new(3)).unwrap().clone();
        (catalog, Round::new(answer, 8))
    }

    fn glyphs() -> GlyphTable {
        GlyphTable::empty()
            .with_glyph(Verdict::Correct, "G")
            .with_glyph(Verdict::Partial, "Y")
            .with_glyph(Verdict::Wrong, "R")
            .with_glyph(Verdict::TooLow, "^")
            .with_glyph(Verdict::TooHigh, "v")
    }

    #[test]
    fn test_summary_after_win() {
        let (catalog, mut round) = setup();
        round.submit(&catalog, "Lux").unwrap();
        round.submit(&catalog, "Zed").unwrap();
        round.submit(&catalog, "Ahri").unwrap();

        let summary = format_summary(&round, catalog.schema(), &glyphs(), "Daily");
        assert_eq!(summary, "Daily solved in 3/8\nY^\nYv\nGG");
    }

    #[test]
    fn test_header_without_title() {
        let (catalog, mut round) = setup();
        round.submit(&catalog, "Ahri").unwrap();
        assert_eq!(header(&round, "  "), "solved in 1/8");
    }

    #[test]
    fn test_header_in_progress() {
        let (catalog, mut round) = setup();
        round.submit(&catalog, "Zed").unwrap();
        assert_eq!(header(&round, "Daily"), "Daily unsolved 1/8");
    }

    #[test]
    fn test_empty_round() {
        let (catalog, round) = setup();
        let summary = format_summary(&round, catalog.schema(), &glyphs(), "");
        assert_eq!(summary, "unsolved 0/8");
    }
}
