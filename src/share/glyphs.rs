//! Verdict glyph table.
//!
//! Maps each verdict to the glyph used in shareable summaries. A verdict
//! missing from the table falls back to the `Wrong` glyph.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::rules::Verdict;

/// Glyph used when neither the verdict nor `Wrong` is in the table.
pub const FALLBACK_GLYPH: &str = "🟥";

/// Verdict-to-glyph configuration table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlyphTable {
    glyphs: FxHashMap<Verdict, String>,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::empty()
            .with_glyph(Verdict::Correct, "🟩")
            .with_glyph(Verdict::Partial, "🟨")
            .with_glyph(Verdict::Wrong, FALLBACK_GLYPH)
            .with_glyph(Verdict::TooLow, "⬆️")
            .with_glyph(Verdict::TooHigh, "⬇️")
    }
}

impl GlyphTable {
    /// A table with no entries; every verdict uses the fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            glyphs: FxHashMap::default(),
        }
    }

    /// Set the glyph for a verdict, replacing any previous one.
    #[must_use]
    pub fn with_glyph(mut self, verdict: Verdict, glyph: impl Into<String>) -> Self {
        self.glyphs.insert(verdict, glyph.into());
        self
    }

    /// Glyph for a verdict.
    #[must_use]
    pub fn glyph(&self, verdict: Verdict) -> &str {
        self.glyphs
            .get(&verdict)
            .or_else(|| self.glyphs.get(&Verdict::Wrong))
            .map_or(FALLBACK_GLYPH, String::as_str)
    }

    /// First verdict (in table order) mapped to a blank glyph, if any.
    #[must_use]
    pub fn blank_verdict(&self) -> Option<Verdict> {
        Verdict::ALL.into_iter().find(|v| {
            self.glyphs
                .get(v)
                .is_some_and(|g| g.trim().is_empty())
        })
    }

    /// Render a verdict row as a glyph line.
    #[must_use]
    pub fn line(&self, verdicts: &[Verdict]) -> String {
        verdicts.iter().map(|&v| self.glyph(v)).collect()
    }
}
