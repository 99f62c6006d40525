//! Game configuration.
//!
//! `GameConfig` bundles the tunables of a daily game:
//! - `max_guesses`: guess budget per round (8)
//! - `answer_multiplier`: odd multiplier for answer selection (17)
//! - `schema`: ordered attribute specs used to load and score entities
//! - `glyphs`: verdict glyphs for the shareable summary
//! - `share_title`: header prefix of the shareable summary
//!
//! Configuration can be built in code or loaded from JSON. Missing JSON
//! fields fall back to the defaults.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::catalog::Schema;
use crate::core::error::CatalogError;
use crate::share::GlyphTable;

/// Default guess budget per round.
pub const DEFAULT_MAX_GUESSES: usize = 8;

/// Default multiplier applied to the day of year when selecting the answer.
pub const DEFAULT_ANSWER_MULTIPLIER: u32 = 17;

/// Default header prefix for the shareable summary.
pub const DEFAULT_SHARE_TITLE: &str = "LoLdle Daily";

/// Configuration for a daily game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum accepted guesses per round.
    pub max_guesses: usize,

    /// Odd multiplier for answer selection.
    pub answer_multiplier: u32,

    /// Attribute schema shared by every entity.
    pub schema: Schema,

    /// Verdict glyphs for the result summary.
    pub glyphs: GlyphTable,

    /// Summary header prefix. Empty for no prefix.
    pub share_title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            answer_multiplier: DEFAULT_ANSWER_MULTIPLIER,
            schema: Schema::champions(),
            glyphs: GlyphTable::default(),
            share_title: DEFAULT_SHARE_TITLE.to_string(),
        }
    }
}

impl GameConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the guess budget.
    #[must_use]
    pub fn with_max_guesses(mut self, max: usize) -> Self {
        self.max_guesses = max;
        self
    }

    /// Set the answer selection multiplier.
    #[must_use]
    pub fn with_answer_multiplier(mut self, multiplier: u32) -> Self {
        self.answer_multiplier = multiplier;
        self
    }

    /// Set the attribute schema.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Set the verdict glyph table.
    #[must_use]
    pub fn with_glyphs(mut self, glyphs: GlyphTable) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Set the summary header prefix.
    #[must_use]
    pub fn with_share_title(mut self, title: impl Into<String>) -> Self {
        self.share_title = title.into();
        self
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.max_guesses == 0 {
            return Err(CatalogError::InvalidConfig(
                "max_guesses must be at least 1".into(),
            ));
        }
        if self.answer_multiplier % 2 == 0 {
            return Err(CatalogError::InvalidConfig(format!(
                "answer_multiplier must be odd, got {}",
                self.answer_multiplier
            )));
        }
        if self.schema.is_empty() {
            return Err(CatalogError::InvalidConfig("schema has no attributes".into()));
        }

        let mut seen = FxHashSet::default();
        for spec in self.schema.iter() {
            if !seen.insert(spec.key.as_str()) {
                return Err(CatalogError::InvalidConfig(format!(
                    "schema key '{}' appears twice",
                    spec.key.as_str()
                )));
            }
        }

        if let Some(verdict) = self.glyphs.blank_verdict() {
            return Err(CatalogError::InvalidConfig(format!(
                "glyph for {:?} is blank",
                verdict
            )));
        }

        Ok(())
    }
}
