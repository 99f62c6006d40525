//! Core engine types: configuration and errors.
//!
//! Everything game-specific (attribute schema, glyphs, budgets) is supplied
//! through `GameConfig` rather than hardcoded in the engine.

pub mod config;
pub mod error;

pub use config::{GameConfig, DEFAULT_ANSWER_MULTIPLIER, DEFAULT_MAX_GUESSES, DEFAULT_SHARE_TITLE};
pub use error::{CatalogError, Error, GuessError};
