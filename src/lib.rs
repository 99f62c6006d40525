//! # daily-guess
//!
//! Engine for a daily guessing game: the player has eight tries to name the
//! answer of the day, and every guess is scored column by column against it.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The answer is a pure function of the calendar date
//!    and catalog order. Same day, same answer.
//!
//! 2. **Pure Engine**: Rounds are values. Submitting a guess returns an
//!    updated round; nothing blocks, retries, or performs I/O.
//!
//! 3. **Configuration Over Convention**: The attribute schema, guess budget
//!    and share glyphs come from `GameConfig`, not from the engine.
//!
//! ## Modules
//!
//! - `core`: Configuration and errors
//! - `catalog`: Entities, attribute schema, validated lookup
//! - `rules`: Answer selection, per-attribute scoring, round state
//! - `share`: Verdict glyphs, result summary, notifier capability
//! - `session`: A round plus the optional notifier
//! - `games`: Built-in data sets
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use daily_guess::{games, GameConfig, Round, RoundState};
//!
//! let catalog = games::champions::catalog().unwrap();
//! let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
//! let mut round = Round::for_date(&catalog, &GameConfig::default(), date);
//!
//! let answer = round.answer().name.clone();
//! round.submit(&catalog, &answer.to_uppercase()).unwrap();
//! assert_eq!(round.state(), RoundState::Won);
//! ```

pub mod core;
pub mod catalog;
pub mod rules;
pub mod share;
pub mod session;
pub mod games;

// Re-export commonly used types
pub use crate::core::{CatalogError, Error, GameConfig, GuessError};

pub use crate::catalog::{
    AttributeKey, AttributeKind, AttributeSpec, AttributeValue, Attributes, Catalog, Entity,
    EntityId, Schema,
};

pub use crate::rules::{
    score, select_answer, today, Guess, GuessResult, Round, RoundState, Submission, Verdict,
    VerdictRow,
};

pub use crate::share::{format_summary, GlyphTable, NoopNotifier, Notifier, NotifyError};

pub use crate::session::DailySession;
