//! Round engine: answer selection, scoring, and round state.
//!
//! - `selection`: deterministic answer of the day
//! - `scoring`: per-attribute verdicts
//! - `round`: guess validation and round-state derivation
//!
//! Everything here is pure and synchronous. Side effects such as sharing a
//! result live in `session`.

pub mod round;
pub mod scoring;
pub mod selection;

pub use round::{round_state, Guess, Round, RoundState, Submission};
pub use scoring::{
    compare_exact, compare_list, compare_year, score, score_attribute, GuessResult, Verdict,
    VerdictRow,
};
pub use selection::{answer_index, day_of_year, select_answer, select_answer_with, today};
