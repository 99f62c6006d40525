//! Per-attribute scoring.
//!
//! Each schema column of a guess is compared against the answer and yields
//! one `Verdict`:
//!
//! | Kind    | Correct        | Partial               | Otherwise          |
//! |---------|----------------|-----------------------|--------------------|
//! | `Exact` | equal          | -                     | `Wrong`            |
//! | `List`  | equal strings  | shared token          | `Wrong`            |
//! | `Year`  | equal          | -                     | `TooLow`/`TooHigh` |
//!
//! A value missing on either side always scores `Wrong`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{tokens, AttributeKind, AttributeSpec, Entity, Schema};

/// Outcome of comparing one attribute against the answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Partial,
    Wrong,
    /// Guessed year is earlier than the answer's.
    TooLow,
    /// Guessed year is later than the answer's.
    TooHigh,
}

impl Verdict {
    /// All verdicts, in table order.
    pub const ALL: [Verdict; 5] = [
        Verdict::Correct,
        Verdict::Partial,
        Verdict::Wrong,
        Verdict::TooLow,
        Verdict::TooHigh,
    ];

    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// One verdict per schema column.
///
/// SmallVec keeps typical schemas (up to 8 columns) inline.
pub type VerdictRow = SmallVec<[Verdict; 8]>;

/// Strict equality.
#[must_use]
pub fn compare_exact(guess: Option<&str>, answer: Option<&str>) -> Verdict {
    match (guess, answer) {
        (Some(g), Some(a)) if g == a => Verdict::Correct,
        _ => Verdict::Wrong,
    }
}

/// Comma-separated token intersection.
#[must_use]
pub fn compare_list(guess: Option<&str>, answer: Option<&str>) -> Verdict {
    let (Some(guess), Some(answer)) = (guess, answer) else {
        return Verdict::Wrong;
    };
    if guess == answer {
        return Verdict::Correct;
    }

    let answer_tokens: SmallVec<[&str; 4]> = tokens(answer).collect();
    if tokens(guess).any(|t| answer_tokens.contains(&t)) {
        Verdict::Partial
    } else {
        Verdict::Wrong
    }
}

/// Equality and order.
#[must_use]
pub fn compare_year(guess: Option<i32>, answer: Option<i32>) -> Verdict {
    let (Some(guess), Some(answer)) = (guess, answer) else {
        return Verdict::Wrong;
    };
    match guess.cmp(&answer) {
        std::cmp::Ordering::Equal => Verdict::Correct,
        std::cmp::Ordering::Less => Verdict::TooLow,
        std::cmp::Ordering::Greater => Verdict::TooHigh,
    }
}

/// Score a single column.
#[must_use]
pub fn score_attribute(spec: &AttributeSpec, guess: &Entity, answer: &Entity) -> Verdict {
    let key = spec.key.as_str();
    match spec.kind {
        AttributeKind::Exact => compare_exact(guess.get_text(key), answer.get_text(key)),
        AttributeKind::List => compare_list(guess.get_text(key), answer.get_text(key)),
        AttributeKind::Year => compare_year(guess.get_year(key), answer.get_year(key)),
    }
}

/// Score every column of a guess, in schema order.
#[must_use]
pub fn score(schema: &Schema, guess: &Entity, answer: &Entity) -> VerdictRow {
    schema
        .iter()
        .map(|spec| score_attribute(spec, guess, answer))
        .collect()
}

/// A scored guess, for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessResult {
    /// The resolved entity.
    pub entity: Entity,
    /// Zero-based submission order within the round.
    pub order: usize,
    /// One verdict per schema column.
    pub verdicts: VerdictRow,
}

impl GuessResult {
    /// Check if every column is `Correct`.
    #[must_use]
    pub fn all_correct(&self) -> bool {
        self.verdicts.iter().all(|v| v.is_correct())
    }
}
