//! A single day's round.
//!
//! A `Round` holds the answer, the accepted guesses in submission order,
//! and the guess budget. It only changes by appending a validated guess;
//! `submit_guess` returns the updated round by value and leaves `self`
//! untouched (guesses live in an `im::Vector`, so the clone is
//! O(1)).
//!
//! ## Validation order
//!
//! 1. Empty input → `GuessError::EmptyInput`
//! 2. Unknown name → `GuessError::UnknownEntity`
//! 3. Terminal round → `GuessError::RoundClosed`
//! 4. Already guessed → `Submission::Duplicate`, round unchanged
//! 5. Budget exhausted → `GuessError::RoundClosed`
//! 6. Append
//!
//! ## Win rule
//!
//! A round is won when ANY accepted guess is the answer. Some historical
//! builds only checked the most recent guess; with duplicate coalescing the
//! two agree in play, but the order-independent rule is the one used here.

use chrono::NaiveDate;
use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::scoring::{score, GuessResult};
use super::selection::{select_answer_with, today};
use crate::catalog::{Catalog, Entity, EntityId, Schema};
use crate::core::config::GameConfig;
use crate::core::error::GuessError;

/// Overall state of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    /// Won or lost.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, RoundState::InProgress)
    }
}

/// An accepted guess.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    /// The guessed entity.
    pub entity: Entity,
    /// Zero-based submission order.
    pub order: usize,
}

/// Successful outcome of `Round::submit_guess`.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// The guess was appended.
    Accepted(GuessResult),
    /// The entity was already guessed; the round is unchanged and this is
    /// the earlier result.
    Duplicate(GuessResult),
}

impl Submission {
    /// The scored guess.
    #[must_use]
    pub fn result(&self) -> &GuessResult {
        match self {
            Submission::Accepted(r) | Submission::Duplicate(r) => r,
        }
    }

    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Submission::Duplicate(_))
    }
}

/// Derive the state of a round from its guesses.
#[must_use]
pub fn round_state<'a, I>(guesses: I, answer: EntityId, max_guesses: usize) -> RoundState
where
    I: IntoIterator<Item = &'a Guess>,
{
    let mut count = 0;
    for guess in guesses {
        if guess.entity.id == answer {
            return RoundState::Won;
        }
        count += 1;
    }
    if count >= max_guesses {
        RoundState::Lost
    } else {
        RoundState::InProgress
    }
}

/// One day's round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    answer: Entity,
    guesses: Vector<Guess>,
    max_guesses: usize,
}

impl Round {
    /// Create a round for a known answer.
    #[must_use]
    pub fn new(answer: Entity, max_guesses: usize) -> Self {
        Self {
            answer,
            guesses: Vector::new(),
            max_guesses,
        }
    }

    /// Create the round for `date`.
    #[must_use]
    pub fn for_date(catalog: &Catalog, config: &GameConfig, date: NaiveDate) -> Self {
        let answer = select_answer_with(date, catalog, config.answer_multiplier);
        debug!("answer for {} is {}", date, answer.id);
        Self::new(answer.clone(), config.max_guesses)
    }

    /// Create the round for today's local date.
    #[must_use]
    pub fn for_today(catalog: &Catalog, config: &GameConfig) -> Self {
        Self::for_date(catalog, config, today())
    }

    #[must_use]
    pub fn answer(&self) -> &Entity {
        &self.answer
    }

    /// Accepted guesses in submission order.
    #[must_use]
    pub fn guesses(&self) -> &Vector<Guess> {
        &self.guesses
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Guesses left in the budget.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        round_state(self.guesses.iter(), self.answer.id, self.max_guesses)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state().is_terminal()
    }

    /// Check if an entity was already guessed this round.
    #[must_use]
    pub fn has_guessed(&self, id: EntityId) -> bool {
        self.guesses.iter().any(|g| g.entity.id == id)
    }

    /// Validate and score a guess, returning the updated round.
    ///
    /// On error, or for a duplicate, the returned state is identical to
    /// `self`.
    pub fn submit_guess(
        &self,
        catalog: &Catalog,
        input: &str,
    ) -> Result<(Round, Submission), GuessError> {
        let entity = catalog.resolve(input)?;

        let state = self.state();
        if state.is_terminal() {
            return Err(GuessError::RoundClosed);
        }

        if let Some(prior) = self.guesses.iter().find(|g| g.entity.id == entity.id) {
            debug!("{} already guessed, ignoring", entity.name);
            let result = self.score_guess(catalog.schema(), prior);
            return Ok((self.clone(), Submission::Duplicate(result)));
        }

        if self.guesses.len() >= self.max_guesses && state != RoundState::Won {
            return Err(GuessError::RoundClosed);
        }

        let guess = Guess {
            entity: entity.clone(),
            order: self.guesses.len(),
        };
        let result = self.score_guess(catalog.schema(), &guess);

        let mut next = self.clone();
        next.guesses.push_back(guess);
        debug!(
            "accepted guess {} ({}/{})",
            entity.name,
            next.guesses.len(),
            next.max_guesses
        );

        match next.state() {
            RoundState::Won => info!("round won in {} guesses", next.guesses.len()),
            RoundState::Lost => info!("round lost, answer was {}", next.answer.name),
            RoundState::InProgress => {}
        }

        Ok((next, Submission::Accepted(result)))
    }

    /// In-place variant of `submit_guess`.
    pub fn submit(&mut self, catalog: &Catalog, input: &str) -> Result<Submission, GuessError> {
        let (next, submission) = self.submit_guess(catalog, input)?;
        *self = next;
        Ok(submission)
    }

    /// Score every accepted guess, in order.
    #[must_use]
    pub fn results(&self, schema: &Schema) -> Vec<GuessResult> {
        self.guesses
            .iter()
            .map(|g| self.score_guess(schema, g))
            .collect()
    }

    /// End-of-round message, or `None` while in progress.
    #[must_use]
    pub fn banner(&self) -> Option<String> {
        match self.state() {
            RoundState::Won => Some(format!(
                "You found {} in {} guesses!",
                self.answer.name,
                self.guesses.len()
            )),
            RoundState::Lost => Some(format!(
                "Out of guesses! The answer was {}.",
                self.answer.name
            )),
            RoundState::InProgress => None,
        }
    }

    fn score_guess(&self, schema: &Schema, guess: &Guess) -> GuessResult {
        GuessResult {
            entity: guess.entity.clone(),
            order: guess.order,
            verdicts: score(schema, &guess.entity, &self.answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::scoring::Verdict;

    fn champion(id: u32, name: &str, year: i32) -> Entity {
        Entity::new(EntityId::new(id), name)
            .with_attr("region", "Ionia")
            .with_attr("resource", "Mana")
            .with_attr("lane", "Middle")
            .with_attr("genre", "Mage")
            .with_attr("attackType", "Ranged")
            .with_attr("gender", "Female")
            .with_attr("releaseDate", year)
    }

    fn catalog(n: u32) -> Catalog {
        let entities = (1..=n)
            .map(|i| champion(i, &format!("Champ{}", i), 2009 + i as i32))
            .collect();
        Catalog::new(Schema::champions(), entities).unwrap()
    }

    fn round_for(catalog: &Catalog, answer: u32) -> Round {
        let answer = catalog.get(EntityId::new(answer)).unwrap().clone();
        Round::new(answer, 8)
    }

    #[test]
    fn test_new_round() {
        let catalog = catalog(3);
        let round = round_for(&catalog, 2);
        assert_eq!(round.state(), RoundState::InProgress);
        assert_eq!(round.guess_count(), 0);
        assert_eq!(round.remaining(), 8);
        assert!(round.banner().is_none());
    }

    #[test]
    fn test_submit_returns_new_round() {
        let catalog = catalog(3);
        let round = round_for(&catalog, 2);

        let (next, submission) = round.submit_guess(&catalog, "champ1").unwrap();
        assert_eq!(round.guess_count(), 0);
        assert_eq!(next.guess_count(), 1);
        assert!(!submission.is_duplicate());

        let result = submission.result();
        assert_eq!(result.entity.name, "Champ1");
        assert_eq!(result.order, 0);
        assert_eq!(result.verdicts.len(), 7);
    }

    #[test]
    fn test_validation_errors_leave_round_unchanged() {
        let catalog = catalog(3);
        let mut round = round_for(&catalog, 2);

        assert_eq!(round.submit(&catalog, "  "), Err(GuessError::EmptyInput));
        assert_eq!(
            round.submit(&catalog, "Teemo"),
            Err(GuessError::UnknownEntity("Teemo".into()))
        );
        assert_eq!(round.guess_count(), 0);
    }

    #[test]
    fn test_duplicate_is_noop() {
        let catalog = catalog(3);
        let mut round = round_for(&catalog, 2);

        round.submit(&catalog, "Champ1").unwrap();
        let submission = round.submit(&catalog, "CHAMP1").unwrap();

        assert!(submission.is_duplicate());
        assert_eq!(submission.result().order, 0);
        assert_eq!(round.guess_count(), 1);
    }

    #[test]
    fn test_win() {
        let catalog = catalog(3);
        let mut round = round_for(&catalog, 2);

        round.submit(&catalog, "Champ1").unwrap();
        let submission = round.submit(&catalog, "Champ2").unwrap();

        assert!(submission.result().all_correct());
        assert_eq!(round.state(), RoundState::Won);
        assert_eq!(
            round.banner().as_deref(),
            Some("You found Champ2 in 2 guesses!")
        );
        assert_eq!(round.submit(&catalog, "Champ3"), Err(GuessError::RoundClosed));
        assert_eq!(round.guess_count(), 2);
    }

    #[test]
    fn test_win_with_missing_values() {
        let catalog = Catalog::new(
            Schema::champions(),
            vec![Entity::new(EntityId::new(1), "Bare").with_attr("releaseDate", 2009)],
        )
        .unwrap();
        let mut round = Round::new(catalog.all()[0].clone(), 8);

        let submission = round.submit(&catalog, "bare").unwrap();

        assert!(!submission.result().all_correct());
        assert_eq!(submission.result().verdicts[6], Verdict::Correct);
        assert_eq!(round.state(), RoundState::Won);
    }

    #[test]
    fn test_duplicate_after_win_is_closed() {
        let catalog = catalog(3);
        let mut round = round_for(&catalog, 2);
        round.submit(&catalog, "Champ2").unwrap();
        assert_eq!(round.submit(&catalog, "Champ2"), Err(GuessError::RoundClosed));
    }

    #[test]
    fn test_loss() {
        let catalog = catalog(10);
        let mut round = round_for(&catalog, 10);

        for i in 1..=8 {
            round.submit(&catalog, &format!("Champ{}", i)).unwrap();
        }

        assert_eq!(round.state(), RoundState::Lost);
        assert_eq!(round.remaining(), 0);
        assert_eq!(
            round.banner().as_deref(),
            Some("Out of guesses! The answer was Champ10.")
        );
        assert_eq!(round.submit(&catalog, "Champ10"), Err(GuessError::RoundClosed));
        assert_eq!(round.guess_count(), 8);
    }

    #[test]
    fn test_win_on_last_guess() {
        let catalog = catalog(10);
        let mut round = round_for(&catalog, 8);

        for i in 1..=8 {
            round.submit(&catalog, &format!("Champ{}", i)).unwrap();
        }
        assert_eq!(round.state(), RoundState::Won);
    }

    #[test]
    fn test_round_state_any_guess_matches() {
        let answer = champion(2, "Champ2", 2011);
        let guesses = vec![
            Guess { entity: answer.clone(), order: 0 },
            Guess { entity: champion(1, "Champ1", 2010), order: 1 },
        ];
        assert_eq!(round_state(&guesses, answer.id, 8), RoundState::Won);
        assert_eq!(round_state(&guesses[1..], answer.id, 8), RoundState::InProgress);
        assert_eq!(round_state(&guesses[1..], answer.id, 1), RoundState::Lost);
    }

    #[test]
    fn test_results_in_order() {
        let catalog = catalog(3);
        let mut round = round_for(&catalog, 2);
        round.submit(&catalog, "Champ3").unwrap();
        round.submit(&catalog, "Champ1").unwrap();

        let results = round.results(catalog.schema());
        let names: Vec<_> = results.iter().map(|r| r.entity.name.as_str()).collect();
        assert_eq!(names, vec!["Champ3", "Champ1"]);

        // releaseDate is the last column
        use crate::rules::Verdict;
        assert_eq!(results[0].verdicts[6], Verdict::TooHigh);
        assert_eq!(results[1].verdicts[6], Verdict::TooLow);
    }

    #[test]
    fn test_for_date() {
        let catalog = catalog(3);
        let config = GameConfig::default();
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let round = Round::for_date(&catalog, &config, date);
        assert_eq!(round.answer().id, EntityId::new(3));
        assert_eq!(round.max_guesses(), 8);
    }
}
