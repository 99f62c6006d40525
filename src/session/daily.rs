//! Daily game session.
//!
//! `DailySession` is the caller-facing wrapper around a `Round`. It owns the
//! round, the catalog and the optional notifier, and is the only place a side
//! effect happens: on the transition into `Won` the summary is delivered once,
//! best-effort. The round engine itself never sees the notifier.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::core::config::GameConfig;
use crate::core::error::{CatalogError, GuessError};
use crate::rules::{today, Round, RoundState, Submission};
use crate::share::{deliver_best_effort, detect, format_summary, Notifier};

/// One player's session for one day.
pub struct DailySession {
    catalog: Arc<Catalog>,
    config: GameConfig,
    round: Round,
    notifier: Option<Box<dyn Notifier>>,
    shared: bool,
}

impl DailySession {
    /// Start a session for `date`.
    pub fn new(
        catalog: Arc<Catalog>,
        config: GameConfig,
        date: NaiveDate,
    ) -> Result<Self, CatalogError> {
        config.validate()?;
        if config.schema != *catalog.schema() {
            return Err(CatalogError::InvalidConfig(
                "config schema does not match the catalog schema".into(),
            ));
        }
        let round = Round::for_date(&catalog, &config, date);
        Ok(Self {
            catalog,
            config,
            round,
            notifier: None,
            shared: false,
        })
    }

    /// Start a session for today's local date.
    pub fn for_today(catalog: Arc<Catalog>, config: GameConfig) -> Result<Self, CatalogError> {
        Self::new(catalog, config, today())
    }

    /// Attach a notifier. Ignored unless it reports itself available.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = detect(Some(notifier));
        self
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.round.state()
    }

    #[must_use]
    pub fn has_notifier(&self) -> bool {
        self.notifier.is_some()
    }

    /// Whether the win summary has been handed to the notifier.
    #[must_use]
    pub fn has_shared(&self) -> bool {
        self.shared
    }

    /// Shareable summary of the round so far.
    #[must_use]
    pub fn summary(&self) -> String {
        format_summary(
            &self.round,
            self.catalog.schema(),
            &self.config.glyphs,
            &self.config.share_title,
        )
    }

    /// Submit a guess.
    ///
    /// Notification failures never surface here.
    pub fn submit(&mut self, input: &str) -> Result<Submission, GuessError> {
        let before = self.round.state();
        let (round, submission) = self.round.submit_guess(&self.catalog, input)?;
        self.round = round;

        if before != RoundState::Won && self.round.state() == RoundState::Won {
            self.share();
        }

        Ok(submission)
    }

    fn share(&mut self) {
        if self.shared {
            return;
        }
        self.shared = true;

        if let Some(notifier) = &self.notifier {
            let summary = self.summary();
            deliver_best_effort(notifier.as_ref(), &summary);
        }
    }
}

impl std::fmt::Debug for DailySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DailySession")
            .field("round", &self.round)
            .field("has_notifier", &self.notifier.is_some())
            .field("shared", &self.shared)
            .finish()
    }
}
