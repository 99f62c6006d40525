//! Error types.
//!
//! Guess errors are local and recoverable: the round is left untouched and
//! the player may try again. Catalog errors are configuration errors raised
//! while loading data at startup and are fatal to the caller.
//!
//! Duplicate guesses are deliberately absent from the taxonomy; they are
//! coalesced into a no-op by the round.

use thiserror::Error;

use crate::catalog::EntityId;

/// Rejection of a submitted guess.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input was empty or whitespace only.
    #[error("guess is empty")]
    EmptyInput,

    /// Input did not match any catalog name.
    #[error("no entity named '{0}'")]
    UnknownEntity(String),

    /// The round is won, lost, or out of guesses.
    #[error("round is closed")]
    RoundClosed,
}

/// Catalog or configuration could not be loaded.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog is empty")]
    Empty,

    #[error("duplicate entity id {0}")]
    DuplicateId(EntityId),

    #[error("duplicate entity name '{0}'")]
    DuplicateName(String),

    #[error("{0} has an empty name")]
    EmptyName(EntityId),

    #[error("{entity}: attribute '{key}' is not part of the schema")]
    UnknownAttribute { entity: EntityId, key: String },

    #[error("{entity}: attribute '{key}' must be {expected}")]
    InvalidAttribute {
        entity: EntityId,
        key: String,
        expected: &'static str,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Any error the engine can report.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error(transparent)]
    Configuration(#[from] CatalogError),
}

impl Error {
    /// Configuration errors are fatal; guess errors are not.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}
