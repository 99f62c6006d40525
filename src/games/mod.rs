//! Concrete game data sets.

pub mod champions;
