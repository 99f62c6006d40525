//! Built-in champion catalog.
//!
//! A small League of Legends data set in the champion schema:
//! region, resource, lane, genre, attack type, gender, release year.
//! Useful as a default catalog and for tests.

use crate::catalog::{Catalog, Schema};
use crate::core::error::CatalogError;

/// Raw champion data.
pub const CHAMPIONS_JSON: &str = include_str!("champions.json");

/// Load the built-in champion catalog.
pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(Schema::champions(), CHAMPIONS_JSON)
}
