//! Answer-of-the-day selection.
//!
//! The answer is `catalog[(day_of_year * multiplier) % len]`, where
//! `day_of_year` is 1-based (January 1st is day 1, leap years included).
//! The mapping only has to be stable within a calendar day and vary across
//! days; it makes no uniformity guarantees.

use chrono::{Datelike, Local, NaiveDate};

use crate::catalog::{Catalog, Entity};
use crate::core::config::DEFAULT_ANSWER_MULTIPLIER;

/// Today's date in the local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 1-based ordinal day of the year.
#[must_use]
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Index into a catalog of `len` entities for `date`.
///
/// Returns `None` when `len` is zero.
#[must_use]
pub fn answer_index(date: NaiveDate, len: usize, multiplier: u32) -> Option<usize> {
    let scaled = u64::from(day_of_year(date)) * u64::from(multiplier);
    let index = scaled.checked_rem(len as u64)?;
    // index < len, so it fits in usize.
    Some(index as usize)
}

/// Select the answer for `date` with the default multiplier.
#[must_use]
pub fn select_answer(date: NaiveDate, catalog: &Catalog) -> &Entity {
    select_answer_with(date, catalog, DEFAULT_ANSWER_MULTIPLIER)
}

/// Select the answer for `date` with a custom multiplier.
#[must_use]
pub fn select_answer_with(date: NaiveDate, catalog: &Catalog, multiplier: u32) -> &Entity {
    // A catalog is never empty.
    let index = answer_index(date, catalog.len(), multiplier).unwrap_or_default();
    &catalog.all()[index]
}
