//! Game session: a round plus the optional notification boundary.

pub mod daily;

pub use daily::DailySession;
