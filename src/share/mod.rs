//! Result sharing: glyph table, summary text, and the notifier capability.

pub mod glyphs;
pub mod notifier;
pub mod summary;

pub use glyphs::{GlyphTable, FALLBACK_GLYPH};
pub use notifier::{deliver_best_effort, detect, NoopNotifier, Notifier, NotifyError};
pub use summary::{format_summary, header};
