//! Optional external notification surface.
//!
//! Some environments can post a text message somewhere (a chat channel, a
//! lobby). Whether that capability exists is only known at runtime, so it is
//! injected as a `Notifier` and treated as absent unless `is_available`
//! says otherwise. Delivery is best-effort: errors are logged by the caller
//! and never affect the round.

use log::{debug, warn};
use thiserror::Error;

/// Failure to deliver a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("notification surface unavailable")]
    Unavailable,

    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// A best-effort "deliver text message" capability.
pub trait Notifier {
    /// Deliver a message. No guarantee of success.
    fn deliver(&self, message: &str) -> Result<(), NotifyError>;

    /// Whether the surface was initialized and can be used.
    fn is_available(&self) -> bool {
        true
    }
}

/// The absent capability.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn deliver(&self, _message: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}

impl<F> Notifier for F
where
    F: Fn(&str) -> Result<(), NotifyError>,
{
    fn deliver(&self, message: &str) -> Result<(), NotifyError> {
        self(message)
    }
}

/// Keep a notifier only if it reports itself available.
#[must_use]
pub fn detect(candidate: Option<Box<dyn Notifier>>) -> Option<Box<dyn Notifier>> {
    match candidate {
        Some(notifier) if notifier.is_available() => Some(notifier),
        Some(_) => {
            debug!("notifier not available, sharing disabled");
            None
        }
        None => None,
    }
}

/// Deliver a message, swallowing and logging any failure.
///
/// Returns whether delivery succeeded.
pub fn deliver_best_effort(notifier: &dyn Notifier, message: &str) -> bool {
    match notifier.deliver(message) {
        Ok(()) => true,
        Err(err) => {
            warn!("failed to share result: {}", err);
            false
        }
    }
}
