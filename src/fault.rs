//! Failure reasons delivered to suspended frames.

use derive_more::{Display, Error};

/// A failure reason injected into, or raised by, a resumed frame.
///
/// This is the same encoding the host model uses for its own failures, so
/// code inside a resumed frame observes an identical `Fault` whether the
/// failure arrived through the bridge or through a normal in-model
/// resumption.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{message}")]
pub struct Fault {
    message: String,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Fault {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
