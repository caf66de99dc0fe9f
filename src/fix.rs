//! Position fix state
use hifitime::Epoch;

/// Current fix status, as reported by the receiver.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FixState {
    /// A position solution currently exists
    Acquired,
    /// No position solution yet
    #[default]
    NotAcquired,
}

/// [Fix] is the minimal view of a position solution the dashboard needs:
/// the instant the receiver stamped it with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fix {
    /// Receiver timestamp
    pub epoch: Epoch,
}

impl Fix {
    /// Builds a new [Fix] stamped at "epoch"
    pub fn new(epoch: Epoch) -> Self {
        Self { epoch }
    }
}
