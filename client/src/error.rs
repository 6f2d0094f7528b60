use thiserror::Error;

use courier_shared::TimeError;

/// Errors that can occur when submitting a message to the DispatchManager
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Primary queue is at capacity and the overflow policy is Reject
    #[error("Primary queue is full ({capacity} unsent messages). Tick the DispatchManager to drain it, or raise queue_capacity")]
    QueueFull { capacity: usize },

    /// Could not read the wall clock to stamp the envelope
    #[error("Could not stamp envelope: {0}")]
    Clock(#[from] TimeError),
}
