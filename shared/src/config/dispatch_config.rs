use std::{default::Default, time::Duration};

use crate::{
    config::error::ConfigError,
    messages::constants::{
        DEFAULT_DESTINATION, DEFAULT_MAX_IN_FLIGHT_MILLIS, DEFAULT_SUCCESS_CODE,
    },
    types::{ApplicationCode, Destination},
};

/// What happens to a message whose primary send is answered with anything
/// other than an accepted acknowledgement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AckFailurePolicy {
    /// Forget the message. It never reaches the in-flight table, so no
    /// completion ever fires for it, and a blocking message keeps the gate
    /// held until `reset`.
    Drop,
    /// Track the message from the moment it is sent. Rejected or unanswered
    /// sends are reported as timed out by the in-flight sweep.
    #[default]
    Expire,
}

/// What `submit` does when the primary queue is at capacity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Refuse the new submission
    #[default]
    Reject,
    /// Discard the oldest unsent submission, without a completion, to make room
    DropOldest,
}

/// Contains Config properties which will be used by the DispatchManager
#[derive(Clone, Debug)]
pub struct DispatchConfig {
    /// Maximum time between a message's primary send and its confirmation.
    /// Messages still outstanding after this long are reported as timed out.
    pub max_in_flight_duration: Duration,
    /// Destination for submissions that carry no override
    pub default_destination: Destination,
    /// Destination for confirmation probes. When unset, a probe goes to the
    /// same destination as the message it asks about.
    pub confirmation_destination: Option<Destination>,
    /// Application code an acknowledgement body must carry to be accepted
    pub success_code: ApplicationCode,
    pub ack_failure_policy: AckFailurePolicy,
    /// Queue a message for another confirmation probe when a probe fails or
    /// comes back unmatched. Off by default: the sweep resolves such messages.
    pub requeue_unconfirmed: bool,
    /// Maximum number of unsent messages. None means unbounded.
    pub queue_capacity: Option<usize>,
    pub overflow_policy: OverflowPolicy,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_in_flight_duration: Duration::from_millis(DEFAULT_MAX_IN_FLIGHT_MILLIS),
            default_destination: Destination::new(DEFAULT_DESTINATION),
            confirmation_destination: None,
            success_code: DEFAULT_SUCCESS_CODE,
            ack_failure_policy: AckFailurePolicy::default(),
            requeue_unconfirmed: false,
            queue_capacity: None,
            overflow_policy: OverflowPolicy::default(),
        }
    }
}

impl DispatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_in_flight_duration.is_zero() {
            return Err(ConfigError::ZeroInFlightDuration);
        }
        if self.queue_capacity == Some(0) {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        Ok(())
    }
}
