use thiserror::Error;

/// Errors reported by `DispatchConfig::validate`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A zero in-flight duration would expire every message on the tick after it is sent
    #[error("max_in_flight_duration must be greater than zero")]
    ZeroInFlightDuration,

    /// A zero-capacity queue could never accept a submission
    #[error("queue_capacity must be greater than zero when set. Use None for an unbounded queue")]
    ZeroQueueCapacity,
}
