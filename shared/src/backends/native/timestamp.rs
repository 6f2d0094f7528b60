use std::time::SystemTime;

use thiserror::Error;

/// Error type for timestamp operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeError {
    /// System time is before UNIX epoch
    #[error("System time is before UNIX epoch")]
    SystemTimeBeforeEpoch,
}

/// Wall-clock time, used for envelope `issued_at` stamps and the time half of
/// message ids. Never used to measure in-flight duration, see `Instant` for that.
pub struct Timestamp;

impl Timestamp {
    /// Returns the current timestamp in milliseconds since UNIX epoch.
    ///
    /// # Errors
    /// Returns `TimeError::SystemTimeBeforeEpoch` if system time is before UNIX epoch.
    pub fn try_now_millis() -> Result<u64, TimeError> {
        SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .map_err(|_| TimeError::SystemTimeBeforeEpoch)
    }

    /// Returns the current timestamp in seconds since UNIX epoch.
    ///
    /// # Errors
    /// Returns `TimeError::SystemTimeBeforeEpoch` if system time is before UNIX epoch.
    pub fn try_now() -> Result<u64, TimeError> {
        Self::try_now_millis().map(|millis| millis / 1000)
    }
}
