use std::time::Duration;

/// Monotonic point in time used to stamp sends and measure in-flight duration.
///
/// Every time-dependent operation takes `now` explicitly, so hosts (and tests)
/// can drive the dispatch loop from their own clock by advancing an `Instant`
/// with [`Instant::add_millis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    inner: std::time::Instant,
}

impl Instant {
    /// Creates an Instant from the moment the method is called
    pub fn now() -> Self {
        Self {
            inner: std::time::Instant::now(),
        }
    }

    /// Returns time elapsed between this Instant and `now`, or zero if `now`
    /// is earlier than this Instant
    pub fn elapsed(&self, now: &Self) -> Duration {
        now.inner.saturating_duration_since(self.inner)
    }

    /// Returns time remaining from `now` until this Instant, or zero if this
    /// Instant is already in the past
    pub fn until(&self, now: &Self) -> Duration {
        self.inner.saturating_duration_since(now.inner)
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.inner > other.inner
    }

    /// Moves this Instant forward by the given number of milliseconds
    pub fn add_millis(&mut self, millis: u32) {
        self.inner += Duration::from_millis(u64::from(millis));
    }

    /// Moves this Instant forward by the given Duration
    pub fn add_duration(&mut self, duration: Duration) {
        self.inner += duration;
    }

    pub fn inner(&self) -> std::time::Instant {
        self.inner
    }
}

impl From<std::time::Instant> for Instant {
    fn from(inner: std::time::Instant) -> Self {
        Self { inner }
    }
}
