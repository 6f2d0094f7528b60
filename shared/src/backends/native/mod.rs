mod instant;
mod timestamp;

pub use instant::Instant;
pub use timestamp::{TimeError, Timestamp};
