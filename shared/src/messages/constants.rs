// Dispatch defaults

/// Maximum time a message may spend between its primary send and its
/// confirmation before the sweep expires it
pub const DEFAULT_MAX_IN_FLIGHT_MILLIS: u64 = 10_000;

/// Application code a primary acknowledgement must carry to count as accepted
pub const DEFAULT_SUCCESS_CODE: i32 = 0;

/// Destination used when a submission carries no override
pub const DEFAULT_DESTINATION: &str = "/";

// Message ids

/// A MessageId renders as this many lowercase hex digits (128 bits)
pub const MESSAGE_ID_HEX_LEN: usize = 32;
