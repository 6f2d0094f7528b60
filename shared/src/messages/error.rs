use thiserror::Error;

/// Errors that can occur while parsing a MessageId from its text form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageIdError {
    /// Text form does not have the expected number of hex digits
    #[error("MessageId must be {expected} hex digits, got {len}")]
    InvalidLength { len: usize, expected: usize },

    /// Text form contains a character that is not a hex digit
    #[error("MessageId '{text}' contains non-hex characters")]
    InvalidHex { text: String },
}
