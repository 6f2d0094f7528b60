use std::{fmt, str::FromStr};

use crate::messages::{constants::MESSAGE_ID_HEX_LEN, error::MessageIdError};

/// Correlates a message across its primary send, its acknowledgement and its
/// confirmation round.
///
/// The high 64 bits hold the wall-clock milliseconds at generation, the low
/// 64 bits are random. Ids therefore sort roughly by creation time.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u128);

impl MessageId {
    pub fn from_parts(issued_millis: u64, random: u64) -> Self {
        Self((u128::from(issued_millis) << 64) | u128::from(random))
    }

    pub fn from_u128(value: u128) -> Self {
        Self(value)
    }

    pub fn to_u128(&self) -> u128 {
        self.0
    }

    /// Wall-clock milliseconds encoded in the id at generation time
    pub fn issued_millis(&self) -> u64 {
        (self.0 >> 64) as u64
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl fmt::Debug for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessageId({})", self)
    }
}

impl FromStr for MessageId {
    type Err = MessageIdError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.len() != MESSAGE_ID_HEX_LEN {
            return Err(MessageIdError::InvalidLength {
                len: text.len(),
                expected: MESSAGE_ID_HEX_LEN,
            });
        }
        // from_str_radix tolerates a leading '+', ids never carry one
        if !text.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(MessageIdError::InvalidHex {
                text: text.to_string(),
            });
        }
        u128::from_str_radix(text, 16)
            .map(Self)
            .map_err(|_| MessageIdError::InvalidHex {
                text: text.to_string(),
            })
    }
}
