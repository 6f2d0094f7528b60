//! # Courier Shared
//! Common functionality shared between the courier client & its test harness:
//! envelopes, message ids, the clock backend, the expiry queue and configuration.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

mod backends;
mod config;
mod expiry_queue;
mod messages;
mod transport;
mod types;

pub use backends::{Instant, TimeError, Timestamp};
pub use config::{
    dispatch_config::{AckFailurePolicy, DispatchConfig, OverflowPolicy},
    error::ConfigError,
};
pub use expiry_queue::ExpiryQueue;
pub use messages::{
    constants::{
        DEFAULT_DESTINATION, DEFAULT_MAX_IN_FLIGHT_MILLIS, DEFAULT_SUCCESS_CODE,
        MESSAGE_ID_HEX_LEN,
    },
    envelope::{ConfirmationProbe, Envelope},
    error::MessageIdError,
    id_generator::IdGenerator,
    message_id::MessageId,
};
pub use transport::{
    error::TransportError,
    response::{Response, ResponseBody},
};
pub use types::{ApplicationCode, Destination, SyncMode};
