//! # Courier Client
//! A tick-driven client that ships application commands to a remote host over
//! a request/response transport, then confirms with a second round-trip that
//! the host registered each of them.
//!
//! The host submits messages with [`DispatchManager::submit`] and calls
//! [`DispatchManager::tick`] once per frame. Results arrive through completion
//! handlers, or through [`DeliveryEvents`] for messages submitted without one.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use courier_shared::{
    AckFailurePolicy, ApplicationCode, ConfigError, ConfirmationProbe, Destination,
    DispatchConfig, Envelope, IdGenerator, Instant, MessageId, OverflowPolicy, Response,
    ResponseBody, SyncMode, TimeError, TransportError,
};

mod delivery_events;
mod dispatch;
mod error;
mod progress;
mod transport;

pub use delivery_events::{ConfirmedEvent, DeliveryEvent, DeliveryEvents, TimedOutEvent};
pub use dispatch::{
    dispatch_manager::DispatchManager,
    message_context::{Completion, CompletionHandler},
    submission::Submission,
};
pub use error::SubmitError;
pub use progress::{NoProgress, ProgressIndicator};
pub use transport::{ResponseReceiver, ResponseReceiverResult, Transport};
